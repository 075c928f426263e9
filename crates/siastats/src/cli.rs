use clap::Parser;

use siastats_core::Endpoint;

/// Query the SiaStats network statistics API.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Endpoint to fetch, by kebab-case name (see --list).
    pub endpoint: Option<Endpoint>,

    /// Root URL of the statistics host.
    #[arg(long, default_value = siastats_core::DEFAULT_ROOT, env = "SIASTATS_ROOT")]
    pub root: String,

    /// List the known endpoints and their URL suffixes.
    #[arg(long)]
    pub list: bool,
}

mod cli;

use clap::Parser;
use eyre::{bail, eyre, WrapErr};

use siastats_core::{ApiResponse, Endpoint, SiaStats};

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if args.list {
        for endpoint in Endpoint::ALL {
            println!("{:<20} {}", endpoint.name(), endpoint.suffix());
        }
        return Ok(());
    }

    let Some(endpoint) = args.endpoint else {
        bail!("no endpoint given; pass an endpoint name, or --list to see them");
    };

    let client = SiaStats::with_root(&args.root)
        .wrap_err_with(|| format!("while constructing a client for `{}`", args.root))?;

    tracing::debug!(%endpoint, root = client.root(), "fetching");

    match client
        .fetch(endpoint)
        .wrap_err_with(|| format!("while querying `{endpoint}`"))?
    {
        ApiResponse::Success(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        ApiResponse::Failure { status } => Err(eyre!(
            "`{endpoint}` returned HTTP {status} from {}",
            client.root()
        )),
    }
}

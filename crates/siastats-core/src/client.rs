//! Blocking HTTP client for the SiaStats API.
//!
//! One GET per call, with no retry logic and no caching. A 200 response is
//! decoded as JSON and returned structure-intact, any other status becomes
//! [`ApiResponse::Failure`], and transport faults or undecodable 200 bodies
//! propagate as [`Error`].

use reqwest::blocking::Client as HttpClient;
use reqwest::{StatusCode, Url};
use tracing::{debug, trace};

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::response::ApiResponse;

/// Root URL all documented endpoint suffixes are appended to.
pub const DEFAULT_ROOT: &str = "https://siastats.info";

/// Client for the SiaStats network statistics API.
///
/// Holds the root URL, fixed at construction, and a reusable HTTP client.
/// No state is shared between calls; separate instances used from separate
/// threads are fully independent.
#[derive(Debug, Clone)]
pub struct SiaStats {
    http: HttpClient,
    root: String,
}

impl SiaStats {
    /// Client for the documented root, [`DEFAULT_ROOT`].
    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
            root: DEFAULT_ROOT.to_owned(),
        }
    }

    /// Client for an alternate root (a mirror, or a mock server in tests).
    ///
    /// Accepts `http`/`https` URLs only; a trailing slash is stripped so
    /// suffix concatenation stays exact.
    pub fn with_root(root: &str) -> Result<Self, Error> {
        let parsed = Url::parse(root)
            .map_err(|e| Error::InvalidRoot(format!("could not parse `{root}`: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidRoot(format!(
                    "unsupported scheme `{other}`; expected http or https"
                )));
            }
        }
        Ok(Self {
            http: HttpClient::new(),
            root: root.trim_end_matches('/').to_owned(),
        })
    }

    /// The root URL this client queries.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Query a known endpoint from the table.
    pub fn fetch(&self, endpoint: Endpoint) -> Result<ApiResponse, Error> {
        self.fetch_suffix(endpoint.suffix())
    }

    /// Query an arbitrary suffix appended verbatim to the root.
    ///
    /// Escape hatch for paths outside the endpoint table; the documented
    /// endpoints are all reachable through [`SiaStats::fetch`].
    pub fn fetch_suffix(&self, suffix: &str) -> Result<ApiResponse, Error> {
        self.query(&self.endpoint_url(suffix))
    }

    fn endpoint_url(&self, suffix: &str) -> String {
        format!("{}{}", self.root, suffix)
    }

    /// Single blocking GET with the stock client configuration: no custom
    /// headers, no timeout override, no retry.
    fn query(&self, url: &str) -> Result<ApiResponse, Error> {
        debug!(%url, "query");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(%url, %status, "non-success response");
            return Ok(ApiResponse::Failure {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!(%url, %status, body_len = body.len(), "response");
        trace!(%url, body = %body, "response body");

        let value = serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_owned(),
            source,
        })?;
        Ok(ApiResponse::Success(value))
    }

    // ==========================================================================
    // General Endpoints
    // ==========================================================================

    /// Current consensus status.
    ///
    /// Returns a one-element array:
    /// `[{"consensusblock":282682,"lastblock":282682,"mempool":97,
    /// "coinsupply":44930512992,"totalTx":"14332509",
    /// "heartbeat":1603223359984,"peers":8,"version":"1.4.10"}]`
    pub fn current_status(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Status)
    }

    /// File count and file size on Skynet, per portal.
    ///
    /// Array of records:
    /// `[{"date":1584835200000,
    ///    "files":{"SiaSky.net":45117,...,"total":71826},
    ///    "size":{"SiaSky.net":0.86,...,"total":0.97}},...]`
    pub fn skynet_data(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Skynet)
    }

    /// Consensus database size (GB), raw blockchain size (bytes) and average
    /// block size (kB) evolution.
    pub fn blockchain_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::BlockchainSize)
    }

    // ==========================================================================
    // Contract Data
    // ==========================================================================

    /// Active contract history; sizes in TB, costs in millions of siacoins.
    ///
    /// `[{"time":1433548800000,"activecontractcount":0,
    ///    "activecontractsize":0,"activecontractcost":0},...]`
    pub fn active_contract_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::ActiveContracts)
    }

    /// Cumulative contract history; sizes in TB, costs in millions of
    /// siacoins.
    pub fn cumulative_contract_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::HistoricContracts)
    }

    /// Cost, size and count of newly formed contracts, daily plus 7-day
    /// averages (`count7d`, `size7d`, `cost7d` on recent records).
    pub fn new_contract_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::NewContracts)
    }

    // ==========================================================================
    // Host & User Data
    // ==========================================================================

    /// Active host count history.
    ///
    /// `[{"date":1506384000000,"hosts":630},...,
    ///   {"date":1603152000000,"hosts":256,"hostsonline":310}]`
    pub fn active_host_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::ActiveHosts)
    }

    /// Average upload and download price history, in SC and USD.
    pub fn bandwidth_price_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::BandwidthPrices)
    }

    /// Available and utilized storage history, in TB.
    ///
    /// `[{"date":1505088000000,"total":3131.175,"used":73.92},...]`
    pub fn storage_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Storage)
    }

    /// Average storage price, new-contract formation fees and siafund fees;
    /// prices in SC/TB/month, `usd` in USD/TB/month.
    pub fn storage_price_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::StoragePrices)
    }

    /// Percentage of network storage used vs. free.
    pub fn usage_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Usage)
    }

    // ==========================================================================
    // Supply Data
    // ==========================================================================

    /// Current coin supply, a single scalar in siacoins.
    pub fn current_supply(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::TotalCoins)
    }

    /// Historical and predicted coin supply, in billions of siacoins.
    pub fn supply_schedule(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::CoinSupply)
    }

    /// Historical and predicted inflation metrics.
    pub fn inflation_schedule(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Inflation)
    }

    /// Cumulative siacoins burned by failed contracts.
    pub fn burn_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Burn)
    }

    /// Historical block rewards, in siacoins.
    pub fn block_reward_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::BlockReward)
    }

    // ==========================================================================
    // Transaction Data
    // ==========================================================================

    /// Cumulative and daily transaction counts.
    ///
    /// `[{"time":1433548800000,"totaltx":"20","daytx":18},...]`
    pub fn txn_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Transactions)
    }

    /// Fees per transaction, average fees per block and cumulative fees.
    pub fn txn_fee_history(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::TxFees)
    }

    // ==========================================================================
    // Siafunds Data
    // ==========================================================================

    /// Siafund profitability: daily, 7-day, 30-day and historic averages,
    /// in siacoins.
    pub fn siafunds_metrics(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Siafunds)
    }

    // ==========================================================================
    // Navigator Explorer
    // ==========================================================================

    /// Landing-page stats: the last transactions of each kind and the
    /// distribution of recent network transactions.
    pub fn landing_stats(&self) -> Result<ApiResponse, Error> {
        self.fetch(Endpoint::Landing)
    }

    /// Explorer lookup of an address, block, transaction or contract hash.
    pub fn hash_lookup(&self, hash: &str) -> Result<ApiResponse, Error> {
        self.fetch_suffix(&hash_suffix(hash))
    }
}

impl Default for SiaStats {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_suffix(hash: &str) -> String {
    format!(":3500/navigator-api/hash/{hash}")
}

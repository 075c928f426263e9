//! Static table of the known SiaStats endpoints.
//!
//! Each endpoint is a fixed (identifier, URL suffix) pair; the table never
//! changes during the process lifetime. Two URL families exist: the
//! pre-aggregated `/dbs/*.json` dumps served from the main host, and the
//! navigator API routes, whose suffix carries its own `:3500` port and is
//! appended directly to the host root.

use std::fmt;
use std::str::FromStr;

/// A known SiaStats data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Current consensus status (block heights, mempool, peers).
    Status,
    /// Skynet file count and size evolution, per portal.
    Skynet,
    /// Consensus database and raw blockchain size evolution.
    BlockchainSize,
    /// Active contract count, size and cost history.
    ActiveContracts,
    /// Cumulative contract history.
    HistoricContracts,
    /// Newly formed contracts (daily and 7-day averages).
    NewContracts,
    /// Active host count history.
    ActiveHosts,
    /// Average upload and download price history.
    BandwidthPrices,
    /// Available and utilized storage history.
    Storage,
    /// Average storage price, contract fees and siafund fees.
    StoragePrices,
    /// Percentage of network storage used vs. free.
    Usage,
    /// Current coin supply (single scalar).
    TotalCoins,
    /// Historical and predicted coin supply.
    CoinSupply,
    /// Historical and predicted inflation metrics.
    Inflation,
    /// Cumulative coins burned by failed contracts.
    Burn,
    /// Historical block rewards.
    BlockReward,
    /// Cumulative and daily transaction counts.
    Transactions,
    /// Fees per transaction, per block, and cumulative.
    TxFees,
    /// Siafund profitability metrics.
    Siafunds,
    /// Landing-page stats: recent transactions per kind and distribution.
    Landing,
}

impl Endpoint {
    /// Every known endpoint, in listing order.
    pub const ALL: [Endpoint; 20] = [
        Endpoint::Status,
        Endpoint::Skynet,
        Endpoint::BlockchainSize,
        Endpoint::ActiveContracts,
        Endpoint::HistoricContracts,
        Endpoint::NewContracts,
        Endpoint::ActiveHosts,
        Endpoint::BandwidthPrices,
        Endpoint::Storage,
        Endpoint::StoragePrices,
        Endpoint::Usage,
        Endpoint::TotalCoins,
        Endpoint::CoinSupply,
        Endpoint::Inflation,
        Endpoint::Burn,
        Endpoint::BlockReward,
        Endpoint::Transactions,
        Endpoint::TxFees,
        Endpoint::Siafunds,
        Endpoint::Landing,
    ];

    /// The documented URL suffix, appended verbatim to the client root.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Endpoint::Status => ":3500/navigator-api/status",
            Endpoint::Skynet => "/dbs/skynet_evo.json",
            Endpoint::BlockchainSize => "/dbs/blockchainsize.json",
            Endpoint::ActiveContracts => "/dbs/activecontracts.json",
            Endpoint::HistoricContracts => "/dbs/historiccontracts.json",
            Endpoint::NewContracts => "/dbs/newcontractsdb.json",
            Endpoint::ActiveHosts => "/dbs/activehosts.json",
            Endpoint::BandwidthPrices => "/dbs/bandwidthpricesdb.json",
            Endpoint::Storage => "/dbs/storage.json",
            Endpoint::StoragePrices => "/dbs/storagepricesdb.json",
            // sic, the live path
            Endpoint::Usage => "/dbs/ussage.json",
            Endpoint::TotalCoins => ":3500/navigator-api/totalcoins",
            Endpoint::CoinSupply => "/dbs/coinsupplydb.json",
            Endpoint::Inflation => "/dbs/inflationdb.json",
            Endpoint::Burn => "/dbs/burn.json",
            Endpoint::BlockReward => "/dbs/blockrewarddb.json",
            Endpoint::Transactions => "/dbs/transactionsdb.json",
            Endpoint::TxFees => "/dbs/txfeesdb.json",
            Endpoint::Siafunds => "/dbs/sfdb.json",
            Endpoint::Landing => ":3500/navigator-api/landing",
        }
    }

    /// Stable kebab-case identifier, the form accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Endpoint::Status => "status",
            Endpoint::Skynet => "skynet",
            Endpoint::BlockchainSize => "blockchain-size",
            Endpoint::ActiveContracts => "active-contracts",
            Endpoint::HistoricContracts => "historic-contracts",
            Endpoint::NewContracts => "new-contracts",
            Endpoint::ActiveHosts => "active-hosts",
            Endpoint::BandwidthPrices => "bandwidth-prices",
            Endpoint::Storage => "storage",
            Endpoint::StoragePrices => "storage-prices",
            Endpoint::Usage => "usage",
            Endpoint::TotalCoins => "total-coins",
            Endpoint::CoinSupply => "coin-supply",
            Endpoint::Inflation => "inflation",
            Endpoint::Burn => "burn",
            Endpoint::BlockReward => "block-reward",
            Endpoint::Transactions => "transactions",
            Endpoint::TxFees => "tx-fees",
            Endpoint::Siafunds => "siafunds",
            Endpoint::Landing => "landing",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not in the endpoint table.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown endpoint `{0}`")]
pub struct UnknownEndpoint(pub String);

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_owned()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("invalid root URL: {0}")]
    InvalidRoot(String),
}

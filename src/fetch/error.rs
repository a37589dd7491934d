use std::num::ParseFloatError;

use thiserror::Error;

use super::TransportError;

/// Failure of a single ticker lookup, tagged with the ticker that caused it.
#[derive(Debug, Error)]
#[error("error fetching {ticker}: {cause}")]
pub struct FetchError {
    pub ticker: String,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new<T: Into<String>>(ticker: T, cause: FetchCause) -> Self {
        Self {
            ticker: ticker.into(),
            cause,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("failed to create request: {0}")]
    Request(#[from] url::ParseError),
    #[error("request error: {0}")]
    Transport(#[from] TransportError),
    #[error("API returned status code {status} for {pair}")]
    Status { status: u16, pair: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no data returned for {pair}")]
    NoData { pair: String },
    #[error("invalid price format for {pair}: {source}")]
    InvalidPrice {
        pair: String,
        source: ParseFloatError,
    },
    #[error("price task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

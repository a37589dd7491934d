use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info};
use tokio::sync::mpsc;
use url::Url;

use crate::config::Config;

use super::decode::parse_last_price;
use super::{
    FetchCause, FetchError, FetchResult, HttpRequest, HttpTransport, DEFAULT_API_URL,
    DEFAULT_QUOTE_SUFFIX, PAIR_QUERY_KEY,
};

/// Ticker to last traded USD price. Keys are the tickers as requested, without the suffix.
pub type PriceSet = HashMap<String, f64>;

/// Fetches spot prices concurrently, one task per ticker, through an injected transport.
#[derive(Clone)]
pub struct PriceFetcher {
    base_url: String,
    quote_suffix: String,
    transport: Arc<dyn HttpTransport>,
}

impl PriceFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            quote_suffix: DEFAULT_QUOTE_SUFFIX.to_string(),
            transport,
        }
    }

    pub fn from_config(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: config.api_url.clone(),
            quote_suffix: config.quote_suffix.clone(),
            transport,
        }
    }

    pub fn pair_for(&self, ticker: &str) -> String {
        format!("{}{}", ticker, self.quote_suffix)
    }

    /// Fetch every ticker and return the complete set, or the first failure observed.
    ///
    /// All lookups run to completion before the result is decided; a failure does not
    /// cancel its siblings. Prices gathered alongside a failure are discarded. Which
    /// error wins when several tickers fail depends on completion order.
    pub async fn fetch_prices(&self, tickers: &[String]) -> FetchResult<PriceSet> {
        if tickers.is_empty() {
            return Ok(PriceSet::new());
        }

        // Sized to the batch so no task ever waits on capacity.
        let (tx, mut rx) = mpsc::channel(tickers.len());

        let handles: Vec<_> = tickers
            .iter()
            .cloned()
            .map(|ticker| {
                let tx = tx.clone();
                let fetcher = self.clone();
                tokio::spawn(async move {
                    let outcome = fetcher.fetch_price(&ticker).await;
                    let _ = tx.send((ticker, outcome)).await;
                })
            })
            .collect();
        drop(tx);

        let mut first_error: Option<FetchError> = None;
        let mut task_failures = Vec::new();
        for (ticker, joined) in tickers.iter().zip(join_all(handles).await) {
            if let Err(err) = joined {
                task_failures.push(FetchError::new(ticker.clone(), FetchCause::Task(err)));
            }
        }

        let mut prices = PriceSet::with_capacity(tickers.len());
        while let Some((ticker, outcome)) = rx.recv().await {
            match outcome {
                Ok(price) => {
                    prices.insert(ticker, price);
                }
                Err(err) => {
                    debug!("{err}");
                    first_error.get_or_insert(err);
                }
            }
        }

        if let Some(err) = first_error.or_else(|| task_failures.into_iter().next()) {
            info!(
                "price batch of {} tickers failed; discarding {} fetched prices",
                tickers.len(),
                prices.len()
            );
            return Err(err);
        }

        info!("fetched {} prices", prices.len());
        Ok(prices)
    }

    /// Look up a single ticker.
    pub async fn fetch_price(&self, ticker: &str) -> FetchResult<f64> {
        self.fetch_pair(&self.pair_for(ticker))
            .await
            .map_err(|cause| FetchError::new(ticker, cause))
    }

    async fn fetch_pair(&self, pair: &str) -> Result<f64, FetchCause> {
        let url = Url::parse_with_params(&self.base_url, &[(PAIR_QUERY_KEY, pair)])?;
        debug!("GET {url}");

        let response = self.transport.send(HttpRequest::get(url)).await?;
        if !response.status.is_success() {
            return Err(FetchCause::Status {
                status: response.status.as_u16(),
                pair: pair.to_string(),
            });
        }

        parse_last_price(&response.body, pair)
    }
}

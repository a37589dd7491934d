use serde::{Deserialize, Deserializer};

use super::error::FetchCause;

/// One element of the spot tickers payload. Only the fields we read are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub currency_pair: String,
    /// Last traded price, string-encoded upstream. Absent or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the payload; a `null` body reads as an empty list.
pub fn decode_records(body: &str) -> Result<Vec<TickerRecord>, FetchCause> {
    let records: Option<Vec<TickerRecord>> = serde_json::from_str(body)?;
    Ok(records.unwrap_or_default())
}

/// Price of the first record in `body`, the only one the endpoint returns for a single pair.
pub fn parse_last_price(body: &str, pair: &str) -> Result<f64, FetchCause> {
    let records = decode_records(body)?;
    let Some(first) = records.first() else {
        return Err(FetchCause::NoData {
            pair: pair.to_string(),
        });
    };

    first
        .last
        .parse::<f64>()
        .map_err(|source| FetchCause::InvalidPrice {
            pair: pair.to_string(),
            source,
        })
}

pub mod decode;
pub mod error;
pub mod prices;
pub mod transport;

pub use error::{FetchCause, FetchError};
pub use prices::{PriceFetcher, PriceSet};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};

/// Gate.io spot ticker endpoint queried when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.gateio.ws/api/v4/spot/tickers";

/// Quote currency appended to every ticker to form the exchange pair.
pub const DEFAULT_QUOTE_SUFFIX: &str = "_USDT";

/// Query parameter carrying the pair identifier.
pub const PAIR_QUERY_KEY: &str = "currency_pair";

pub type FetchResult<T> = std::result::Result<T, FetchError>;

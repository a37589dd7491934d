use std::io::{self, Write};
use std::sync::Arc;

use log::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Context, Result};
use crate::fetch::{PriceFetcher, ReqwestTransport};
use crate::render::render_prices_table;

/// Entry point used by `main` once arguments are parsed.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    debug!("using {config:?}");

    match cli.command {
        Commands::Prices { tickers } => {
            let transport = ReqwestTransport::new(config.request_timeout)?;
            let fetcher = PriceFetcher::from_config(&config, Arc::new(transport));
            fetch_and_render(&fetcher, &tickers, &mut io::stdout()).await
        }
    }
}

/// Fetch `tickers` and print the table. Nothing is written when the fetch fails.
pub async fn fetch_and_render<W: Write>(
    fetcher: &PriceFetcher,
    tickers: &[String],
    out: &mut W,
) -> Result<()> {
    let prices = fetcher.fetch_prices(tickers).await?;
    render_prices_table(&prices, out).context("Failed to write price table")?;
    out.flush()?;
    Ok(())
}

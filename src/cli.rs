use clap::{Parser, Subcommand};

const ROOT_LONG_ABOUT: &str = "\
bctool is a CLI application for blockchain-related lookups.
It currently fetches spot prices for cryptocurrencies against USD.

Examples:
  bctool prices BTC ETH TRC";

const PRICES_LONG_ABOUT: &str = "\
Retrieve the current market prices for one or more cryptocurrencies
against USD from Gate.io's API.

Example:
  bctool prices TRC BTC ETH LINK UNI

+--------+------------+
| TICKER | PRICE USD  |
+--------+------------+
| BTC    | $84,483.00 |
| ETH    | $1,589.34  |
| LINK   | $12.57     |
| TRC    | $0.001580  |
| UNI    | $5.18      |
+--------+------------+";

#[derive(Debug, Parser)]
#[command(name = "bctool")]
#[command(about = "Blockchain information tool", long_about = ROOT_LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch cryptocurrency prices from Gate.io
    #[command(long_about = PRICES_LONG_ABOUT)]
    Prices {
        /// Ticker symbols to look up (e.g. BTC ETH)
        #[arg(value_name = "TICKERS", required = true, num_args = 1..)]
        tickers: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_tickers_in_order() {
        let cli = Cli::try_parse_from(["bctool", "prices", "TRC", "BTC", "ETH"]).unwrap();
        let Commands::Prices { tickers } = cli.command;
        assert_eq!(tickers, vec!["TRC", "BTC", "ETH"]);
    }

    #[test]
    fn prices_requires_a_ticker() {
        let err = Cli::try_parse_from(["bctool", "prices"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn root_help_only_mentions_prices() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("prices"), "unexpected help: {help}");
        assert!(!help.contains("inspect addresses"), "unexpected help: {help}");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["bctool"]).is_err());
    }
}

use std::io::{self, Write};

use num_format::Locale;
use prettytable::{format, row, Table};

use crate::fetch::PriceSet;

/// Prices below this are shown with six decimals so sub-cent assets stay readable.
pub const SMALL_PRICE_THRESHOLD: f64 = 0.01;

pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return format!("${}", Locale::en.nan());
    }
    if price.is_infinite() {
        let sign = if price < 0.0 { Locale::en.minus_sign() } else { "" };
        return format!("${sign}{}", Locale::en.infinity());
    }
    if price < SMALL_PRICE_THRESHOLD {
        return format!("${price:.6}");
    }

    let fixed = format!("{price:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("${}.{fraction}", group_thousands(whole))
}

/// Insert the `en` thousands separator into a plain run of digits.
fn group_thousands(digits: &str) -> String {
    let separator = Locale::en.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Write `prices` as a bordered two-column table, one row per ticker in ticker order.
pub fn render_prices_table<W: Write + ?Sized>(prices: &PriceSet, out: &mut W) -> io::Result<()> {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["TICKER", "PRICE USD"]);

    let mut rows: Vec<(&String, &f64)> = prices.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));
    for (ticker, price) in rows {
        table.add_row(row![ticker, format_price(*price)]);
    }

    table.print(out)?;
    Ok(())
}

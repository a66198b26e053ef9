//! Display formatting helpers.
//!
//! Pure functions used by callers that present amounts and dates. The
//! core itself never formats, it only stores.

use chrono::NaiveDate;

/// Formats an amount as a currency string with grouped thousands and two
/// decimals, e.g. `$1,234.50` or `-$50.00`.
#[must_use]
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0_f64 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a `YYYY-MM-DD` date as e.g. `Jan 15, 2024`.
///
/// Anything that does not parse as a calendar date is returned unchanged;
/// dates are stored as opaque strings and may predate the current format.
#[must_use]
pub fn calendar_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_or_else(
        |_err| date.to_owned(),
        |parsed| parsed.format("%b %-d, %Y").to_string(),
    )
}

/// Inserts a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut reversed = Vec::new();
    for (idx, ch) in digits.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    reversed.iter().rev().collect()
}

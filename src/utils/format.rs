//! Formatting utilities used for CLI and export outputs.

/// Currency symbol for the codes the settings screen offers; anything else
/// falls back to "<CODE> " as a prefix.
pub fn currency_symbol(code: &str) -> String {
    match code {
        "JPY" => "¥".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{other} "),
    }
}

/// Render an amount with its currency symbol, e.g. "¥1350" or "$12.50".
///
/// Whole amounts print without decimals; fractional ones keep two.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let sym = currency_symbol(currency);
    if (amount.fract()).abs() < f64::EPSILON {
        format!("{}{}", sym, amount as i64)
    } else {
        format!("{}{:.2}", sym, amount)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Short display form of a uuid (first 8 chars), used in list output.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

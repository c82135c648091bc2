//! Achievement metric parsing for the marketing page.
//!
//! Decides whether a headline figure can be shown as an animated counter
//! (a number with fixed prefix/suffix) or must be shown verbatim. Only three
//! shapes count up: percentages (`40%`), currency amounts with an optional
//! multiplier (`$2.5M`, `30.9M PKR`), and plain or grouped integers
//! (`15`, `1,200+`). Everything else is literal text.

use serde::Serialize;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹'];
const MULTIPLIERS: &[char] = &['K', 'k', 'M', 'm', 'B', 'b'];
const SIGNS: &[char] = &['+', '-', '~'];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricDisplay {
    Counter {
        prefix: String,
        value: f64,
        decimals: u8,
        suffix: String,
    },
    Literal {
        text: String,
    },
}

impl MetricDisplay {
    /// Final rendered text, as shown once a counter has finished animating.
    pub fn text(&self) -> String {
        match self {
            MetricDisplay::Counter {
                prefix,
                value,
                decimals,
                suffix,
            } => format!("{prefix}{}{suffix}", format_grouped(*value, *decimals)),
            MetricDisplay::Literal { text } => text.clone(),
        }
    }

    pub fn is_counter(&self) -> bool {
        matches!(self, MetricDisplay::Counter { .. })
    }
}

pub fn parse_metric(raw: &str) -> MetricDisplay {
    let text = raw.trim();
    parse_counter(text).unwrap_or_else(|| MetricDisplay::Literal {
        text: text.to_string(),
    })
}

fn parse_counter(text: &str) -> Option<MetricDisplay> {
    let digits_start = text.find(|c: char| c.is_ascii_digit())?;
    let (prefix, rest) = text.split_at(digits_start);
    if !is_valid_prefix(prefix) {
        return None;
    }

    let number_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(rest.len());
    let (number, suffix) = rest.split_at(number_len);
    let (value, decimals) = parse_number(number)?;

    let has_currency = prefix.contains(CURRENCY_SYMBOLS) || prefix.trim().len() == 3;
    if !is_valid_suffix(suffix, has_currency) {
        return None;
    }

    Some(MetricDisplay::Counter {
        prefix: prefix.to_string(),
        value,
        decimals,
        suffix: suffix.to_string(),
    })
}

/// Empty, an optional sign, a currency symbol, or a 3-letter currency code and space.
fn is_valid_prefix(prefix: &str) -> bool {
    let unsigned = prefix.strip_prefix(SIGNS).unwrap_or(prefix);
    if unsigned.is_empty() {
        return true;
    }
    let mut chars = unsigned.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return CURRENCY_SYMBOLS.contains(&c);
    }
    match unsigned.strip_suffix(' ') {
        Some(code) => is_currency_code(code),
        None => false,
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

fn is_valid_suffix(suffix: &str, has_currency: bool) -> bool {
    if suffix.is_empty() || suffix == "+" || suffix == "%" || suffix == "%+" || suffix == "x" {
        return true;
    }
    // Strip an optional multiplier, then an optional "+" or " CODE".
    let rest = match suffix.strip_prefix(MULTIPLIERS) {
        Some(rest) => rest,
        None => suffix,
    };
    if rest.len() != suffix.len() && (rest.is_empty() || rest == "+") {
        return true;
    }
    match rest.strip_prefix(' ') {
        Some(code) => is_currency_code(code) && !has_currency,
        None => false,
    }
}

/// Parses "1,200" or "30.9" into (value, decimal places). Commas must group by thousands.
fn parse_number(number: &str) -> Option<(f64, u8)> {
    let (integer, fraction) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };
    if integer.is_empty() {
        return None;
    }
    if integer.contains(',') {
        let mut groups = integer.split(',');
        let head = groups.next()?;
        if head.is_empty() || head.len() > 3 || groups.any(|g| g.len() != 3) {
            return None;
        }
    }
    let decimals = match fraction {
        Some(f) if f.is_empty() || !f.chars().all(|c| c.is_ascii_digit()) => return None,
        Some(f) => u8::try_from(f.len()).ok()?,
        None => 0,
    };
    let plain: String = number.chars().filter(|c| *c != ',').collect();
    let value = plain.parse::<f64>().ok()?;
    Some((value, decimals))
}

fn format_grouped(value: f64, decimals: u8) -> String {
    let formatted = format!("{value:.prec$}", prec = decimals as usize);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };
    let mut grouped = String::new();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match fraction {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(prefix: &str, value: f64, decimals: u8, suffix: &str) -> MetricDisplay {
        MetricDisplay::Counter {
            prefix: prefix.to_string(),
            value,
            decimals,
            suffix: suffix.to_string(),
        }
    }

    // ── percentages ─────────────────────────────────────────────────────────

    #[test]
    fn test_percentage() {
        assert_eq!(parse_metric("40%"), counter("", 40.0, 0, "%"));
        assert_eq!(parse_metric("12.5%"), counter("", 12.5, 1, "%"));
        assert_eq!(parse_metric("+30%"), counter("+", 30.0, 0, "%"));
    }

    // ── currency with multiplier ────────────────────────────────────────────

    #[test]
    fn test_currency_symbol_with_multiplier() {
        assert_eq!(parse_metric("$2.5M"), counter("$", 2.5, 1, "M"));
        assert_eq!(parse_metric("€300K+"), counter("€", 300.0, 0, "K+"));
    }

    #[test]
    fn test_currency_code_suffix_with_multiplier() {
        let parsed = parse_metric("30.9M PKR");
        assert_eq!(parsed, counter("", 30.9, 1, "M PKR"));
        assert_eq!(parsed.text(), "30.9M PKR");
    }

    #[test]
    fn test_currency_code_prefix() {
        assert_eq!(parse_metric("USD 1,500"), counter("USD ", 1500.0, 0, ""));
    }

    // ── plain integers ──────────────────────────────────────────────────────

    #[test]
    fn test_plain_and_grouped_integers() {
        assert_eq!(parse_metric("15"), counter("", 15.0, 0, ""));
        let grouped = parse_metric("1,200+");
        assert_eq!(grouped, counter("", 1200.0, 0, "+"));
        assert_eq!(grouped.text(), "1,200+");
    }

    #[test]
    fn test_multiplier_factor() {
        assert_eq!(parse_metric("3x"), counter("", 3.0, 0, "x"));
    }

    // ── literals ────────────────────────────────────────────────────────────

    #[test]
    fn test_non_numeric_values_are_literal() {
        for raw in ["24/7", "Top 10", "2x faster", "1,20", "v2.0.1", "N/A", "", "10 PKRS"] {
            assert!(!parse_metric(raw).is_counter(), "'{raw}' should be literal");
        }
    }

    #[test]
    fn test_literal_text_is_trimmed_input() {
        assert_eq!(parse_metric("  Award winner ").text(), "Award winner");
    }

    #[test]
    fn test_grouped_formatting_of_large_values() {
        assert_eq!(counter("$", 1234567.0, 0, "").text(), "$1,234,567");
        assert_eq!(counter("", 1234.56, 2, "%").text(), "1,234.56%");
    }
}

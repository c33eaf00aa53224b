// ============================================================
// CURRENCY PARSER
// ============================================================
// Numeric parsing that tolerates currency symbols, thousands
// separators, explicit signs and accounting-style parentheses

use once_cell::sync::Lazy;
use regex::Regex;

/// Currency symbols accepted in front of a number
pub const CURRENCY_SYMBOLS: [char; 10] = ['$', '€', '£', '¥', '₹', '₽', '₩', '฿', '₫', '₦'];

/// Regex character class body matching any of `CURRENCY_SYMBOLS`.
pub(crate) fn symbol_class() -> String {
    CURRENCY_SYMBOLS
        .iter()
        .map(|symbol| regex::escape(&symbol.to_string()))
        .collect()
}

// Optional symbol, comma-grouped digits, optional fraction.
// Group sizes are not enforced so lakh-style grouping ("1,23,456") passes.
static CURRENCY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[{}]?\s*[0-9]+(?:,[0-9]+)*(?:\.[0-9]*)?$",
        symbol_class()
    ))
    .unwrap()
});

static SYMBOLS_AND_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"[{},\s]", symbol_class())).unwrap());

/// Parse a plain or currency-formatted number.
///
/// Accepts `123`, `-123.45`, `$1,234.56`, `+ $45`, `- $60`, `(1,234.56)` and
/// `($123)`. Anything else, including text that merely contains digits such
/// as `v2.3 release`, yields `None`.
pub fn parse_currency(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (negative, body) = if let Some(inner) = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        (true, inner.trim())
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, trimmed)
    };

    if !CURRENCY_SHAPE.is_match(body) {
        return None;
    }

    let cleaned = SYMBOLS_AND_SEPARATORS.replace_all(body, "");
    let magnitude: f64 = cleaned.parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

pub fn is_numeric(value: &str) -> bool {
    parse_currency(value).is_some()
}

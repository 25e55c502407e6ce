//! Fixed-point money helpers.
//!
//! Amounts are carried end to end as signed integer minor units (cents),
//! the same representation the ledger server stores. Conversion to and
//! from the human `123.45` form happens only at the edges: rendering and
//! form input.

/// Formats minor units as a decimal string with two fraction digits.
///
/// `12345` becomes `"123.45"`, `-5` becomes `"-0.05"`.
pub fn format_minor(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Formats minor units with a currency symbol in front, keeping the
/// sign outside the symbol: `-12345` with `"$"` is `"-$123.45"`.
pub fn format_with_symbol(minor: i64, symbol: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
}

/// Parses user input like `"123.45"`, `"0.5"`, or `"7"` into minor units.
///
/// At most two fraction digits are accepted; a single fraction digit is
/// scaled (`"0.5"` is 50). Returns `None` for anything else, including
/// empty input, stray signs, and overflow.
pub fn parse_minor(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if digits.is_empty() {
        return None;
    }

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole_part: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_part: i64 = if frac.is_empty() {
        0
    } else {
        let raw: i64 = frac.parse().ok()?;
        if frac.len() == 1 {
            raw * 10
        } else {
            raw
        }
    };

    let minor = whole_part.checked_mul(100)?.checked_add(frac_part)?;
    Some(if negative { -minor } else { minor })
}

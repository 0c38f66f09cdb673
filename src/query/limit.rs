//! Result cap for transaction listings

/// Hard ceiling on transactions returned by one request.
pub const MAX_TRANSACTIONS: usize = 100;

/// Parse a `limit` query value. Leading whitespace and trailing garbage are
/// tolerated (`" 12"`, `"5abc"`, `"7.9"` all parse). Zero, negative and
/// digitless values yield `None`, as if no limit had been sent. Values too
/// large for `usize` saturate.
pub fn parse_limit(raw: &str) -> Option<usize> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 || negative {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0usize, |acc, d| acc.saturating_mul(10).saturating_add(usize::from(d - b'0')));
    (value > 0).then_some(value)
}

/// `min(requested or matches, MAX_TRANSACTIONS)`
pub fn effective_limit(requested: Option<usize>, matches: usize) -> usize {
    requested.unwrap_or(matches).min(MAX_TRANSACTIONS)
}

//! Address shape validation. `0x` followed by 40 hex digits, nothing else.
//!
//! Checksum (mixed-case) encoding is not verified.

use once_cell::sync::Lazy;
use regex::Regex;

static ETH_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static regex"));

/// True iff `value` is a syntactically valid Ethereum-style address.
pub fn is_valid_address(value: &str) -> bool {
    ETH_ADDRESS.is_match(value)
}

/// Compare two addresses the way transaction participants are matched.
pub fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

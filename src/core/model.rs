//! Wallet and transaction records as the store holds them.
//!
//! Only the fields the queries look at are typed. Everything else the store
//! carries (balances, hashes, timestamps) rides along in `extra` and is
//! serialized back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::core::address::same_address;

/// String form of a stored JSON value, following the conversions JavaScript
/// applies when a record is compared as a string: integers without a
/// fraction (`1.0` is `"1"`), exponents past 1e21 or below 1e-6, `null` and
/// booleans spelled out, arrays joined with `,`.
pub fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !(n.is_i64() || n.is_u64()) => Cow::Owned(number_string(f)),
            _ => Cow::Owned(n.to_string()),
        },
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|v| if v.is_null() { Cow::Borrowed("") } else { string_form(v) })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

fn number_string(f: f64) -> String {
    if f == 0.0 {
        return "0".into();
    }
    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        // Display is already shortest round-trip without exponent: 1.0 -> "1", 0.5 -> "0.5"
        return f.to_string();
    }
    let sci = format!("{:e}", f);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => sci,
    }
}

/// Participant key: empty for absent or falsy values (`null`, `false`, `0`, `""`).
fn participant_key(value: &Value) -> Cow<'_, str> {
    let falsy = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if falsy { Cow::Borrowed("") } else { string_form(value) }
}

/// Chain identifier exactly as stored: a number, a numeric string, or anything
/// else the store chose. Compared by its string form only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(Value);

impl ChainId {
    pub fn new(value: impl Into<Value>) -> Self { Self(value.into()) }

    pub fn is_null(&self) -> bool { self.0.is_null() }

    /// String form used for comparisons. `1`, `1.0` and `"1"` share the key `"1"`.
    pub fn key(&self) -> Cow<'_, str> { string_form(&self.0) }

    pub fn matches(&self, filter: &str) -> bool { self.key() == filter }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self { Self(Value::from(id)) }
}

impl From<&str> for ChainId {
    fn from(id: &str) -> Self { Self(Value::from(id)) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    #[serde(rename = "chainId", default, skip_serializing_if = "ChainId::is_null")]
    pub chain_id: ChainId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Wallet {
    pub fn new(address: impl Into<String>, chain_id: impl Into<ChainId>) -> Self {
        Self { address: address.into(), chain_id: chain_id.into(), extra: Map::new() }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn on_chain(&self, chain_id: &str) -> bool { self.chain_id.matches(chain_id) }
}

/// `from`/`to` are kept as stored, whatever their JSON type; only their
/// string form takes part in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub from: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub to: Value,
    #[serde(rename = "chainId", default, skip_serializing_if = "ChainId::is_null")]
    pub chain_id: ChainId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    pub fn new(from: impl Into<String>, to: impl Into<String>, chain_id: impl Into<ChainId>) -> Self {
        Self { from: Value::String(from.into()), to: Value::String(to.into()), chain_id: chain_id.into(), extra: Map::new() }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Sender or recipient equals `address`, ignoring case. A missing or
    /// falsy side counts as the empty string.
    pub fn involves(&self, address: &str) -> bool {
        same_address(&participant_key(&self.from), address) || same_address(&participant_key(&self.to), address)
    }

    pub fn on_chain(&self, chain_id: &str) -> bool { self.chain_id.matches(chain_id) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chain_id_compares_by_string_form() {
        assert!(ChainId::from(1).matches("1"));
        assert!(ChainId::from("1").matches("1"));
        assert!(!ChainId::from(1).matches("01"));
        assert!(!ChainId::from(137).matches("1"));
        assert_eq!(ChainId::default().key(), "null");
        assert_eq!(ChainId::new(true).key(), "true");
    }

    #[test]
    fn wallet_keeps_store_fields() {
        let raw = json!({
            "address": "0xAbC0000000000000000000000000000000000001",
            "chainId": 1,
            "balance": "1.5",
            "symbol": "ETH"
        });
        let wallet: Wallet = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(wallet.address, "0xAbC0000000000000000000000000000000000001");
        assert!(wallet.on_chain("1"));
        assert_eq!(wallet.extra["balance"], "1.5");
        assert_eq!(serde_json::to_value(&wallet).unwrap(), raw);
    }

    #[test]
    fn transaction_without_counterparty_still_parses() {
        let tx: Transaction = serde_json::from_value(json!({
            "from": "0xabc0000000000000000000000000000000000001",
            "chainId": "137",
            "hash": "0xdead"
        }))
        .unwrap();
        assert!(tx.to.is_null());
        assert!(tx.on_chain("137"));
        assert!(tx.involves("0xABC0000000000000000000000000000000000001"));
        assert!(!tx.involves("0xabc0000000000000000000000000000000000002"));
        let out = serde_json::to_value(&tx).unwrap();
        assert!(out.get("to").is_none());
        assert_eq!(out["hash"], "0xdead");
    }

    #[test]
    fn missing_side_matches_nothing_real() {
        let tx = Transaction { from: Value::Null, to: Value::Null, chain_id: ChainId::from(1), extra: Map::new() };
        assert!(!tx.involves("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn float_chain_ids_use_integer_form() {
        let wallet: Wallet = serde_json::from_value(json!({"address": "0x1", "chainId": 1.0})).unwrap();
        assert!(wallet.on_chain("1"));
        assert!(!wallet.on_chain("1.0"));
        assert_eq!(ChainId::new(json!(137.0)).key(), "137");
        assert_eq!(ChainId::new(json!(-5.0)).key(), "-5");
    }

    #[test]
    fn string_form_follows_number_formatting() {
        assert_eq!(string_form(&json!(1.5)), "1.5");
        assert_eq!(string_form(&json!(0.1)), "0.1");
        assert_eq!(string_form(&json!(-0.0)), "0");
        assert_eq!(string_form(&json!(1e21)), "1e+21");
        assert_eq!(string_form(&json!(2.5e-7)), "2.5e-7");
        assert_eq!(string_form(&json!(123456789012u64)), "123456789012");
        assert_eq!(string_form(&json!([1, null, "a"])), "1,,a");
        assert_eq!(string_form(&json!({"k": 1})), "[object Object]");
    }

    #[test]
    fn non_string_participants_load_and_match_by_string_form() {
        let tx: Transaction = serde_json::from_value(json!({
            "from": 123,
            "to": "0xABC0000000000000000000000000000000000001",
            "chainId": 1
        }))
        .unwrap();
        assert_eq!(tx.from, 123);
        assert!(tx.involves("123"));
        assert!(tx.involves("0xabc0000000000000000000000000000000000001"));
        assert_eq!(serde_json::to_value(&tx).unwrap()["from"], 123);

        let falsy = Transaction { from: json!(0), to: json!(false), chain_id: ChainId::from(1), extra: Map::new() };
        assert!(!falsy.involves("0"));
        assert!(!falsy.involves("false"));
    }
}

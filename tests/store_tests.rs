//! Dataset loading: file → MemoryStore → queries

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use wallet_api::{MemoryStore, ServerConfig, StoreError, WalletQueries, WalletStore};

fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn loads_bundled_sample_dataset() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/wallets.json");
    let store = MemoryStore::load(&path).expect("sample dataset");
    assert_eq!(store.wallet_count(), 4);
    assert_eq!(store.transaction_count(), 4);

    let queries = WalletQueries::from_store(store);
    let txs = queries
        .list_transactions_by_wallet("0x742d35cc6634c0532925a3b844bc454e4438f44e", Some("1"), None)
        .expect("transactions");
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].extra["hash"], "0x01a1");
}

#[test]
fn loaded_records_keep_order_and_extra_fields() {
    let file = dataset_file(
        r#"{
            "wallets": [
                {"address": "0x00000000000000000000000000000000000000b2", "chainId": "10", "label": "second"},
                {"address": "0x00000000000000000000000000000000000000a1", "chainId": 1, "label": "first"}
            ],
            "transactions": []
        }"#,
    );
    let store = MemoryStore::load(file.path()).expect("load");
    let wallets = store.wallets().expect("wallets");
    assert_eq!(wallets[0].extra["label"], "second");
    assert_eq!(wallets[1].extra["label"], "first");
    assert!(wallets[0].on_chain("10"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = MemoryStore::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = dataset_file(r#"{"wallets": [{"chainId": 1}]}"#);
    let err = MemoryStore::load(file.path()).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
}

#[test]
fn config_opens_configured_dataset() {
    let file = dataset_file(r#"{"transactions": [{"from": "0x1", "to": "0x2", "chainId": 1}]}"#);
    let store = ServerConfig::default().with_data(file.path()).open_store().expect("store");
    assert_eq!(store.wallet_count(), 0);
    assert_eq!(store.transaction_count(), 1);
}

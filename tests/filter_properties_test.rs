//! Integration tests for client-side filtering
//!
//! Covers the filter laws the list pages rely on:
//! 1. No query and no exact filters returns the input unchanged
//! 2. Filtering is idempotent
//! 3. Records missing a filtered field are dropped, not an error
//! 4. Free-text and exact filters combine with AND

use std::collections::BTreeMap;

use rackdesk::api::{User, Wallet};
use rackdesk::logic::filter::{filter_records, FilterState};
use rackdesk::logic::pages::PageKind;
use serde_json::{json, Value};

fn people() -> Vec<Value> {
    vec![
        json!({"name": "Ravi", "status": "Active"}),
        json!({"name": "Sunil", "status": "Inactive"}),
    ]
}

fn exact(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_empty_filter_is_identity() {
    let records = people();
    let out = filter_records(&records, "", &["name"], &BTreeMap::new());
    assert_eq!(out, records);
}

#[test]
fn test_whitespace_query_is_identity() {
    let records = people();
    let out = filter_records(&records, "   ", &["name"], &BTreeMap::new());
    assert_eq!(out, records);
}

#[test]
fn test_filter_is_idempotent() {
    let records = vec![
        json!({"name": "Ravi", "status": "Active"}),
        json!({"name": "Ravindra", "status": "Inactive"}),
        json!({"name": "Sunil", "status": "Active"}),
        json!({"name": "Priya"}),
    ];
    let filters = exact(&[("status", "Active")]);

    let once = filter_records(&records, "rav", &["name"], &filters);
    let twice = filter_records(&once, "rav", &["name"], &filters);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[test]
fn test_missing_field_is_excluded() {
    let records = vec![
        json!({"name": "Ravi", "status": "Active"}),
        json!({"name": "Priya"}),
    ];
    let out = filter_records(&records, "", &["name"], &exact(&[("status", "Active")]));
    assert_eq!(out, vec![json!({"name": "Ravi", "status": "Active"})]);
}

#[test]
fn test_missing_search_field_does_not_match() {
    let records = vec![json!({"status": "Active"})];
    let out = filter_records(&records, "act", &["name"], &BTreeMap::new());
    assert!(out.is_empty());
}

#[test]
fn test_query_with_blank_exact_filter() {
    let out = filter_records(&people(), "rav", &["name"], &exact(&[("status", "")]));
    assert_eq!(out, vec![json!({"name": "Ravi", "status": "Active"})]);
}

#[test]
fn test_exact_filter_without_query() {
    let out = filter_records(&people(), "", &["name"], &exact(&[("status", "Inactive")]));
    assert_eq!(out, vec![json!({"name": "Sunil", "status": "Inactive"})]);
}

#[test]
fn test_all_means_unconstrained() {
    let out = filter_records(&people(), "", &["name"], &exact(&[("status", "All")]));
    assert_eq!(out.len(), 2);
}

#[test]
fn test_query_is_case_insensitive_substring() {
    let out = filter_records(&people(), "UNI", &["name"], &BTreeMap::new());
    assert_eq!(out, vec![json!({"name": "Sunil", "status": "Inactive"})]);
}

#[test]
fn test_exact_filter_is_case_sensitive() {
    let out = filter_records(&people(), "", &["name"], &exact(&[("status", "active")]));
    assert!(out.is_empty());
}

#[test]
fn test_typed_users_filter_on_nested_kyc() {
    let users: Vec<User> = serde_json::from_value(json!([
        {"_id": "u1", "name": "Ravi", "status": "Active", "kyc": {"status": "Verified"}},
        {"_id": "u2", "name": "Sunil", "status": "Active"},
        {"_id": "u3", "name": "Meena", "status": "Active", "kyc": {"status": "Pending"}}
    ]))
    .unwrap();

    let mut state = FilterState::new();
    state.set_exact("kyc.status", "Verified");
    let out = state.apply(&users, PageKind::Users.search_fields());

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].record_id(), Some("u1"));
}

#[test]
fn test_search_matches_numeric_phone() {
    let users: Vec<User> = serde_json::from_value(json!([
        {"name": "Ravi", "phone": 9876543210u64},
        {"name": "Sunil", "phone": "9123456780"}
    ]))
    .unwrap();

    let state = FilterState {
        query: "98765".to_string(),
        ..FilterState::default()
    };
    let out = state.apply(&users, PageKind::Users.search_fields());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name.as_deref(), Some("Ravi"));
}

#[test]
fn test_missing_wallet_defaults_to_zero() {
    let user = User {
        name: Some("Ravi".to_string()),
        ..User::default()
    };
    assert_eq!(user.wallet_balance(), 0.0);
    assert_eq!(user.kyc_status(), "N/A");

    let funded = User {
        wallet: Some(Wallet { balance: Some(150.5) }),
        ..User::default()
    };
    assert_eq!(funded.wallet_balance(), 150.5);
}

//! Bearer token resolution as seen on outgoing requests

use std::sync::Arc;

use rackdesk::api::{AdminClient, RequestOptions, DEFAULT_API_PREFIX};
use rackdesk::logic::route::{guard, Route, RouteDecision};
use rackdesk::session::{CredentialResolver, CredentialStore, MemoryStore};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;

fn client(store: MemoryStore) -> AdminClient {
    AdminClient::new(
        "https://repairs.example.com",
        DEFAULT_API_PREFIX,
        Arc::new(store),
        CredentialResolver::default(),
    )
}

fn authorization(client: &AdminClient) -> Option<String> {
    let request = client
        .build_request(Method::GET, "admin/racks/all", &RequestOptions::default())
        .unwrap();
    request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap().to_string())
}

#[test]
fn test_access_token_only() {
    let client = client(MemoryStore::with_items([("accessToken", "abc")]));
    assert_eq!(authorization(&client).as_deref(), Some("Bearer abc"));
}

#[test]
fn test_token_wins_over_admin_token() {
    let client = client(MemoryStore::with_items([("token", "x"), ("adminToken", "y")]));
    assert_eq!(authorization(&client).as_deref(), Some("Bearer x"));
}

#[test]
fn test_admin_token_wins_over_access_token() {
    let client = client(MemoryStore::with_items([("adminToken", "y"), ("accessToken", "z")]));
    assert_eq!(authorization(&client).as_deref(), Some("Bearer y"));
}

#[test]
fn test_no_credential_sends_no_header() {
    let client = client(MemoryStore::new());
    assert_eq!(authorization(&client), None);
}

#[test]
fn test_empty_token_falls_through() {
    let client = client(MemoryStore::with_items([("token", ""), ("accessToken", "abc")]));
    assert_eq!(authorization(&client).as_deref(), Some("Bearer abc"));
}

#[test]
fn test_whitespace_token_is_still_a_token() {
    let store = Arc::new(MemoryStore::with_items([("token", "  "), ("adminToken", "y")]));
    let client = AdminClient::new(
        "https://repairs.example.com",
        DEFAULT_API_PREFIX,
        store.clone(),
        CredentialResolver::default(),
    );

    // The guard and the request header read the same key
    assert_eq!(
        guard(Route::Dashboard, &*store),
        RouteDecision::Render(Route::Dashboard)
    );
    assert_eq!(client.bearer_token().as_deref(), Some("  "));
}

#[test]
fn test_token_is_read_per_request() {
    let store = Arc::new(MemoryStore::new());
    let client = AdminClient::new(
        "https://repairs.example.com",
        DEFAULT_API_PREFIX,
        store.clone(),
        CredentialResolver::default(),
    );
    assert_eq!(authorization(&client), None);

    store.set_item("token", "fresh").unwrap();
    assert_eq!(authorization(&client).as_deref(), Some("Bearer fresh"));

    store.remove_item("token").unwrap();
    assert_eq!(authorization(&client), None);
}

#[test]
fn test_custom_key_order() {
    let store = MemoryStore::with_items([("token", "x"), ("accessToken", "z")]);
    let client = AdminClient::new(
        "https://repairs.example.com",
        DEFAULT_API_PREFIX,
        Arc::new(store),
        CredentialResolver::new(["accessToken", "token"]),
    );
    assert_eq!(authorization(&client).as_deref(), Some("Bearer z"));
}

#[test]
fn test_building_does_not_touch_storage() {
    let store = Arc::new(MemoryStore::with_items([("adminToken", "y")]));
    let client = AdminClient::new(
        "https://repairs.example.com",
        DEFAULT_API_PREFIX,
        store.clone(),
        CredentialResolver::default(),
    );
    let _ = authorization(&client);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_item("adminToken").as_deref(), Some("y"));
}

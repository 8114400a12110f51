//! Route guard and session persistence

use rackdesk::api::AdminUser;
use rackdesk::logic::route::{guard, Route, RouteDecision};
use rackdesk::session::{
    clear_session, load_admin_user, store_login, CredentialResolver, CredentialStore, MemoryStore,
    SessionDb,
};

#[test]
fn test_missing_token_redirects_to_admin_login() {
    let store = MemoryStore::new();
    for route in Route::NAVIGATION {
        let decision = guard(route, &store);
        assert_eq!(decision, RouteDecision::Redirect(Route::AdminLogin));
        assert_eq!(decision.target().path(), "/admin");
    }
}

#[test]
fn test_fallback_keys_do_not_unlock_routes() {
    let store = MemoryStore::with_items([("adminToken", "y"), ("accessToken", "z")]);
    assert_eq!(
        guard(Route::Dashboard, &store),
        RouteDecision::Redirect(Route::AdminLogin)
    );
}

#[test]
fn test_empty_token_redirects() {
    let store = MemoryStore::with_items([("token", "")]);
    assert_eq!(
        guard(Route::Users, &store),
        RouteDecision::Redirect(Route::AdminLogin)
    );
}

#[test]
fn test_login_then_logout() {
    let store = MemoryStore::new();
    let admin = AdminUser {
        name: Some("Asha".to_string()),
        email: Some("asha@example.com".to_string()),
        ..AdminUser::default()
    };

    store_login(&store, "t-1", Some(&admin)).unwrap();
    assert_eq!(guard(Route::RackAbc, &store), RouteDecision::Render(Route::RackAbc));
    assert_eq!(load_admin_user(&store), Some(admin));

    clear_session(&store, &CredentialResolver::default()).unwrap();
    assert!(store.is_empty());
    assert_eq!(
        guard(Route::RackAbc, &store),
        RouteDecision::Redirect(Route::AdminLogin)
    );
}

#[test]
fn test_session_db_survives_reopen() {
    let path = std::env::temp_dir().join(format!("rackdesk-guard-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let db = SessionDb::open(&path).unwrap();
        store_login(&db, "persisted", None).unwrap();
    }

    let db = SessionDb::open(&path).unwrap();
    assert_eq!(db.get_item("token").as_deref(), Some("persisted"));
    assert_eq!(
        guard(Route::SupportTickets, &db),
        RouteDecision::Render(Route::SupportTickets)
    );

    clear_session(&db, &CredentialResolver::default()).unwrap();
    assert_eq!(db.get_item("token"), None);

    drop(db);
    let _ = std::fs::remove_file(&path);
}

//! Persisted client-side state
//!
//! The admin console keeps a handful of string keys between runs, the same
//! way a browser keeps them in local storage: the bearer token (under one of
//! several keys) and the JSON-serialised admin profile.
//!
//! - `CredentialStore`: the key/value surface everything else talks to
//! - `SessionDb`: SQLite-backed store under the platform data dir
//! - `MemoryStore`: in-process store for tests and ephemeral sessions
//! - `CredentialResolver`: ordered lookup of the bearer token

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::api::AdminUser;

pub const TOKEN_KEY: &str = "token";
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const ADMIN_USER_KEY: &str = "adminUser";

/// Lookup order used when no explicit list is configured
pub const DEFAULT_CREDENTIAL_KEYS: [&str; 3] = [TOKEN_KEY, ADMIN_TOKEN_KEY, ACCESS_TOKEN_KEY];

/// Key/value persistence for session state
///
/// Implementations must be shareable with the background request worker,
/// hence `Send + Sync`. Read failures are reported as a missing key.
pub trait CredentialStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// SQLite-backed session store
pub struct SessionDb {
    conn: Mutex<Connection>,
}

impl SessionDb {
    /// Open the store at the default location
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create session dir {}", data_dir.display()))?;
        Self::open(&data_dir.join("session.db"))
    }

    /// Open (or create) the store at an explicit path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open session store {}", path.display()))?;
        let db = SessionDb {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("rackdesk")
        } else {
            crate::utils::get_data_fallback_path()
        }
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;
        Ok(())
    }
}

impl CredentialStore for SessionDb {
    fn get_item(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().ok()?;
        let result = conn.query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Some(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "session store read failed");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        conn.execute(
            "INSERT OR REPLACE INTO storage (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        conn.execute("DELETE FROM storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-memory store, forgotten on exit
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with the given pairs
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: Mutex::new(map),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CredentialStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?
            .remove(key);
        Ok(())
    }
}

/// Resolves the bearer token by checking storage keys in a fixed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialResolver {
    keys: Vec<String>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_KEYS)
    }
}

impl CredentialResolver {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// First non-empty value found under the configured keys
    ///
    /// Whitespace counts as a value, the same as for the route guard.
    ///
    /// # Examples
    /// ```
    /// use rackdesk::session::{CredentialResolver, MemoryStore};
    ///
    /// let store = MemoryStore::with_items([("adminToken", "y"), ("accessToken", "z")]);
    /// let resolver = CredentialResolver::default();
    /// assert_eq!(resolver.resolve(&store).as_deref(), Some("y"));
    /// ```
    pub fn resolve(&self, store: &dyn CredentialStore) -> Option<String> {
        self.keys
            .iter()
            .filter_map(|key| store.get_item(key))
            .find(|value| !value.is_empty())
    }
}

/// Whether the route guard should consider the session signed in
///
/// Only the primary `token` key counts; the fallback keys are used for
/// requests but never unlock protected routes.
pub fn has_session_token(store: &dyn CredentialStore) -> bool {
    store
        .get_item(TOKEN_KEY)
        .map(|token| !token.is_empty())
        .unwrap_or(false)
}

/// Persist a successful login
pub fn store_login(store: &dyn CredentialStore, token: &str, admin: Option<&AdminUser>) -> Result<()> {
    store.set_item(TOKEN_KEY, token)?;
    if let Some(admin) = admin {
        let json = serde_json::to_string(admin).context("Failed to serialise admin profile")?;
        store.set_item(ADMIN_USER_KEY, &json)?;
    }
    Ok(())
}

/// Remove every credential key and the cached admin profile
///
/// Clears the default keys plus any extra keys the resolver reads, so no
/// configured key can keep authenticating after sign-out.
pub fn clear_session(store: &dyn CredentialStore, resolver: &CredentialResolver) -> Result<()> {
    let keys = DEFAULT_CREDENTIAL_KEYS
        .iter()
        .copied()
        .chain(resolver.keys().iter().map(String::as_str))
        .chain([ADMIN_USER_KEY]);
    for key in keys {
        store.remove_item(key)?;
    }
    Ok(())
}

/// Load the cached admin profile, ignoring unreadable JSON
pub fn load_admin_user(store: &dyn CredentialStore) -> Option<AdminUser> {
    let raw = store.get_item(ADMIN_USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(admin) => Some(admin),
        Err(e) => {
            tracing::warn!(error = %e, "stored adminUser is not valid JSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_uses_first_key_in_order() {
        let store = MemoryStore::with_items([("token", "x"), ("adminToken", "y")]);
        let resolver = CredentialResolver::default();
        assert_eq!(resolver.resolve(&store).as_deref(), Some("x"));
    }

    #[test]
    fn test_resolver_skips_empty_values() {
        let store = MemoryStore::with_items([("token", ""), ("accessToken", "abc")]);
        let resolver = CredentialResolver::default();
        assert_eq!(resolver.resolve(&store).as_deref(), Some("abc"));
    }

    #[test]
    fn test_resolver_and_guard_agree_on_whitespace_token() {
        let store = MemoryStore::with_items([("token", "  "), ("adminToken", "y")]);
        assert!(has_session_token(&store));
        assert_eq!(
            CredentialResolver::default().resolve(&store).as_deref(),
            Some("  ")
        );
    }

    #[test]
    fn test_resolver_with_custom_order() {
        let store = MemoryStore::with_items([("token", "x"), ("accessToken", "z")]);
        let resolver = CredentialResolver::new(["accessToken", "token"]);
        assert_eq!(resolver.resolve(&store).as_deref(), Some("z"));
    }

    #[test]
    fn test_resolver_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(CredentialResolver::default().resolve(&store), None);
    }

    #[test]
    fn test_has_session_token_ignores_fallback_keys() {
        let store = MemoryStore::with_items([("adminToken", "y")]);
        assert!(!has_session_token(&store));

        store.set_item("token", "x").unwrap();
        assert!(has_session_token(&store));
    }

    #[test]
    fn test_login_then_logout() {
        let store = MemoryStore::new();
        let admin = AdminUser {
            id: Some("a1".to_string()),
            name: Some("Ops Admin".to_string()),
            email: Some("ops@example.com".to_string()),
            role: Some("admin".to_string()),
        };

        store_login(&store, "tok", Some(&admin)).unwrap();
        store.set_item("accessToken", "stale").unwrap();
        assert_eq!(store.get_item("token").as_deref(), Some("tok"));
        assert_eq!(load_admin_user(&store), Some(admin));

        clear_session(&store, &CredentialResolver::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_logout_clears_configured_keys() {
        let store = MemoryStore::with_items([("token", "x"), ("legacyToken", "old")]);
        let resolver = CredentialResolver::new(["legacyToken", "token"]);

        clear_session(&store, &resolver).unwrap();
        assert_eq!(store.get_item("legacyToken"), None);
        assert_eq!(resolver.resolve(&store), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_admin_user_is_ignored() {
        let store = MemoryStore::with_items([("adminUser", "{not json")]);
        assert!(load_admin_user(&store).is_none());
    }

    #[test]
    fn test_session_db_roundtrip() {
        let mut path = std::env::temp_dir();
        path.push(format!("rackdesk-session-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let db = SessionDb::open(&path).unwrap();
            db.set_item("token", "persisted").unwrap();
        }

        let db = SessionDb::open(&path).unwrap();
        assert_eq!(db.get_item("token").as_deref(), Some("persisted"));
        db.remove_item("token").unwrap();
        assert_eq!(db.get_item("token"), None);

        let _ = std::fs::remove_file(&path);
    }
}

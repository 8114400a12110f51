//! Client-side Filter Logic
//!
//! Pure functions for narrowing a fetched list down to the rows an admin is
//! looking for: a free-text query matched against a page's searchable fields,
//! plus any number of exact-match field filters.

use serde_json::Value;
use std::collections::BTreeMap;

/// Value of an exact filter that places no constraint on the field
pub const ALL: &str = "All";

/// A record whose fields can be looked up by name for filtering
///
/// Field names are the API's camelCase keys; nested values use dotted paths
/// (`kyc.status`). A missing or null field is `None`.
pub trait Filterable {
    fn field(&self, name: &str) -> Option<String>;
}

impl Filterable for Value {
    fn field(&self, name: &str) -> Option<String> {
        let mut current = self;
        for part in name.split('.') {
            current = current.as_object()?.get(part)?;
        }

        match current {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            // Arrays and objects are not meaningful filter targets
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Whether an exact filter value constrains anything
///
/// # Examples
/// ```
/// use rackdesk::logic::filter::is_unconstrained;
///
/// assert!(is_unconstrained(""));
/// assert!(is_unconstrained("All"));
/// assert!(!is_unconstrained("Active"));
/// ```
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// Case-insensitive substring match of `query` against any of `fields`
///
/// An empty (or whitespace-only) query matches every record. Fields the
/// record does not have never match.
pub fn matches_query<T: Filterable + ?Sized>(record: &T, query: &str, fields: &[&str]) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    fields.iter().any(|name| {
        record
            .field(name)
            .map(|value| value.to_lowercase().contains(&query_lower))
            .unwrap_or(false)
    })
}

/// Whether every constraining exact filter equals the record's field
pub fn matches_exact<T: Filterable + ?Sized>(record: &T, exact: &BTreeMap<String, String>) -> bool {
    exact
        .iter()
        .filter(|(_, wanted)| !is_unconstrained(wanted))
        .all(|(name, wanted)| record.field(name).as_deref() == Some(wanted.as_str()))
}

/// Filter records by free-text query and exact field filters
///
/// Returns a new list in the original relative order; the input is left
/// untouched. Same inputs always produce the same output.
///
/// # Examples
/// ```
/// use rackdesk::logic::filter::filter_records;
/// use serde_json::json;
/// use std::collections::BTreeMap;
///
/// let rows = vec![
///     json!({"name": "Ravi", "status": "Active"}),
///     json!({"name": "Sunil", "status": "Inactive"}),
/// ];
/// let mut exact = BTreeMap::new();
/// exact.insert("status".to_string(), String::new());
///
/// let result = filter_records(&rows, "rav", &["name"], &exact);
/// assert_eq!(result, vec![json!({"name": "Ravi", "status": "Active"})]);
/// ```
pub fn filter_records<T: Filterable + Clone>(
    records: &[T],
    query: &str,
    search_fields: &[&str],
    exact: &BTreeMap<String, String>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query, search_fields) && matches_exact(*record, exact))
        .cloned()
        .collect()
}

/// Filter inputs held by a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query as typed
    pub query: String,
    /// Exact filters keyed by field name; empty or `All` means unset
    pub exact: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or unset, with `All`/empty) an exact filter
    pub fn set_exact(&mut self, field: &str, value: &str) {
        if is_unconstrained(value) {
            self.exact.remove(field);
        } else {
            self.exact.insert(field.to_string(), value.to_string());
        }
    }

    /// Current value of an exact filter, `All` when unset
    pub fn exact_value(&self, field: &str) -> &str {
        self.exact.get(field).map(String::as_str).unwrap_or(ALL)
    }

    /// Whether any filter narrows the list
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.exact.values().any(|v| !is_unconstrained(v))
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.exact.clear();
    }

    pub fn apply<T: Filterable + Clone>(&self, records: &[T], search_fields: &[&str]) -> Vec<T> {
        filter_records(records, &self.query, search_fields, &self.exact)
    }
}

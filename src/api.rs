use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Request, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::logic::filter::Filterable;
use crate::session::{CredentialResolver, CredentialStore};

pub const DEFAULT_API_PREFIX: &str = "/api/v1/";

/// Keys under which list endpoints have been seen to nest their rows
const COLLECTION_KEYS: &[&str] = &[
    "users",
    "orders",
    "repairOrders",
    "racks",
    "rackSlots",
    "tickets",
    "supportTickets",
    "items",
    "docs",
    "results",
];

/// Accept strings, numbers, booleans, or a populated reference object
///
/// Populated references (`{"_id": "...", "name": "Ravi"}`) collapse to their
/// display name.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| lenient_string(&v)))
}

fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => ["name", "title", "model", "label"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        Value::Null | Value::Array(_) => None,
    }
}

/// Accept a number or a numeric string
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Kyc {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Wallet {
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "deserialize_lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub kyc: Option<Kyc>,
    #[serde(default)]
    pub wallet: Option<Wallet>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub created_at: Option<String>,
}

impl User {
    pub fn record_id(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }

    /// KYC status, `N/A` when the user has no KYC record
    pub fn kyc_status(&self) -> &str {
        self.kyc
            .as_ref()
            .and_then(|k| k.status.as_deref())
            .unwrap_or(crate::logic::formatting::NOT_AVAILABLE)
    }

    /// Wallet balance, zero when the user has no wallet
    pub fn wallet_balance(&self) -> f64 {
        self.wallet.as_ref().and_then(|w| w.balance).unwrap_or(0.0)
    }
}

impl Filterable for User {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.record_id().map(str::to_string),
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "role" => self.role.clone(),
            "status" => self.status.clone(),
            "kyc.status" => self.kyc.as_ref().and_then(|k| k.status.clone()),
            "wallet.balance" => self.wallet.as_ref().and_then(|w| w.balance).map(|b| b.to_string()),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairOrder {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "deserialize_lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub device: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub engineer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub rack_slot: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub tat: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub issue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub created_at: Option<String>,
}

impl RepairOrder {
    pub fn record_id(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }
}

impl Filterable for RepairOrder {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.record_id().map(str::to_string),
            "orderId" => self.order_id.clone(),
            "device" => self.device.clone(),
            "customer" => self.customer.clone(),
            "status" => self.status.clone(),
            "engineer" => self.engineer.clone(),
            "rackSlot" => self.rack_slot.clone(),
            "tat" => self.tat.clone(),
            "issue" => self.issue.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackSlot {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "deserialize_lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub rack: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub slot: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub device_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub engineer: Option<String>,
}

impl RackSlot {
    pub fn record_id(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }

    /// "A-12" style location label
    pub fn location(&self) -> String {
        match (self.rack.as_deref(), self.slot.as_deref()) {
            (Some(rack), Some(slot)) => format!("{}-{}", rack, slot),
            (Some(rack), None) => rack.to_string(),
            (None, Some(slot)) => slot.to_string(),
            (None, None) => crate::logic::formatting::NOT_AVAILABLE.to_string(),
        }
    }
}

impl Filterable for RackSlot {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.record_id().map(str::to_string),
            "rack" => self.rack.clone(),
            "slot" => self.slot.clone(),
            "status" => self.status.clone(),
            "deviceId" => self.device_id.clone(),
            "customer" => self.customer.clone(),
            "engineer" => self.engineer.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, deserialize_with = "deserialize_lenient_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub ticket_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub created_at: Option<String>,
}

impl SupportTicket {
    pub fn record_id(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }
}

impl Filterable for SupportTicket {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.record_id().map(str::to_string),
            "ticketId" => self.ticket_id.clone(),
            "subject" => self.subject.clone(),
            "customer" => self.customer.clone(),
            "priority" => self.priority.clone(),
            "status" => self.status.clone(),
            "description" => self.description.clone(),
            "createdAt" => self.created_at.clone(),
            _ => None,
        }
    }
}

/// Signed-in admin profile, persisted as JSON under `adminUser`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AdminUser {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AdminUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("admin")
    }
}

/// Result of `POST admin/login`
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub token: String,
    pub admin: Option<AdminUser>,
}

/// One page of `GET admin/user/all`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: Option<u64>,
}

/// Body for `POST admin/user/create` and `PUT admin/user/update/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Body for `POST admin/racks/create`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RackSlotDraft {
    pub rack: String,
    pub slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Optional parts of a request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Applied last, so these replace any header the client set itself
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn json(body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Join an origin and a versioned prefix into a base URL ending in `/`
///
/// # Examples
/// ```
/// use rackdesk::api::resolve_base_url;
///
/// assert_eq!(resolve_base_url("https://api.example.com/", "/api/v1/"), "https://api.example.com/api/v1/");
/// assert_eq!(resolve_base_url("http://localhost:5000", "api/v1"), "http://localhost:5000/api/v1/");
/// ```
pub fn resolve_base_url(origin: &str, prefix: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}/", origin)
    } else {
        format!("{}/{}/", origin, prefix)
    }
}

/// Descend into the `data` envelope and find the row array
pub fn extract_list(payload: Value) -> Option<Vec<Value>> {
    let payload = match payload {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };

    match payload {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => COLLECTION_KEYS.iter().find_map(|key| match map.remove(*key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }),
        _ => None,
    }
}

/// Descend into the `data` envelope and an optional named entity wrapper
pub fn extract_entity(payload: Value, entity_keys: &[&str]) -> Value {
    let payload = match payload {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    };

    if let Value::Object(map) = &payload {
        for key in entity_keys {
            match map.get(*key) {
                Some(inner) if inner.is_object() => return inner.clone(),
                _ => {}
            }
        }
    }

    payload
}

fn first_pointer<'a>(payload: &'a Value, pointers: &[&str]) -> Option<&'a Value> {
    pointers
        .iter()
        .filter_map(|p| payload.pointer(p))
        .find(|v| !v.is_null())
}

fn parse_rows<T: DeserializeOwned>(payload: Value, what: &str) -> Result<Vec<T>> {
    let rows = extract_list(payload)
        .ok_or_else(|| anyhow::anyhow!("Unexpected {} payload: no list found", what))?;
    serde_json::from_value(Value::Array(rows)).with_context(|| format!("Failed to parse {}", what))
}

fn parse_entity<T: DeserializeOwned>(payload: Value, entity_keys: &[&str], what: &str) -> Result<T> {
    serde_json::from_value(extract_entity(payload, entity_keys))
        .with_context(|| format!("Failed to parse {}", what))
}

/// HTTP client for the admin REST API
///
/// Every request looks the bearer token up again, so a login or logout
/// takes effect on the next call. The client never writes to the store.
#[derive(Clone)]
pub struct AdminClient {
    base_url: String,
    client: Client,
    store: Arc<dyn CredentialStore>,
    resolver: CredentialResolver,
}

impl AdminClient {
    pub fn new(
        origin: &str,
        prefix: &str,
        store: Arc<dyn CredentialStore>,
        resolver: CredentialResolver,
    ) -> Self {
        Self {
            base_url: resolve_base_url(origin, prefix),
            client: Client::new(),
            store,
            resolver,
        }
    }

    /// Replace the underlying HTTP client with one that enforces a timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Token that would be attached to the next request
    pub fn bearer_token(&self) -> Option<String> {
        self.resolver.resolve(self.store.as_ref())
    }

    /// Build a request with the bearer token attached
    pub fn build_request(&self, method: Method, path: &str, options: &RequestOptions) -> Result<Request> {
        let url = self.url_for(path);
        let mut builder = self.client.request(method.clone(), &url);

        match self.bearer_token() {
            Some(token) => builder = builder.bearer_auth(token),
            None => tracing::warn!(
                %method,
                path,
                keys = ?self.resolver.keys(),
                "no stored credential; sending without Authorization header"
            ),
        }

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }
        if !options.headers.is_empty() {
            builder = builder.headers(options.headers.clone());
        }

        Ok(builder.build()?)
    }

    /// Send a request; non-2xx statuses come back as the original `reqwest::Error`
    pub async fn send(&self, method: Method, path: &str, options: RequestOptions) -> Result<Response> {
        let request = self.build_request(method.clone(), path, &options)?;
        tracing::debug!(%method, url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, path, "request rejected with 401 Unauthorized");
        }

        Ok(response.error_for_status()?)
    }

    async fn send_json(&self, method: Method, path: &str, options: RequestOptions) -> Result<Value> {
        let response = self.send(method, path, options).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).with_context(|| format!("Response from {} is not JSON", path))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession> {
        let body = serde_json::json!({ "email": email, "password": password });
        let payload = self
            .send_json(Method::POST, "admin/login", RequestOptions::json(body))
            .await?;

        let token = first_pointer(&payload, &["/token", "/accessToken", "/data/token", "/data/accessToken"])
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Login response did not contain a token"))?
            .to_string();

        let admin = first_pointer(&payload, &["/admin", "/user", "/data/admin", "/data/user"])
            .and_then(|v| serde_json::from_value::<AdminUser>(v.clone()).ok());

        Ok(LoginSession { token, admin })
    }

    pub async fn list_rack_slots(&self) -> Result<Vec<RackSlot>> {
        let payload = self
            .send_json(Method::GET, "admin/racks/all", RequestOptions::default())
            .await?;
        parse_rows(payload, "racks")
    }

    pub async fn create_rack_slot(&self, draft: &RackSlotDraft) -> Result<()> {
        let body = serde_json::to_value(draft)?;
        self.send(Method::POST, "admin/racks/create", RequestOptions::json(body))
            .await?;
        Ok(())
    }

    pub async fn delete_rack_slot(&self, id: &str) -> Result<()> {
        let path = format!("admin/racks/delete/{}", urlencoding::encode(id));
        self.send(Method::DELETE, &path, RequestOptions::default()).await?;
        Ok(())
    }

    pub async fn list_repair_orders(&self) -> Result<Vec<RepairOrder>> {
        let payload = self
            .send_json(Method::GET, "admin/repair-orders/all", RequestOptions::default())
            .await?;
        parse_rows(payload, "repair orders")
    }

    pub async fn get_repair_order(&self, id: &str) -> Result<RepairOrder> {
        let path = format!("admin/repair-orders/{}", urlencoding::encode(id));
        let payload = self.send_json(Method::GET, &path, RequestOptions::default()).await?;
        parse_entity(payload, &["order", "repairOrder"], "repair order")
    }

    /// Partial update, e.g. `{"status": "Completed"}`
    pub async fn update_repair_order(&self, id: &str, changes: Value) -> Result<()> {
        let path = format!("admin/repair-orders/update/{}", urlencoding::encode(id));
        self.send(Method::PUT, &path, RequestOptions::json(changes)).await?;
        Ok(())
    }

    pub async fn list_support_tickets(&self) -> Result<Vec<SupportTicket>> {
        let payload = self
            .send_json(Method::GET, "admin/support-tickets/all", RequestOptions::default())
            .await?;
        parse_rows(payload, "support tickets")
    }

    pub async fn get_support_ticket(&self, id: &str) -> Result<SupportTicket> {
        let path = format!("admin/support-tickets/findById/{}", urlencoding::encode(id));
        let payload = self.send_json(Method::GET, &path, RequestOptions::default()).await?;
        parse_entity(payload, &["ticket", "supportTicket"], "support ticket")
    }

    pub async fn update_support_ticket(&self, id: &str, changes: Value) -> Result<()> {
        let path = format!("admin/support-tickets/update/{}", urlencoding::encode(id));
        self.send(Method::PUT, &path, RequestOptions::json(changes)).await?;
        Ok(())
    }

    /// `role` of `None` (or `All`) lists every role
    pub async fn list_users(&self, page: u32, limit: u32, role: Option<&str>) -> Result<UserPage> {
        let mut options = RequestOptions::default()
            .query("page", page.to_string())
            .query("limit", limit.to_string());
        if let Some(role) = role.filter(|r| !crate::logic::filter::is_unconstrained(r)) {
            options = options.query("role", role);
        }

        let payload = self.send_json(Method::GET, "admin/user/all", options).await?;
        let total = first_pointer(
            &payload,
            &["/total", "/totalUsers", "/data/total", "/pagination/total", "/data/pagination/total"],
        )
        .and_then(Value::as_u64);
        let users = parse_rows(payload, "users")?;

        Ok(UserPage { users, total })
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        let path = format!("admin/user/findById/{}", urlencoding::encode(id));
        let payload = self.send_json(Method::GET, &path, RequestOptions::default()).await?;
        parse_entity(payload, &["user"], "user")
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<()> {
        let body = serde_json::to_value(draft)?;
        self.send(Method::POST, "admin/user/create", RequestOptions::json(body))
            .await?;
        Ok(())
    }

    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<()> {
        let path = format!("admin/user/update/{}", urlencoding::encode(id));
        let body = serde_json::to_value(draft)?;
        self.send(Method::PUT, &path, RequestOptions::json(body)).await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let path = format!("admin/user/delete/{}", urlencoding::encode(id));
        self.send(Method::DELETE, &path, RequestOptions::default()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use reqwest::header::{HeaderValue, AUTHORIZATION};
    use serde_json::json;

    fn client_with(store: MemoryStore) -> AdminClient {
        AdminClient::new(
            "https://repairs.example.com",
            DEFAULT_API_PREFIX,
            Arc::new(store),
            CredentialResolver::default(),
        )
    }

    #[test]
    fn test_url_for_joins_prefix_and_path() {
        let client = client_with(MemoryStore::new());
        assert_eq!(
            client.url_for("/admin/racks/all"),
            "https://repairs.example.com/api/v1/admin/racks/all"
        );
        assert_eq!(
            client.url_for("admin/user/findById/42"),
            "https://repairs.example.com/api/v1/admin/user/findById/42"
        );
    }

    #[test]
    fn test_build_request_attaches_query_and_body() {
        let client = client_with(MemoryStore::with_items([("token", "x")]));
        let options = RequestOptions::json(json!({"status": "Completed"}))
            .query("page", "2")
            .query("limit", "10");

        let request = client
            .build_request(Method::PUT, "admin/repair-orders/update/7", &options)
            .unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().query(), Some("page=2&limit=10"));
        assert!(request.body().is_some());
    }

    #[test]
    fn test_explicit_header_overrides_bearer() {
        let client = client_with(MemoryStore::with_items([("token", "x")]));
        let mut options = RequestOptions::default();
        options
            .headers
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer override"));

        let request = client
            .build_request(Method::GET, "admin/racks/all", &options)
            .unwrap();

        let values: Vec<_> = request.headers().get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values, vec![&HeaderValue::from_static("Bearer override")]);
    }

    #[test]
    fn test_extract_list_shapes() {
        assert_eq!(extract_list(json!([{"a": 1}])).map(|v| v.len()), Some(1));
        assert_eq!(extract_list(json!({"data": [{"a": 1}, {"a": 2}]})).map(|v| v.len()), Some(2));
        assert_eq!(
            extract_list(json!({"success": true, "data": {"users": [{"a": 1}], "total": 1}})).map(|v| v.len()),
            Some(1)
        );
        assert_eq!(extract_list(json!({"message": "ok"})), None);
    }

    #[test]
    fn test_extract_entity_unwraps_named_key() {
        let payload = json!({"success": true, "data": {"user": {"name": "Ravi"}}});
        assert_eq!(extract_entity(payload, &["user"]), json!({"name": "Ravi"}));

        let bare = json!({"data": {"name": "Sunil"}});
        assert_eq!(extract_entity(bare, &["user"]), json!({"name": "Sunil"}));
    }

    #[test]
    fn test_user_deserializes_loose_shapes() {
        let user: User = serde_json::from_value(json!({
            "_id": "64f0",
            "name": "Ravi",
            "phone": 9876543210u64,
            "kyc": {"status": "Verified"},
            "wallet": {"balance": "250.5"}
        }))
        .unwrap();

        assert_eq!(user.record_id(), Some("64f0"));
        assert_eq!(user.phone.as_deref(), Some("9876543210"));
        assert_eq!(user.kyc_status(), "Verified");
        assert_eq!(user.wallet_balance(), 250.5);
    }

    #[test]
    fn test_user_defaults_when_fields_missing() {
        let user: User = serde_json::from_value(json!({"name": "Sunil"})).unwrap();
        assert_eq!(user.kyc_status(), "N/A");
        assert_eq!(user.wallet_balance(), 0.0);
        assert_eq!(user.field("kyc.status"), None);
    }

    #[test]
    fn test_repair_order_populated_references() {
        let order: RepairOrder = serde_json::from_value(json!({
            "_id": "ro1",
            "orderId": "RO-1001",
            "customer": {"_id": "u1", "name": "Ravi"},
            "device": {"model": "Pixel 7"},
            "engineer": null,
            "tat": 48
        }))
        .unwrap();

        assert_eq!(order.customer.as_deref(), Some("Ravi"));
        assert_eq!(order.device.as_deref(), Some("Pixel 7"));
        assert_eq!(order.engineer, None);
        assert_eq!(order.tat.as_deref(), Some("48"));
    }

    #[test]
    fn test_rack_slot_location() {
        let slot = RackSlot {
            rack: Some("A".to_string()),
            slot: Some("12".to_string()),
            ..RackSlot::default()
        };
        assert_eq!(slot.location(), "A-12");
        assert_eq!(RackSlot::default().location(), "N/A");
    }

    #[test]
    fn test_admin_user_roundtrip_through_storage_format() {
        let admin: AdminUser = serde_json::from_value(json!({"_id": "a1", "name": "Ops"})).unwrap();
        let json = serde_json::to_string(&admin).unwrap();
        assert_eq!(json, r#"{"id":"a1","name":"Ops"}"#);
    }

    #[test]
    fn test_user_draft_sends_cleared_fields() {
        let draft = UserDraft {
            name: Some("Ravi".to_string()),
            phone: Some(String::new()),
            ..UserDraft::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"name": "Ravi", "phone": ""})
        );
    }
}

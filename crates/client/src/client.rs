//! The HerdLink API client.
//!
//! One generic [`ApiClient::call`] helper drives every operation in
//! [`crate::ops`]: build the URL, perform exactly one request, unwrap the
//! response envelope. The public methods are thin typed wrappers over it.

use crate::envelope::{self, Envelope};
use crate::error::{ApiError, Result};
use crate::models::{
    Alert, Cattle, CattleLiveData, CattleLocation, DashboardSummary, Geofence, GeofenceCreate,
    Staff,
};
use crate::ops::{self, Operation};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

/// Client for one HerdLink backend.
///
/// Holds only the base address and a `reqwest::Client`; it is cheap to clone
/// and safe to share across tasks. Calls carry no state between them — no
/// retries, no caching, no cancellation.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    /// Build a client sharing an existing `reqwest::Client` connection pool.
    #[must_use]
    pub fn with_http_client(base: Url, http: reqwest::Client) -> Self {
        Self { base, http }
    }

    /// Parse `base` and build a client from it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if `base` is not a valid URL.
    pub fn from_base_url(base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{base}': {e}")))?;
        Ok(Self::new(base))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ApiError::Config(format!("invalid request URL '{raw}': {e}")))
    }

    /// Perform one operation against the backend and unwrap its envelope.
    ///
    /// Success requires a 2xx status *and* `success == true` in the body; the
    /// returned value is the envelope's `data` field (`null` when absent).
    ///
    /// # Errors
    ///
    /// - `ApiError::OperationFailed` when the backend answers 2xx but the
    ///   envelope does not report success; the message is the envelope's
    ///   `error` text or the operation's envelope fallback.
    /// - `ApiError::TransportFailed` when the request itself fails or the
    ///   status is not 2xx; the message is, in order of preference, the
    ///   `detail` field of the error body, the transport's own message, or
    ///   the operation's transport fallback.
    ///
    /// A 404 on an operation with `not_found_as_empty` resolves to an empty
    /// array instead.
    async fn call(
        &self,
        op: &Operation,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let path = op.bind(params);
        let url = self.endpoint_url(&path)?;

        let mut request = self.http.request(op.method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let message = sanitize_reqwest_error(&e);
                warn!(op = op.name, error = %message, "transport failure");
                return Err(ApiError::TransportFailed(message));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND && op.not_found_as_empty {
            debug!(op = op.name, "no data yet, resolving to an empty collection");
            return Ok(Value::Array(Vec::new()));
        }

        if !status.is_success() {
            let transport_message = response
                .error_for_status_ref()
                .err()
                .map(|e| sanitize_reqwest_error(&e));
            let body_bytes = response.bytes().await.unwrap_or_default();
            let message = envelope::detail_from_body(&body_bytes)
                .or(transport_message)
                .unwrap_or_else(|| op.transport_fallback.to_string());
            warn!(op = op.name, status = status.as_u16(), error = %message, "request failed");
            return Err(ApiError::TransportFailed(message));
        }

        let body_bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                let message = sanitize_reqwest_error(&e);
                warn!(op = op.name, error = %message, "failed reading response body");
                return Err(ApiError::TransportFailed(message));
            }
        };

        // A 2xx body that is not an envelope counts as an unexplained failure.
        let parsed: Envelope = serde_json::from_slice(&body_bytes).unwrap_or_default();
        match parsed.into_data(op.envelope_fallback) {
            Ok(data) => {
                if op.log_payload {
                    debug!(op = op.name, payload = %data, "fetched payload");
                }
                Ok(data)
            }
            Err(e) => {
                warn!(op = op.name, error = %e, "backend reported failure");
                Err(e)
            }
        }
    }

    pub async fn get_cattle(&self) -> Result<Vec<Cattle>> {
        decode(self.call(&ops::GET_CATTLE, &[], None).await?)
    }

    pub async fn get_staff(&self) -> Result<Vec<Staff>> {
        decode(self.call(&ops::GET_STAFF, &[], None).await?)
    }

    pub async fn get_security_alerts(&self) -> Result<Vec<Alert>> {
        decode(self.call(&ops::GET_SECURITY_ALERTS, &[], None).await?)
    }

    pub async fn get_alerts(&self) -> Result<Vec<Alert>> {
        decode(self.call(&ops::GET_ALERTS, &[], None).await?)
    }

    /// Apply `action` (e.g. `"acknowledge"`, `"dismiss"`) to an alert.
    pub async fn update_alert_status(&self, alert_id: &str, action: &str) -> Result<Value> {
        let body = json!({ "action": action });
        self.call(
            &ops::UPDATE_ALERT_STATUS,
            &[("alert_id", alert_id)],
            Some(&body),
        )
        .await
    }

    pub async fn get_geofences(&self) -> Result<Vec<Geofence>> {
        decode(self.call(&ops::GET_GEOFENCES, &[], None).await?)
    }

    pub async fn create_geofence(&self, geofence: &GeofenceCreate) -> Result<Value> {
        let body = json!({
            "name": geofence.name,
            "coordinates": geofence.coordinates,
        });
        self.call(&ops::CREATE_GEOFENCE, &[], Some(&body)).await
    }

    /// Current location of every animal with a GPS fix.
    ///
    /// A 404 from the backend means no location data exists yet and resolves
    /// to an empty list — the one operation where "not found" is not an
    /// error.
    pub async fn get_cattle_locations(&self) -> Result<Vec<CattleLocation>> {
        decode(self.call(&ops::GET_CATTLE_LOCATIONS, &[], None).await?)
    }

    pub async fn get_cattle_dashboard_data(&self) -> Result<Value> {
        self.call(&ops::GET_CATTLE_DASHBOARD, &[], None).await
    }

    pub async fn get_cattle_live_data(&self, cattle_id: &str) -> Result<CattleLiveData> {
        decode(
            self.call(
                &ops::GET_CATTLE_LIVE_DATA,
                &[("cattle_id", cattle_id)],
                None,
            )
            .await?,
        )
    }

    pub async fn get_cattle1_live_data(&self) -> Result<CattleLiveData> {
        decode(self.call(&ops::GET_CATTLE1_LIVE_DATA, &[], None).await?)
    }

    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        decode(self.call(&ops::GET_DASHBOARD_SUMMARY, &[], None).await?)
    }

    /// Live data for the whole herd, keyed by cattle id. The realtime store
    /// does not pin this shape down, so the raw payload is returned.
    pub async fn get_all_cattle_live_data(&self) -> Result<Value> {
        self.call(&ops::GET_ALL_CATTLE_LIVE_DATA, &[], None).await
    }

    pub async fn create_test_geofence(&self) -> Result<Value> {
        self.call(&ops::CREATE_TEST_GEOFENCE, &[], None).await
    }

    pub async fn create_test_cattle_data(&self) -> Result<Value> {
        self.call(&ops::CREATE_TEST_CATTLE_DATA, &[], None).await
    }
}

fn decode<T: serde::de::DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    // Best-effort: drop credentials + query + fragment.
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

/// Strip anything secret-shaped from a transport error before it becomes a
/// user-facing message.
fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}

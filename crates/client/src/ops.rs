//! Operation descriptors.
//!
//! One descriptor per backend capability: HTTP method, path template, the
//! fallback messages used when the backend gives no error text, and the two
//! per-operation policy flags. The table is fixed at compile time; the
//! generic call helper in [`crate::client`] is parameterized by it.

use reqwest::Method;

/// A fixed (method, path template, fallback messages) record identifying one
/// backend capability.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Stable name, used in diagnostics only.
    pub name: &'static str,
    pub method: Method,
    /// Path template; `{placeholder}` segments are filled by [`Operation::bind`].
    pub path: &'static str,
    /// Message used when the envelope reports failure without an `error` field.
    pub envelope_fallback: &'static str,
    /// Message used when the transport fails without a `detail` field or a
    /// transport-level message of its own.
    pub transport_fallback: &'static str,
    /// Treat an HTTP 404 as an empty collection instead of an error.
    pub not_found_as_empty: bool,
    /// Log the successful payload (diagnostics only, no contract).
    pub log_payload: bool,
}

impl Operation {
    /// Fill the path template with caller-supplied identifiers.
    ///
    /// Values are substituted verbatim — not escaped or validated — matching
    /// the backend's expectations for these identifier-shaped segments.
    #[must_use]
    pub fn bind(&self, params: &[(&str, &str)]) -> String {
        let mut path = self.path.to_string();
        for (name, value) in params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        path
    }
}

pub const GET_CATTLE: Operation = Operation {
    name: "get_cattle",
    method: Method::GET,
    path: "/cattle",
    envelope_fallback: "Failed to fetch cattle",
    transport_fallback: "Failed to fetch cattle",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_STAFF: Operation = Operation {
    name: "get_staff",
    method: Method::GET,
    path: "/staff",
    envelope_fallback: "Failed to fetch staff",
    transport_fallback: "Failed to fetch staff",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_SECURITY_ALERTS: Operation = Operation {
    name: "get_security_alerts",
    method: Method::GET,
    path: "/alerts",
    envelope_fallback: "Failed to fetch security alerts",
    transport_fallback: "Failed to fetch security alerts",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_ALERTS: Operation = Operation {
    name: "get_alerts",
    method: Method::GET,
    path: "/alerts",
    envelope_fallback: "Failed to fetch alerts",
    transport_fallback: "Failed to fetch alerts",
    not_found_as_empty: false,
    log_payload: false,
};

pub const UPDATE_ALERT_STATUS: Operation = Operation {
    name: "update_alert_status",
    method: Method::POST,
    path: "/alerts/{alert_id}/action",
    envelope_fallback: "Failed to update alert status",
    transport_fallback: "Failed to update alert status",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_GEOFENCES: Operation = Operation {
    name: "get_geofences",
    method: Method::GET,
    path: "/geofences",
    envelope_fallback: "Failed to fetch geofences",
    transport_fallback: "Failed to fetch geofences",
    not_found_as_empty: false,
    log_payload: false,
};

pub const CREATE_GEOFENCE: Operation = Operation {
    name: "create_geofence",
    method: Method::POST,
    path: "/geofences",
    envelope_fallback: "Failed to create geofence",
    transport_fallback: "Failed to create geofence",
    not_found_as_empty: false,
    log_payload: false,
};

/// The one operation where a 404 means "nothing yet", not an error, and
/// where successful payloads are logged.
pub const GET_CATTLE_LOCATIONS: Operation = Operation {
    name: "get_cattle_locations",
    method: Method::GET,
    path: "/cattle-locations",
    envelope_fallback: "Failed to fetch cattle locations",
    transport_fallback: "Failed to fetch cattle locations",
    not_found_as_empty: true,
    log_payload: true,
};

pub const GET_CATTLE_DASHBOARD: Operation = Operation {
    name: "get_cattle_dashboard_data",
    method: Method::GET,
    path: "/cattle-dashboard",
    envelope_fallback: "Failed to fetch cattle dashboard data",
    transport_fallback: "Failed to fetch cattle dashboard data",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_CATTLE_LIVE_DATA: Operation = Operation {
    name: "get_cattle_live_data",
    method: Method::GET,
    path: "/cattle-live-data/{cattle_id}",
    envelope_fallback: "Failed to fetch cattle live data",
    transport_fallback: "Failed to load cattle live data",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_CATTLE1_LIVE_DATA: Operation = Operation {
    name: "get_cattle1_live_data",
    method: Method::GET,
    path: "/cattle-live-data/cattle1",
    envelope_fallback: "Failed to fetch cattle1 live data",
    transport_fallback: "Failed to load cattle1 live data",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_DASHBOARD_SUMMARY: Operation = Operation {
    name: "get_dashboard_summary",
    method: Method::GET,
    path: "/dashboard/summary",
    envelope_fallback: "Failed to fetch dashboard summary",
    transport_fallback: "Failed to load dashboard summary",
    not_found_as_empty: false,
    log_payload: false,
};

pub const GET_ALL_CATTLE_LIVE_DATA: Operation = Operation {
    name: "get_all_cattle_live_data",
    method: Method::GET,
    path: "/cattle-live-data",
    envelope_fallback: "Failed to fetch all cattle live data",
    transport_fallback: "Failed to load all cattle live data",
    not_found_as_empty: false,
    log_payload: false,
};

pub const CREATE_TEST_GEOFENCE: Operation = Operation {
    name: "create_test_geofence",
    method: Method::POST,
    path: "/geofences/create-test",
    envelope_fallback: "Failed to create test geofence",
    transport_fallback: "Failed to create test geofence",
    not_found_as_empty: false,
    log_payload: false,
};

pub const CREATE_TEST_CATTLE_DATA: Operation = Operation {
    name: "create_test_cattle_data",
    method: Method::POST,
    path: "/cattle/create-test-data",
    envelope_fallback: "Failed to create test cattle data",
    transport_fallback: "Failed to create test cattle data",
    not_found_as_empty: false,
    log_payload: false,
};

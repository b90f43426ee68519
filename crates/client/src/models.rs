//! Payload models for the HerdLink backend.
//!
//! Field names and casing follow the wire: herd records (cattle, staff,
//! alerts) are camelCase, sensor-derived records are snake_case. The
//! envelope layer treats payloads as opaque and the backing store is
//! sparse, so everything except identifiers is defaulted on deserialize.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pen-relative position of a cattle record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cattle {
    pub id: String,
    #[serde(rename = "type", default)]
    pub cattle_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub last_movement: String,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cattle_id: String,
    #[serde(rename = "type", default)]
    pub alert_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// A polygon fence; coordinates are `[lng, lat]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geofence {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

/// Body of `POST /geofences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeofenceCreate {
    pub name: String,
    pub coordinates: Vec<Vec<f64>>,
}

/// One entry of the `/cattle-locations` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CattleLocation {
    #[serde(default)]
    pub cattle_id: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub behavior: String,
    #[serde(default)]
    pub is_moving: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Behavior {
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub previous: String,
    #[serde(default)]
    pub duration_seconds: i64,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityMetrics {
    #[serde(default)]
    pub total_active_time_seconds: i64,
    #[serde(default)]
    pub total_rest_time_seconds: i64,
    #[serde(default)]
    pub daily_steps: i64,
    #[serde(default)]
    pub daily_distance_km: f64,
}

/// Live state of one animal as reported by its collar sensor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CattleLiveData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cattle_id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub gps_fix: bool,
    #[serde(default)]
    pub speed_kmh: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub is_moving: bool,
    #[serde(default)]
    pub acceleration: Acceleration,
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub activity: ActivityMetrics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CattleStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_status: HashMap<String, u64>,
    #[serde(default)]
    pub by_location: HashMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub online: u64,
    #[serde(default)]
    pub offline: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub recent: Vec<Alert>,
}

/// Payload of `GET /dashboard/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub cattle: CattleStats,
    #[serde(default)]
    pub staff: StaffStats,
    #[serde(default)]
    pub alerts: AlertStats,
}

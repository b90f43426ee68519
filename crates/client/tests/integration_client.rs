//! End-to-end tests of the envelope protocol against an in-process backend.

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use herdlink_client::models::GeofenceCreate;
use herdlink_client::{ApiClient, ApiError};
use herdlink_test_support::{MockBackend, error_envelope, failed_envelope, ok_envelope};
use serde_json::{Value, json};

async fn client_for(app: Router) -> anyhow::Result<(ApiClient, MockBackend)> {
    let backend = MockBackend::spawn(app).await?;
    let client = ApiClient::from_base_url(backend.base_url())?;
    Ok((client, backend))
}

#[tokio::test]
async fn get_cattle_unwraps_the_data_field() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/cattle",
        get(|| async { ok_envelope(json!([{"id": "c1"}])) }),
    );
    let (client, backend) = client_for(app).await?;

    let cattle = client.get_cattle().await?;
    assert_eq!(cattle.len(), 1);
    assert_eq!(cattle[0].id, "c1");
    // Everything but the id was absent and defaults.
    assert_eq!(cattle[0].status, "");
    assert!(cattle[0].position.is_none());

    backend.stop().await
}

#[tokio::test]
async fn envelope_error_text_is_surfaced_exactly() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/staff",
        get(|| async { error_envelope("staff roster unavailable") }),
    );
    let (client, backend) = client_for(app).await?;

    let err = client.get_staff().await.unwrap_err();
    assert!(matches!(err, ApiError::OperationFailed(_)));
    assert_eq!(err.to_string(), "staff roster unavailable");

    backend.stop().await
}

#[tokio::test]
async fn silent_failure_uses_the_operations_own_fallback() -> anyhow::Result<()> {
    // Two operations share this endpoint but carry different fallback text.
    let app = Router::new().route("/alerts", get(|| async { failed_envelope() }));
    let (client, backend) = client_for(app).await?;

    let err = client.get_security_alerts().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch security alerts");

    let err = client.get_alerts().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch alerts");

    backend.stop().await
}

#[tokio::test]
async fn non_envelope_body_counts_as_silent_failure() -> anyhow::Result<()> {
    let app = Router::new().route("/geofences", get(|| async { Json(json!([1, 2, 3])) }));
    let (client, backend) = client_for(app).await?;

    let err = client.get_geofences().await.unwrap_err();
    assert!(matches!(err, ApiError::OperationFailed(_)));
    assert_eq!(err.to_string(), "Failed to fetch geofences");

    backend.stop().await
}

#[tokio::test]
async fn cattle_locations_resolve_empty_on_404() -> anyhow::Result<()> {
    // No route registered: the backend answers 404.
    let (client, backend) = client_for(Router::new()).await?;

    let locations = client.get_cattle_locations().await?;
    assert!(locations.is_empty());

    backend.stop().await
}

#[tokio::test]
async fn not_found_still_fails_every_other_operation() -> anyhow::Result<()> {
    let (client, backend) = client_for(Router::new()).await?;

    let err = client.get_cattle_live_data("cattle7").await.unwrap_err();
    assert!(matches!(err, ApiError::TransportFailed(_)));
    assert!(err.to_string().contains("404"), "message: {err}");

    backend.stop().await
}

#[tokio::test]
async fn detail_field_wins_on_error_responses() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/alerts/{alert_id}/action",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Alert a1 not found"})),
            )
        }),
    );
    let (client, backend) = client_for(app).await?;

    let err = client.update_alert_status("a1", "ack").await.unwrap_err();
    assert!(matches!(err, ApiError::TransportFailed(_)));
    assert_eq!(err.to_string(), "Alert a1 not found");

    backend.stop().await
}

#[tokio::test]
async fn update_alert_status_posts_the_action_body() -> anyhow::Result<()> {
    async fn echo(Path(alert_id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        ok_envelope(json!({ "alertId": alert_id, "received": body }))
    }
    let app = Router::new().route("/alerts/{alert_id}/action", post(echo));
    let (client, backend) = client_for(app).await?;

    let data = client.update_alert_status("a1", "ack").await?;
    assert_eq!(data["alertId"], "a1");
    assert_eq!(data["received"], json!({"action": "ack"}));

    backend.stop().await
}

#[tokio::test]
async fn create_geofence_posts_name_and_coordinates() -> anyhow::Result<()> {
    async fn echo(Json(body): Json<Value>) -> Json<Value> {
        ok_envelope(body)
    }
    let app = Router::new().route("/geofences", post(echo));
    let (client, backend) = client_for(app).await?;

    let fence = GeofenceCreate {
        name: "North Pasture".to_string(),
        coordinates: vec![vec![36.8, -1.3], vec![36.9, -1.3], vec![36.8, -1.3]],
    };
    let data = client.create_geofence(&fence).await?;
    assert_eq!(data["name"], "North Pasture");
    assert_eq!(data["coordinates"][1], json!([36.9, -1.3]));

    backend.stop().await
}

#[tokio::test]
async fn dashboard_payload_is_returned_verbatim() -> anyhow::Result<()> {
    let payload = json!({
        "herd_size": 12,
        "alerts_open": 2,
        "charts": {"activity": [1, 4, 2]}
    });
    let p = payload.clone();
    let app = Router::new().route(
        "/cattle-dashboard",
        get(move || {
            let p = p.clone();
            async move { ok_envelope(p) }
        }),
    );
    let (client, backend) = client_for(app).await?;

    let data = client.get_cattle_dashboard_data().await?;
    assert_eq!(data, payload);

    backend.stop().await
}

#[tokio::test]
async fn live_data_binds_the_cattle_id_and_decodes() -> anyhow::Result<()> {
    async fn live(Path(cattle_id): Path<String>) -> Json<Value> {
        ok_envelope(json!({
            "id": cattle_id,
            "cattle_id": cattle_id,
            "latitude": -1.28,
            "longitude": 36.82,
            "gps_fix": true,
            "is_moving": true,
            "behavior": {"current": "walking", "previous": "grazing", "duration_seconds": 30, "confidence": 0.8}
        }))
    }
    let app = Router::new().route("/cattle-live-data/{cattle_id}", get(live));
    let (client, backend) = client_for(app).await?;

    let live = client.get_cattle_live_data("cattle7").await?;
    assert_eq!(live.cattle_id, "cattle7");
    assert_eq!(live.behavior.current, "walking");
    assert!(live.gps_fix);
    // Fields the backend omitted default instead of failing the call.
    assert_eq!(live.activity.daily_steps, 0);

    let live1 = client.get_cattle1_live_data().await?;
    assert_eq!(live1.cattle_id, "cattle1");

    backend.stop().await
}

#[tokio::test]
async fn dashboard_summary_decodes_typed_stats() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/dashboard/summary",
        get(|| async {
            ok_envelope(json!({
                "cattle": {"total": 12, "by_status": {"Healthy": 11}, "by_location": {"North Pasture": 12}},
                "staff": {"total": 3, "online": 2, "offline": 1},
                "alerts": {"total": 1, "recent": [{"id": "a1", "cattleId": "c1"}]}
            }))
        }),
    );
    let (client, backend) = client_for(app).await?;

    let summary = client.get_dashboard_summary().await?;
    assert_eq!(summary.cattle.total, 12);
    assert_eq!(summary.staff.online, 2);
    assert_eq!(summary.alerts.recent[0].id, "a1");

    backend.stop().await
}

#[tokio::test]
async fn create_test_operations_post_without_a_body() -> anyhow::Result<()> {
    let app = Router::new()
        .route(
            "/geofences/create-test",
            post(|| async { ok_envelope(json!({"id": "geofence_test"})) }),
        )
        .route(
            "/cattle/create-test-data",
            post(|| async { ok_envelope(json!({"created": 5})) }),
        );
    let (client, backend) = client_for(app).await?;

    let data = client.create_test_geofence().await?;
    assert_eq!(data["id"], "geofence_test");

    let data = client.create_test_cattle_data().await?;
    assert_eq!(data["created"], 5);

    backend.stop().await
}

#[tokio::test]
async fn payload_that_does_not_fit_the_model_is_a_decode_error() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/cattle",
        get(|| async { ok_envelope(json!({"not": "a list"})) }),
    );
    let (client, backend) = client_for(app).await?;

    let err = client.get_cattle().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    backend.stop().await
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() -> anyhow::Result<()> {
    // Grab a port, then close the listener so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = ApiClient::from_base_url(&format!("http://{addr}"))?;
    let err = client.get_cattle().await.unwrap_err();
    assert!(matches!(err, ApiError::TransportFailed(_)));
    Ok(())
}

#[tokio::test]
async fn concurrent_calls_resolve_independently() -> anyhow::Result<()> {
    let app = Router::new()
        .route(
            "/cattle",
            get(|| async { ok_envelope(json!([{"id": "c1"}])) }),
        )
        .route(
            "/staff",
            get(|| async { ok_envelope(json!([{"id": "s1", "name": "Asha"}])) }),
        );
    let (client, backend) = client_for(app).await?;

    let (cattle, staff) = tokio::join!(client.get_cattle(), client.get_staff());
    assert_eq!(cattle?[0].id, "c1");
    assert_eq!(staff?[0].name, "Asha");

    backend.stop().await
}

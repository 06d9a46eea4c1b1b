use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::common::mock_app::MockApp;

mod common;

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test]
async fn station_payload_is_stored_with_server_timestamp() {
    let app = MockApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post(
            "/api/sensor",
            r#"{"lux":123.46,"accel":{"x":-5,"y":10,"z":-32736}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.storage.recent_complete(50).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].lux, 123.46);
    assert_eq!(rows[0].accel_x, -5);
    assert_eq!(rows[0].accel_z, -32736);
    assert!(!rows[0].timestamp.is_empty());
}

#[tokio::test]
async fn missing_fields_default_to_zero() {
    let app = MockApp::new();

    // No accel at all; the ingestion contract zero-fills it.
    let response = app
        .router
        .clone()
        .oneshot(post("/submit_data", r#"{"lux": 55.5}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.storage.recent_complete(50).await.unwrap();
    assert_eq!(rows[0].lux, 55.5);
    assert_eq!(rows[0].temp, 0.0);
    assert_eq!(rows[0].rssi, 0);
    assert_eq!(rows[0].uptime, 0);
    assert_eq!(
        (rows[0].accel_x, rows[0].accel_y, rows[0].accel_z),
        (0, 0, 0)
    );
}

#[tokio::test]
async fn superset_upload_is_accepted_in_full() {
    let app = MockApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post(
            "/submit_data",
            r#"{"lux":12.0,"temp":21.5,"rssi":-61,"uptime":3600,"accel":{"x":1,"y":2,"z":3}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.storage.recent_complete(50).await.unwrap();
    assert_eq!(rows[0].temp, 21.5);
    assert_eq!(rows[0].rssi, -61);
    assert_eq!(rows[0].uptime, 3600);
}

#[tokio::test]
async fn malformed_body_is_rejected_without_storing() {
    let app = MockApp::new();

    let response = app
        .router
        .clone()
        .oneshot(post("/api/sensor", "not json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(app.storage.recent_complete(50).await.unwrap().is_empty());
}

#[tokio::test]
async fn uploads_accumulate_in_order() {
    let app = MockApp::new();

    for lux in [1.0, 2.0, 3.0] {
        let response = app
            .router
            .clone()
            .oneshot(post("/api/sensor", &format!(r#"{{"lux":{lux}}}"#)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows = app.storage.recent_complete(50).await.unwrap();
    let luxes: Vec<f64> = rows.iter().map(|row| row.lux).collect();
    assert_eq!(luxes, [1.0, 2.0, 3.0]);
}

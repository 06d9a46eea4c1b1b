use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use envimote_server::models::SensorRow;

use crate::common::mock_app::MockApp;

mod common;

// admin:admin
const GOOD_AUTH: &str = "Basic YWRtaW46YWRtaW4=";
// wrong:wrong
const BAD_AUTH: &str = "Basic d3Jvbmc6d3Jvbmc=";

fn get_data(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/api/data");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn row(timestamp: &str, lux: f64) -> SensorRow {
    SensorRow {
        timestamp: timestamp.to_owned(),
        lux,
        temp: 20.0,
        rssi: -60,
        uptime: 1,
        accel_x: 0,
        accel_y: 0,
        accel_z: 16384,
    }
}

#[tokio::test]
async fn read_api_requires_credentials() {
    let app = MockApp::new();

    let response = app.router.clone().oneshot(get_data(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .expect("challenge header");
    assert!(challenge.to_str().unwrap().starts_with("Basic"));
}

#[tokio::test]
async fn read_api_rejects_wrong_credentials() {
    let app = MockApp::new();

    let response = app
        .router
        .clone()
        .oneshot(get_data(Some(BAD_AUTH)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn read_api_returns_at_most_fifty_recent_rows() {
    let app = MockApp::new();

    for index in 0..55 {
        app.storage
            .append(&row(&format!("2026-08-06 10:00:{index:02}"), index as f64))
            .await
            .unwrap();
    }

    let response = app
        .router
        .clone()
        .oneshot(get_data(Some(GOOD_AUTH)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<SensorRow> = serde_json::from_slice(&body).unwrap();

    assert_eq!(rows.len(), 50);
    // The five oldest rows fall off the front.
    assert_eq!(rows[0].lux, 5.0);
    assert_eq!(rows[49].lux, 54.0);
}

#[tokio::test]
async fn rows_with_empty_fields_are_filtered_out() {
    let app = MockApp::new();

    app.storage.append(&row("", 1.0)).await.unwrap();
    app.storage
        .append(&row("2026-08-06 11:00:00", 2.0))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(get_data(Some(GOOD_AUTH)))
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let rows: Vec<SensorRow> = serde_json::from_slice(&body).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].lux, 2.0);
}

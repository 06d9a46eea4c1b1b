use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use envimote_api::CollectorUpload;
use serde_json::json;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::configs::storage::Storage;
use crate::errors::ApiError;
use crate::models::SensorRow;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Clone)]
pub struct IngestState {
    pub storage: Arc<Storage>,
}

/// Ingest one reading. Serves both the station uplink route and the
/// generic submit route; missing fields arrive as zeros from the upload
/// deserializer.
pub async fn submit_data(
    State(state): State<IngestState>,
    Json(upload): Json<CollectorUpload>,
) -> Result<impl IntoResponse, ApiError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(TIMESTAMP_FORMAT)
        .expect("static timestamp format");

    let row = SensorRow::from_upload(&upload, timestamp);
    state.storage.append(&row).await?;

    tracing::info!(
        lux = row.lux,
        temp = row.temp,
        rssi = row.rssi,
        uptime = row.uptime,
        "stored reading, accel=({},{},{})",
        row.accel_x,
        row.accel_y,
        row.accel_z,
    );

    Ok(Json(json!({"status": "success", "message": "Data saved"})))
}

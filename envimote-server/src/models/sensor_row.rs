use envimote_api::CollectorUpload;
use serde::{Deserialize, Serialize};

/// One stored row; field order is the data log's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRow {
    pub timestamp: String,
    pub lux: f64,
    pub temp: f64,
    pub rssi: i64,
    pub uptime: u64,
    pub accel_x: i32,
    pub accel_y: i32,
    pub accel_z: i32,
}

impl SensorRow {
    /// Flatten an upload onto the column set; absent upload fields are
    /// already zero by the time they get here.
    pub fn from_upload(upload: &CollectorUpload, timestamp: String) -> Self {
        Self {
            timestamp,
            lux: upload.lux,
            temp: upload.temp,
            rssi: upload.rssi,
            uptime: upload.uptime,
            accel_x: upload.accel.x,
            accel_y: upload.accel.y,
            accel_z: upload.accel.z,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Acceleration vector in raw sensor counts.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Uplink body a station POSTs once per sampling cycle.
///
/// `lux` is pre-rounded to two decimals by the sender; accelerometer counts
/// are carried exactly as read.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryPayload {
    /// Illuminance in lux
    pub lux: f64,
    /// Raw acceleration counts
    pub accel: AccelVector,
}

/// Superset body the collector's ingestion endpoints accept.
///
/// Stations only ever fill `lux` and `accel`; richer senders may add the
/// remaining fields. Anything absent defaults to zero rather than rejecting
/// the upload.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectorUpload {
    #[serde(default)]
    pub lux: f64,
    /// Temperature in Celsius
    #[serde(default)]
    pub temp: f64,
    /// Link signal strength in dBm
    #[serde(default)]
    pub rssi: i64,
    /// Seconds since device boot
    #[serde(default)]
    pub uptime: u64,
    #[serde(default)]
    pub accel: AccelVector,
}

impl From<TelemetryPayload> for CollectorUpload {
    fn from(payload: TelemetryPayload) -> Self {
        Self {
            lux: payload.lux,
            accel: payload.accel,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_payload_wire_shape() {
        let payload = TelemetryPayload {
            lux: 123.46,
            accel: AccelVector { x: -5, y: 10, z: -32736 },
        };

        let json = serde_json::to_string(&payload).unwrap();

        assert_eq!(
            json,
            r#"{"lux":123.46,"accel":{"x":-5,"y":10,"z":-32736}}"#
        );
    }

    #[test]
    fn upload_defaults_missing_fields_to_zero() {
        let upload: CollectorUpload = serde_json::from_str(r#"{"lux": 42.5}"#).unwrap();

        assert_eq!(upload.lux, 42.5);
        assert_eq!(upload.temp, 0.0);
        assert_eq!(upload.rssi, 0);
        assert_eq!(upload.uptime, 0);
        assert_eq!(upload.accel, AccelVector::default());
    }

    #[test]
    fn upload_accepts_station_payload() {
        let payload = TelemetryPayload {
            lux: 0.0,
            accel: AccelVector { x: 1, y: 2, z: 3 },
        };
        let bytes = serde_json::to_vec(&payload).unwrap();

        let upload: CollectorUpload = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(upload.accel, payload.accel);
        assert_eq!(upload.uptime, 0);
    }
}

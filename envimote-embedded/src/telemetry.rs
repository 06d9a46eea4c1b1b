use alloc::string::String;

use envimote_api::protocols::Protocol;
use envimote_api::protocols::json::JsonProtocol;
use envimote_api::{AccelVector, TelemetryPayload};
use log::{debug, error, warn};

use crate::sensor::SensorReading;

/// Seam over the HTTP stack. One blocking JSON POST per call;
/// implementations set `Content-Type: application/json`.
pub trait HttpPoster {
    type Error: core::fmt::Debug;

    async fn post_json(&mut self, url: &str, body: &[u8]) -> Result<(), Self::Error>;
}

/// Builds the wire payload for a reading and performs the best-effort send.
///
/// Nothing here retries and nothing here escapes as an error; a failed send
/// is a `false` and the next cycle simply tries again.
pub struct TelemetryDispatcher<H> {
    pub(crate) http: H,
    endpoint: String,
    protocol: JsonProtocol,
}

impl<H: HttpPoster> TelemetryDispatcher<H> {
    pub fn new(http: H, endpoint: String) -> Self {
        Self {
            http,
            endpoint,
            protocol: JsonProtocol,
        }
    }

    /// Wire payload for one reading: lux rounded to two decimals,
    /// acceleration counts carried exactly.
    pub fn payload_for(reading: &SensorReading) -> TelemetryPayload {
        TelemetryPayload {
            lux: round_lux(reading.illuminance_lux),
            accel: AccelVector {
                x: reading.accel_x.into(),
                y: reading.accel_y.into(),
                z: reading.accel_z.into(),
            },
        }
    }

    pub async fn send(&mut self, reading: &SensorReading) -> bool {
        let payload = Self::payload_for(reading);
        let body = match self.protocol.serialize(&payload) {
            Ok(body) => body,
            Err(e) => {
                error!("payload serialization failed: {:?}", e);
                return false;
            }
        };

        match self.http.post_json(&self.endpoint, &body).await {
            Ok(()) => {
                debug!("telemetry sent, {} bytes", body.len());
                true
            }
            Err(e) => {
                warn!("telemetry send failed: {:?}", e);
                false
            }
        }
    }
}

/// Two-decimal rounding for the wire, ties away from zero.
fn round_lux(lux: f32) -> f64 {
    libm::round(lux as f64 * 100.0) / 100.0
}

#[cfg(test)]
pub(crate) mod mock {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::HttpPoster;

    #[derive(Debug, Default)]
    pub struct MockHttp {
        pub fail: bool,
        pub requests: Vec<(String, Vec<u8>)>,
    }

    impl HttpPoster for MockHttp {
        type Error = &'static str;

        async fn post_json(&mut self, url: &str, body: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err("connection refused");
            }
            self.requests.push((url.to_string(), body.to_vec()));
            Ok(())
        }
    }
}

use std::convert::Infallible;
use std::net::Ipv4Addr;
use std::time::Instant;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use envimote_embedded::feedback::{TextDisplay, ToneSounder};
use envimote_embedded::net::{LinkStatus, RadioController, ScanRecord};
use envimote_embedded::telemetry::HttpPoster;
use rand::Rng;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::settings::Simulation;
use crate::simulate::simulation_lux;

const MOTION_ADDRESS: u8 = 0x68;
const LIGHT_ADDRESS: u8 = 0x23;

/// Register-level simulation of the sensor bus: a motion device reporting
/// gravity plus jitter and a light device following the diurnal curve.
pub struct SimulatedSensorBus {
    started: Instant,
    day_seconds: u64,
    pending_register: Option<u8>,
}

impl SimulatedSensorBus {
    pub fn new(day_seconds: u64) -> Self {
        Self {
            started: Instant::now(),
            day_seconds: day_seconds.max(1),
            pending_register: None,
        }
    }

    fn day_fraction(&self) -> f64 {
        (self.started.elapsed().as_secs_f64() / self.day_seconds as f64).fract()
    }

    fn lux_raw(&self) -> u16 {
        let mut rng = rand::rng();
        let lux = simulation_lux(self.day_fraction()) + rng.random_range(-2.0..2.0);

        // The device reports counts at 1.2 per lux.
        ((lux.max(0.0) * 1.2).round()).min(f64::from(u16::MAX)) as u16
    }

    fn accel(&self) -> [i16; 3] {
        let mut rng = rand::rng();

        // Flat on the desk: gravity on z, noise everywhere.
        [
            rng.random_range(-200..200),
            rng.random_range(-200..200),
            16384 + rng.random_range(-200..200),
        ]
    }
}

impl ErrorType for SimulatedSensorBus {
    type Error = ErrorKind;
}

impl I2c for SimulatedSensorBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != MOTION_ADDRESS && address != LIGHT_ADDRESS {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    if address == MOTION_ADDRESS && bytes.len() == 1 {
                        self.pending_register = Some(bytes[0]);
                    }
                }
                Operation::Read(buffer) => match address {
                    LIGHT_ADDRESS if buffer.len() == 2 => {
                        buffer.copy_from_slice(&self.lux_raw().to_be_bytes());
                    }
                    MOTION_ADDRESS
                        if buffer.len() == 6 && self.pending_register.take() == Some(0x3B) =>
                    {
                        for (chunk, axis) in buffer.chunks_exact_mut(2).zip(self.accel()) {
                            chunk.copy_from_slice(&axis.to_be_bytes());
                        }
                    }
                    _ => {}
                },
            }
        }

        Ok(())
    }
}

/// Radio that sees the configured networks and hands out an address after a
/// fixed number of status polls.
pub struct SimulatedRadio {
    networks: Vec<ScanRecord>,
    join_polls: u8,
    polls: u8,
    joining: bool,
    associated: bool,
    active: bool,
}

impl SimulatedRadio {
    pub fn new(simulation: &Simulation) -> Self {
        let networks = simulation
            .networks
            .iter()
            .enumerate()
            .map(|(index, network)| ScanRecord {
                ssid: network.ssid.clone(),
                bssid: [0x02, 0x00, 0x00, 0x00, 0x00, index as u8],
                rssi: network.rssi,
            })
            .collect();

        Self {
            networks,
            join_polls: simulation.join_polls.max(1),
            polls: 0,
            joining: false,
            associated: false,
            active: false,
        }
    }
}

impl RadioController for SimulatedRadio {
    type Error = Infallible;

    async fn set_active(&mut self, active: bool) -> Result<(), Self::Error> {
        self.active = active;
        if !active {
            self.associated = false;
            self.joining = false;
        }
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), Self::Error> {
        self.associated = false;
        self.joining = false;
        Ok(())
    }

    async fn scan(&mut self) -> Result<Vec<ScanRecord>, Self::Error> {
        Ok(self.networks.clone())
    }

    async fn connect(&mut self, _ssid: &str, _password: &str) -> Result<(), Self::Error> {
        self.joining = true;
        self.polls = 0;
        Ok(())
    }

    fn link_status(&mut self) -> LinkStatus {
        if self.associated {
            return LinkStatus::GotIp;
        }
        if !self.active || !self.joining {
            return LinkStatus::Idle;
        }

        self.polls += 1;
        if self.polls >= self.join_polls {
            self.associated = true;
            self.joining = false;
            LinkStatus::GotIp
        } else {
            LinkStatus::Connecting
        }
    }

    fn is_associated(&self) -> bool {
        self.associated
    }

    fn ip_address(&self) -> Option<Ipv4Addr> {
        self.associated.then(|| Ipv4Addr::new(192, 168, 1, 42))
    }
}

/// Real HTTP uplink against the collector.
pub struct HttpUplink {
    client: reqwest::Client,
}

impl HttpUplink {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpUplink {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPoster for HttpUplink {
    type Error = reqwest::Error;

    async fn post_json(&mut self, url: &str, body: &[u8]) -> Result<(), Self::Error> {
        self.client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_vec())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Text rows become log lines.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl TextDisplay for ConsoleDisplay {
    fn write_line(&mut self, row: u8, text: &str) {
        tracing::info!(row, "{text}");
    }

    fn clear(&mut self) {}
}

/// Matrix frames become a one-line summary.
#[derive(Debug, Default)]
pub struct MatrixLog;

impl SmartLedsWrite for MatrixLog {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let pixels: Vec<RGB8> = iterator.into_iter().map(Into::into).collect();
        let lit = pixels.iter().filter(|&&pixel| pixel != RGB8::default()).count();
        tracing::debug!("matrix frame: {}/{} pixels lit", lit, pixels.len());

        Ok(())
    }
}

/// Tones become log lines as well.
#[derive(Debug, Default)]
pub struct BuzzerLog;

impl ToneSounder for BuzzerLog {
    fn beep(&mut self, freq_hz: u16, duration_ms: u64) {
        tracing::debug!("beep {freq_hz} Hz for {duration_ms} ms");
    }
}

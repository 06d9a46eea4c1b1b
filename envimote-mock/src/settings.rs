use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub ssid: String,
    pub password: String,
    pub collector_url: String,
    pub cycle_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleNetwork {
    pub ssid: String,
    pub rssi: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Networks a scan will report
    pub networks: Vec<VisibleNetwork>,
    /// Status polls before the simulated radio reports an address
    pub join_polls: u8,
    /// Wall-clock seconds one simulated day is compressed into
    pub day_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub device: Device,
    pub simulation: Simulation,
}

impl Settings {
    pub fn new() -> Result<Self, toml::de::Error> {
        toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))
    }
}

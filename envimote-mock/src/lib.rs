use std::sync::Arc;

use embassy_time::Duration;
use envimote_embedded::{Station, StationConfig};

use crate::hardware::{
    BuzzerLog, ConsoleDisplay, HttpUplink, MatrixLog, SimulatedRadio, SimulatedSensorBus,
};
use crate::settings::Settings;

pub mod hardware;
pub mod settings;
pub mod simulate;

/// Run the real orchestration loop against simulated hardware.
pub async fn run(settings: &Arc<Settings>) {
    let device = &settings.device;
    let config = StationConfig::new(
        device.ssid.clone(),
        device.password.clone(),
        device.collector_url.clone(),
    )
    .with_cycle_period(Duration::from_millis(device.cycle_ms));

    let bus = SimulatedSensorBus::new(settings.simulation.day_seconds);
    let radio = SimulatedRadio::new(&settings.simulation);

    let mut station = Station::new(
        config,
        bus,
        Some(MatrixLog),
        Some(ConsoleDisplay),
        Some(BuzzerLog),
        radio,
        HttpUplink::new(),
    );

    station.run().await;
}

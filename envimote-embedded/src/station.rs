use embassy_time::Timer;
use embedded_hal::i2c::I2c;
use log::{debug, info, warn};
use smart_leds::{RGB8, SmartLedsWrite};

use crate::config::StationConfig;
use crate::feedback::{FeedbackController, FeedbackEvent, TextDisplay, ToneSounder};
use crate::net::{ConnectionAttemptResult, ConnectionState, ConnectivitySupervisor, RadioController};
use crate::sensor::SensorGateway;
use crate::telemetry::{HttpPoster, TelemetryDispatcher};

/// The fixed-cadence driver tying the gateway, feedback, connectivity and
/// telemetry together.
///
/// Connectivity runs to completion once at boot; the sampling loop then
/// runs forever regardless of the outcome. A cycle is never blocked by a
/// sensor fault or a failed send.
pub struct Station<I, M, D, S, R, H> {
    config: StationConfig,
    gateway: SensorGateway<I>,
    feedback: FeedbackController<M, D, S>,
    supervisor: ConnectivitySupervisor<R>,
    dispatcher: TelemetryDispatcher<H>,
    online: bool,
    last_tx: Option<bool>,
}

impl<I, M, D, S, R, H> Station<I, M, D, S, R, H>
where
    I: I2c,
    M: SmartLedsWrite<Color = RGB8>,
    D: TextDisplay,
    S: ToneSounder,
    R: RadioController,
    H: HttpPoster,
{
    pub fn new(
        config: StationConfig,
        bus: I,
        matrix: Option<M>,
        display: Option<D>,
        sounder: Option<S>,
        radio: R,
        http: H,
    ) -> Self {
        let gateway = SensorGateway::new(bus);
        let feedback = FeedbackController::new(matrix, display, sounder);
        let supervisor = ConnectivitySupervisor::new(
            radio,
            config.ssid.clone(),
            config.password.clone(),
            config.retry.clone(),
        );
        let dispatcher = TelemetryDispatcher::new(http, config.collector_url.clone());

        Self {
            config,
            gateway,
            feedback,
            supervisor,
            dispatcher,
            online: false,
            last_tx: None,
        }
    }

    /// One-time bring-up: boot feedback, sensor handshakes, then the full
    /// connection cycle. Returns the connection outcome; the station keeps
    /// sampling either way.
    pub async fn boot(&mut self) -> ConnectionAttemptResult {
        self.feedback.render(FeedbackEvent::Startup);

        let (motion_ok, light_ok) = self.gateway.initialize();
        info!("sensors ready: motion={} light={}", motion_ok, light_ok);

        let feedback = &mut self.feedback;
        let result = self.supervisor.start(|event| feedback.render(event)).await;
        self.online = result.state == ConnectionState::Connected;
        info!(
            "boot complete, online={} address={:?}",
            self.online, result.address
        );

        result
    }

    /// One sampling cycle: acquire, render, then dispatch when connected.
    ///
    /// The reading is rendered before the send, so the transmit outcome
    /// reaches the panel one cycle late.
    pub async fn run_cycle(&mut self) {
        let (reading, faults) = self.gateway.acquire();
        if faults.any() {
            debug!(
                "sensor faults this cycle: motion={} light={}",
                faults.motion, faults.light
            );
        }

        self.feedback.render(FeedbackEvent::SteadyState {
            reading: reading.clone(),
            tx: self.last_tx,
        });

        if self.online {
            if self.supervisor.is_associated() {
                self.last_tx = Some(self.dispatcher.send(&reading).await);
            } else {
                // No mid-session re-association; the device reports offline
                // and keeps sampling.
                warn!("association lost, continuing offline");
                self.online = false;
                self.last_tx = None;
            }
        }
    }

    /// Boot once, then sample forever on the configured cadence.
    pub async fn run(&mut self) {
        self.boot().await;

        loop {
            self.run_cycle().await;
            // Full-period sleep; cycle work time is not subtracted.
            Timer::after(self.config.cycle_period).await;
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.supervisor.state()
    }
}

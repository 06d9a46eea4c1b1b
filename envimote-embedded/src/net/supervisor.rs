use alloc::string::{String, ToString};
use core::fmt::Write as _;

use embassy_time::{Duration, Timer};
use log::{debug, info, warn};

use crate::feedback::{FailureReason, FeedbackEvent};

use super::{LinkStatus, RadioController, ScanRecord};

/// Connectivity phase of the current boot cycle. Transitions are monotonic
/// within one cycle apart from the explicit reset-and-retry between
/// association attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Scanning,
    Connecting,
    Connected,
    Failed,
}

/// Outcome of one full connection cycle, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionAttemptResult {
    pub state: ConnectionState,
    /// Acquired address in dotted-quad text, present only when connected
    pub address: Option<String>,
    /// Whether the configured network appeared in the scan at all
    pub target_found: bool,
}

/// Budgets for one connection cycle.
///
/// Defaults match the production firmware: five association attempts of
/// twenty one-second status polls each, with two-second settle waits around
/// the interface reset between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u8,
    pub poll_budget: u8,
    pub poll_interval: Duration,
    pub reset_settle: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            poll_budget: 20,
            poll_interval: Duration::from_secs(1),
            reset_settle: Duration::from_secs(2),
        }
    }
}

/// Owns the radio and runs discovery plus association to completion once
/// per boot. Everyone else only ever reads the resulting state.
pub struct ConnectivitySupervisor<R> {
    pub(crate) radio: R,
    ssid: String,
    password: String,
    policy: RetryPolicy,
    state: ConnectionState,
    address: Option<String>,
}

impl<R: RadioController> ConnectivitySupervisor<R> {
    pub fn new(radio: R, ssid: String, password: String, policy: RetryPolicy) -> Self {
        Self {
            radio,
            ssid,
            password,
            policy,
            state: ConnectionState::Idle,
            address: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Address acquired by the last successful connection cycle.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Lightweight liveness check for steady-state polling.
    pub fn is_associated(&self) -> bool {
        self.radio.is_associated()
    }

    /// Run one full connection cycle: bring the radio up, scan for the
    /// configured network, then attempt association within the retry
    /// budget. Terminal for this boot either way; the caller decides what
    /// offline operation looks like.
    pub async fn start(
        &mut self,
        mut on_event: impl FnMut(FeedbackEvent),
    ) -> ConnectionAttemptResult {
        self.set_state(ConnectionState::Scanning);
        on_event(FeedbackEvent::Scanning);

        if let Err(e) = self.bring_up().await {
            warn!("radio bring-up failed: {:?}", e);
            return self.fail(FailureReason::RadioFault, false, &mut on_event);
        }

        let target = match self.find_target().await {
            Ok(target) => target,
            Err(e) => {
                warn!("scan failed: {:?}", e);
                return self.fail(FailureReason::RadioFault, false, &mut on_event);
            }
        };

        let Some(record) = target else {
            info!("network '{}' not found in scan", self.ssid);
            return self.fail(FailureReason::TargetNotFound, false, &mut on_event);
        };
        info!(
            "target '{}' found, bssid {}, rssi {}",
            record.ssid,
            bssid_hex(&record.bssid),
            record.rssi
        );

        self.set_state(ConnectionState::Connecting);
        for attempt in 1..=self.policy.max_attempts {
            info!("association attempt {}/{}", attempt, self.policy.max_attempts);
            on_event(FeedbackEvent::ConnectingAttempt(attempt));

            if let Err(e) = self.radio.connect(&self.ssid, &self.password).await {
                warn!("connect request failed: {:?}", e);
            }

            for _ in 0..self.policy.poll_budget {
                let status = self.radio.link_status();
                match status {
                    LinkStatus::GotIp => {
                        let address = self.radio.ip_address().map(|ip| ip.to_string());
                        self.set_state(ConnectionState::Connected);
                        self.address = address.clone();
                        info!("associated, address {:?}", self.address);
                        on_event(FeedbackEvent::ConnectSuccess(
                            address.clone().unwrap_or_default(),
                        ));
                        return ConnectionAttemptResult {
                            state: ConnectionState::Connected,
                            address,
                            target_found: true,
                        };
                    }
                    status if status.is_terminal_failure() => {
                        warn!("attempt {} ended early: {:?}", attempt, status);
                        break;
                    }
                    _ => {}
                }
                Timer::after(self.policy.poll_interval).await;
            }

            if attempt < self.policy.max_attempts {
                self.reset_radio().await;
            }
        }

        warn!("association retry budget exhausted");
        self.fail(FailureReason::RetriesExhausted, true, &mut on_event)
    }

    async fn bring_up(&mut self) -> Result<(), R::Error> {
        self.radio.set_active(true).await?;
        // Drop any association a previous boot left behind.
        self.radio.disconnect().await
    }

    async fn find_target(&mut self) -> Result<Option<ScanRecord>, R::Error> {
        let records = self.radio.scan().await?;
        for record in &records {
            debug!("scan: '{}' (rssi {})", record.ssid, record.rssi);
        }

        Ok(records.into_iter().find(|record| record.ssid == self.ssid))
    }

    /// Full interface cycle between attempts; the driver can wedge in a
    /// state only a power cycle clears.
    async fn reset_radio(&mut self) {
        let _ = self.radio.disconnect().await;
        let _ = self.radio.set_active(false).await;
        Timer::after(self.policy.reset_settle).await;
        let _ = self.radio.set_active(true).await;
        Timer::after(self.policy.reset_settle).await;
    }

    fn fail(
        &mut self,
        reason: FailureReason,
        target_found: bool,
        on_event: &mut impl FnMut(FeedbackEvent),
    ) -> ConnectionAttemptResult {
        self.set_state(ConnectionState::Failed);
        on_event(FeedbackEvent::ConnectFailure(reason));

        ConnectionAttemptResult {
            state: ConnectionState::Failed,
            address: None,
            target_found,
        }
    }

    fn set_state(&mut self, new_state: ConnectionState) {
        if self.state != new_state {
            debug!("connection state: {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
        }
    }
}

fn bssid_hex(bssid: &[u8; 6]) -> String {
    let mut out = String::new();
    for (index, byte) in bssid.iter().enumerate() {
        if index > 0 {
            let _ = out.write_char(':');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

use alloc::string::String;

use embassy_time::Duration;

use crate::net::RetryPolicy;

const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_millis(500);

/// Everything a station needs to run, built once at startup and handed down
/// to the components that need it. There is no module-level state.
#[derive(Debug, Clone)]
pub struct StationConfig {
    /// Network identifier the connectivity supervisor looks for
    pub ssid: String,
    pub password: String,
    /// Collector endpoint receiving one POST per cycle
    pub collector_url: String,
    /// Lower bound between two sampling cycles
    pub cycle_period: Duration,
    pub retry: RetryPolicy,
}

impl StationConfig {
    pub fn new(ssid: String, password: String, collector_url: String) -> Self {
        Self {
            ssid,
            password,
            collector_url,
            cycle_period: DEFAULT_CYCLE_PERIOD,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_cycle_period(mut self, period: Duration) -> Self {
        self.cycle_period = period;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

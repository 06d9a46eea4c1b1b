use core::fmt;

/// Sensor-path fault kinds. Neither is fatal: both recover to the neutral
/// default reading plus a fault flag.
///
/// Connectivity failures are classified separately by
/// [`crate::feedback::FailureReason`], and a telemetry send reports plain
/// success or failure; those paths never raise errors by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Transient fault on the sensor bus (timeout, NACK, absent device)
    Bus,
    /// Device failed its startup handshake and is marked out of service
    Unavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus => write!(f, "sensor bus fault"),
            Error::Unavailable => write!(f, "sensor device unavailable"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

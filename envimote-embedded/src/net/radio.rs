use alloc::string::String;
use alloc::vec::Vec;
use core::net::Ipv4Addr;

/// Link status as reported by the radio driver, mirroring the station
/// status codes of the wireless stack underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Idle,
    Connecting,
    Pending,
    GotIp,
    ConnectFailed,
    WrongPassword,
    ApNotFound,
}

impl LinkStatus {
    /// Codes that end an association attempt early; polling longer cannot
    /// turn them into a success.
    pub fn is_terminal_failure(self) -> bool {
        matches!(
            self,
            LinkStatus::ConnectFailed | LinkStatus::WrongPassword | LinkStatus::ApNotFound
        )
    }
}

/// One row of a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub ssid: String,
    pub bssid: [u8; 6],
    /// Signal strength in dBm
    pub rssi: i8,
}

/// Seam over the wireless interface.
///
/// The firmware provides the real driver binding; tests and the simulator
/// provide scripted implementations. The supervisor is the only caller.
pub trait RadioController {
    type Error: core::fmt::Debug;

    /// Power the interface up or down. Dropping power clears any
    /// association.
    async fn set_active(&mut self, active: bool) -> Result<(), Self::Error>;

    async fn disconnect(&mut self) -> Result<(), Self::Error>;

    async fn scan(&mut self) -> Result<Vec<ScanRecord>, Self::Error>;

    /// Request association; completion is observed through
    /// [`RadioController::link_status`].
    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error>;

    fn link_status(&mut self) -> LinkStatus;

    fn is_associated(&self) -> bool;

    fn ip_address(&self) -> Option<Ipv4Addr>;
}

mod radio;
pub(crate) mod supervisor;

pub use radio::{LinkStatus, RadioController, ScanRecord};
pub use supervisor::{
    ConnectionAttemptResult, ConnectionState, ConnectivitySupervisor, RetryPolicy,
};

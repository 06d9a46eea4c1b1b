#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod error;
pub mod feedback;
pub mod net;
pub mod sensor;
pub mod station;
pub mod telemetry;

pub use config::StationConfig;
pub use error::{Error, Result};
pub use station::Station;

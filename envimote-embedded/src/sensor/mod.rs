mod light;
mod motion;

pub use light::{LightSensor, lux_from_raw};
pub use motion::{MotionSensor, axis_from_registers};

use embassy_time::Instant;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

use crate::error::Error;

/// One fully-populated sample.
///
/// A faulty or absent sensor contributes the neutral default (0 / 0.0)
/// instead of a hole; the corresponding [`SensorFaults`] flag is raised so
/// the caller still knows.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Illuminance in lux, never negative
    pub illuminance_lux: f32,
    pub accel_x: i16,
    pub accel_y: i16,
    pub accel_z: i16,
    pub captured_at: Instant,
}

/// Per-device transient-fault flags for the cycle that produced a reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorFaults {
    pub motion: bool,
    pub light: bool,
}

impl SensorFaults {
    pub fn any(&self) -> bool {
        self.motion || self.light
    }
}

/// Owns the low-speed sensor bus and both devices on it.
///
/// Initialization and reads are independent per device; a fault in one never
/// blocks the other, and no fault here ever escapes as an error the sampling
/// loop would have to handle.
pub struct SensorGateway<I> {
    bus: I,
    motion_available: bool,
    light_available: bool,
}

impl<I: I2c> SensorGateway<I> {
    pub fn new(bus: I) -> Self {
        Self {
            bus,
            motion_available: false,
            light_available: false,
        }
    }

    /// Wake/configure each device independently.
    ///
    /// Returns `(motion_ok, light_ok)`. A device that fails its handshake is
    /// marked unavailable; subsequent reads of it yield defaults.
    pub fn initialize(&mut self) -> (bool, bool) {
        self.motion_available = match MotionSensor::initialize(&mut self.bus) {
            Ok(()) => true,
            Err(e) => {
                warn!("motion sensor init failed: {}", e);
                false
            }
        };

        self.light_available = match LightSensor::initialize(&mut self.bus) {
            Ok(()) => true,
            Err(e) => {
                warn!("light sensor init failed: {}", e);
                false
            }
        };

        (self.motion_available, self.light_available)
    }

    /// Acceleration axes in raw counts, `(0, 0, 0)` plus a fault flag on any
    /// bus fault.
    pub fn read_motion(&mut self) -> ((i16, i16, i16), bool) {
        match self.try_read_motion() {
            Ok(axes) => (axes, false),
            Err(e) => {
                debug!("motion read fault: {}", e);
                ((0, 0, 0), true)
            }
        }
    }

    /// Illuminance in lux, `0.0` plus a fault flag on any bus fault.
    pub fn read_illuminance(&mut self) -> (f32, bool) {
        match self.try_read_illuminance() {
            Ok(lux) => (lux, false),
            Err(e) => {
                debug!("light read fault: {}", e);
                (0.0, true)
            }
        }
    }

    fn try_read_motion(&mut self) -> crate::error::Result<(i16, i16, i16)> {
        if !self.motion_available {
            return Err(Error::Unavailable);
        }
        MotionSensor::read(&mut self.bus)
    }

    fn try_read_illuminance(&mut self) -> crate::error::Result<f32> {
        if !self.light_available {
            return Err(Error::Unavailable);
        }
        LightSensor::read(&mut self.bus)
    }

    /// One reading per sampling cycle, always fully populated.
    pub fn acquire(&mut self) -> (SensorReading, SensorFaults) {
        let (lux, light_fault) = self.read_illuminance();
        let ((ax, ay, az), motion_fault) = self.read_motion();

        let reading = SensorReading {
            illuminance_lux: lux,
            accel_x: ax,
            accel_y: ay,
            accel_z: az,
            captured_at: Instant::now(),
        };
        let faults = SensorFaults {
            motion: motion_fault,
            light: light_fault,
        };

        (reading, faults)
    }

    pub fn motion_available(&self) -> bool {
        self.motion_available
    }

    pub fn light_available(&self) -> bool {
        self.light_available
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockBus;
    use super::*;

    #[test]
    fn initialize_is_independent_per_device() {
        let mut bus = MockBus::healthy();
        bus.motion_present = false;

        let mut gateway = SensorGateway::new(bus);
        let (motion_ok, light_ok) = gateway.initialize();

        assert!(!motion_ok);
        assert!(light_ok);
        assert!(gateway.bus.light_configured);
        // The light handshake went out even though the motion one NACKed.
        assert!(
            gateway
                .bus
                .writes
                .iter()
                .any(|(address, bytes)| *address == LightSensor::ADDRESS && bytes == &[0x10])
        );
    }

    #[test]
    fn healthy_bus_reads_both_devices() {
        let mut bus = MockBus::healthy();
        bus.accel = [-5, 10, -32736];
        bus.lux_raw = 1200;

        let mut gateway = SensorGateway::new(bus);
        gateway.initialize();

        let (reading, faults) = gateway.acquire();

        assert_eq!(
            (reading.accel_x, reading.accel_y, reading.accel_z),
            (-5, 10, -32736)
        );
        assert_eq!(reading.illuminance_lux, 1000.0);
        assert!(!faults.any());
    }

    #[test]
    fn bus_fault_yields_defaults_and_flags_not_errors() {
        let mut gateway = SensorGateway::new(MockBus::healthy());
        gateway.initialize();
        gateway.bus.glitch = true;

        let (reading, faults) = gateway.acquire();

        assert_eq!(reading.illuminance_lux, 0.0);
        assert_eq!(
            (reading.accel_x, reading.accel_y, reading.accel_z),
            (0, 0, 0)
        );
        assert!(faults.motion);
        assert!(faults.light);
    }

    #[test]
    fn absent_device_stays_unavailable_but_other_keeps_reading() {
        let mut bus = MockBus::healthy();
        bus.light_present = false;
        bus.accel = [100, 200, 300];

        let mut gateway = SensorGateway::new(bus);
        gateway.initialize();

        let (reading, faults) = gateway.acquire();

        assert_eq!(reading.illuminance_lux, 0.0);
        assert!(faults.light);
        assert_eq!(reading.accel_x, 100);
        assert!(!faults.motion);
    }

    #[test]
    fn reading_is_always_fully_populated() {
        // Nothing initialized at all; acquire must still produce a reading.
        let mut gateway = SensorGateway::new(MockBus::default());
        gateway.initialize();

        let (reading, faults) = gateway.acquire();

        assert_eq!(reading.illuminance_lux, 0.0);
        assert_eq!(reading.accel_z, 0);
        assert!(faults.motion && faults.light);
    }
}

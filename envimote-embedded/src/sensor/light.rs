use embedded_hal::i2c::I2c;

use crate::error::{Error, Result};

/// Counts-per-lux divisor for the high-resolution mode in use.
const LUX_DIVISOR: f32 = 1.2;

/// Ambient light device on the sensor bus.
pub struct LightSensor;

impl LightSensor {
    pub const ADDRESS: u8 = 0x23;

    /// Continuous high-resolution measurement mode
    const CMD_CONTINUOUS_H_RES: u8 = 0x10;

    pub fn initialize<I: I2c>(bus: &mut I) -> Result<()> {
        bus.write(Self::ADDRESS, &[Self::CMD_CONTINUOUS_H_RES])
            .map_err(|_| Error::Bus)
    }

    /// Latest measurement in lux.
    pub fn read<I: I2c>(bus: &mut I) -> Result<f32> {
        let mut raw = [0u8; 2];
        bus.read(Self::ADDRESS, &mut raw).map_err(|_| Error::Bus)?;

        Ok(lux_from_raw(u16::from_be_bytes(raw)))
    }
}

/// The device reports a big-endian 16-bit count; lux is count over divisor.
pub fn lux_from_raw(raw: u16) -> f32 {
    raw as f32 / LUX_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_zero_lux() {
        assert_eq!(lux_from_raw(0), 0.0);
    }

    #[test]
    fn count_scales_by_fixed_divisor() {
        assert_eq!(lux_from_raw(12), 10.0);
        assert_eq!(lux_from_raw(1200), 1000.0);
        assert_eq!(lux_from_raw(u16::MAX), 65535.0 / 1.2);
    }

    #[test]
    fn lux_is_never_negative() {
        for raw in (0u16..=u16::MAX).step_by(511) {
            assert!(lux_from_raw(raw) >= 0.0);
        }
    }
}

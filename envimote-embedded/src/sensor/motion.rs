use embedded_hal::i2c::I2c;

use crate::error::{Error, Result};

/// Six-axis motion device on the sensor bus; only the acceleration
/// registers are used.
pub struct MotionSensor;

impl MotionSensor {
    pub const ADDRESS: u8 = 0x68;

    const REG_PWR_MGMT_1: u8 = 0x6B;
    const REG_ACCEL_XOUT_H: u8 = 0x3B;

    /// Clear the sleep bit so the device starts sampling.
    pub fn initialize<I: I2c>(bus: &mut I) -> Result<()> {
        bus.write(Self::ADDRESS, &[Self::REG_PWR_MGMT_1, 0x00])
            .map_err(|_| Error::Bus)
    }

    /// Burst-read the three acceleration axes as one transfer.
    pub fn read<I: I2c>(bus: &mut I) -> Result<(i16, i16, i16)> {
        let mut raw = [0u8; 6];
        bus.write_read(Self::ADDRESS, &[Self::REG_ACCEL_XOUT_H], &mut raw)
            .map_err(|_| Error::Bus)?;

        Ok((
            axis_from_registers([raw[0], raw[1]]),
            axis_from_registers([raw[2], raw[3]]),
            axis_from_registers([raw[4], raw[5]]),
        ))
    }
}

/// Axis register pairs are big-endian two's complement.
pub fn axis_from_registers(pair: [u8; 2]) -> i16 {
    i16::from_be_bytes(pair)
}

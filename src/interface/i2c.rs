//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Lis3dhtrInterface;

/// Default 7-bit device address, SDO pin low or floating.
pub const DEFAULT_ADDRESS: u8 = 0x18;
/// Alternative 7-bit device address, SDO pin pulled high.
pub const ALTERNATIVE_ADDRESS: u8 = 0x19;

/// 7-bit slave address selection for the LIS3DHTR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaveAddr {
    /// SDO pin low or floating (`0x18`).
    Default,
    /// SDO pin pulled high (`0x19`).
    Alternative,
}

impl SlaveAddr {
    /// Returns the 7-bit bus address for this selection.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Default => DEFAULT_ADDRESS,
            Self::Alternative => ALTERNATIVE_ADDRESS,
        }
    }
}

/// I2C-based interface implementation for the LIS3DHTR driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C, addr: SlaveAddr) -> Self {
        Self {
            i2c,
            address: addr.addr(),
        }
    }

    /// Returns the 7-bit device address this interface talks to.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis3dhtrInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }
}

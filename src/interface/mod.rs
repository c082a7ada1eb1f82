//! Bus interface abstraction for the LIS3DHTR driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
pub trait Lis3dhtrInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}

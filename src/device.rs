//! High-level LIS3DHTR device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::{I2cInterface, SlaveAddr};
use crate::interface::Lis3dhtrInterface;
use crate::params::{BlockDataUpdate, FullScale, Odr, PowerMode};
use crate::registers::{
    Ctrl1,
    Ctrl4,
    Status,
    EXPECTED_WHO_AM_I,
    REG_CTRL_REG1,
    REG_CTRL_REG4,
    REG_OUT_X_L,
    REG_OUT_Y_L,
    REG_OUT_Z_L,
    REG_STATUS,
    REG_WHO_AM_I,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// LIS3DHTR datasheet boot procedure completion delay (milliseconds).
const BOOT_DELAY_MS: u32 = 5;

/// High-level synchronous driver for the LIS3DHTR accelerometer.
pub struct Lis3dhtr<IFACE> {
    interface: IFACE,
    config: Config,
}

/// A raw acceleration sample, one signed 16-bit count per axis.
///
/// Counts are unscaled; converting to physical units requires the sensitivity
/// constant of the active full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelReading {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AccelReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "AccelReading {{ x: {}, y: {}, z: {} }}",
            self.x,
            self.y,
            self.z
        );
    }
}

/// Decoded view of the `STATUS_REG` register with explicit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// STATUS_REG[7] ZYXOR.
    pub xyz_overrun: bool,
    /// STATUS_REG[6] ZOR.
    pub z_overrun: bool,
    /// STATUS_REG[5] YOR.
    pub y_overrun: bool,
    /// STATUS_REG[4] XOR.
    pub x_overrun: bool,
    /// STATUS_REG[3] ZYXDA.
    pub xyz_data_available: bool,
    /// STATUS_REG[2] ZDA.
    pub z_data_available: bool,
    /// STATUS_REG[1] YDA.
    pub y_data_available: bool,
    /// STATUS_REG[0] XDA.
    pub x_data_available: bool,
}

impl StatusSnapshot {
    /// Builds a snapshot from the raw STATUS_REG bitfield.
    pub fn from_register(status: Status) -> Self {
        Self {
            xyz_overrun: status.xyz_overrun(),
            z_overrun: status.z_overrun(),
            y_overrun: status.y_overrun(),
            x_overrun: status.x_overrun(),
            xyz_data_available: status.xyz_data_available(),
            z_data_available: status.z_data_available(),
            y_data_available: status.y_data_available(),
            x_data_available: status.x_data_available(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StatusSnapshot {{\n    ZYXOR: {},\n    ZOR: {},\n    YOR: {},\n    XOR: {},\n    ZYXDA: {},\n    ZDA: {},\n    YDA: {},\n    XDA: {}\n}}",
            self.xyz_overrun,
            self.z_overrun,
            self.y_overrun,
            self.x_overrun,
            self.xyz_data_available,
            self.z_data_available,
            self.y_data_available,
            self.x_data_available
        );
    }
}

impl<IFACE> Lis3dhtr<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Lis3dhtr<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, addr: SlaveAddr, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, addr), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Lis3dhtr<IFACE>
where
    IFACE: Lis3dhtrInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Initializes the sensor using the current configuration.
    ///
    /// Enforces the datasheet boot delay before issuing any commands so callers
    /// do not need to provide their own wait after power ramp, then verifies the
    /// device identity and programs `CTRL_REG1` and `CTRL_REG4`.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.config.validate().map_err(|_| Error::InvalidConfig)?;

        delay.delay_ms(BOOT_DELAY_MS);
        self.check_id()?;
        self.configure(self.config)?;
        Ok(())
    }

    /// Applies a new configuration to the device.
    ///
    /// Re-applying an unchanged configuration rewrites the same register
    /// values and leaves the device state untouched.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.interface
            .write_register(REG_CTRL_REG1, config.ctrl1().into())
            .map_err(Error::from)?;
        self.interface
            .write_register(REG_CTRL_REG4, config.ctrl4().into())
            .map_err(Error::from)?;

        self.config = config;
        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the `WHO_AM_I` register and returns the raw byte.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::from)
    }

    /// Verifies the `WHO_AM_I` register against the expected LIS3DHTR value.
    pub fn check_id(&mut self) -> Result<(), CommE> {
        if self.device_id()? != EXPECTED_WHO_AM_I {
            return Err(Error::DeviceIdMismatch);
        }

        Ok(())
    }

    /// Returns a snapshot of the `STATUS_REG` register.
    pub fn read_status(&mut self) -> Result<StatusSnapshot, CommE> {
        let raw = self
            .interface
            .read_register(REG_STATUS)
            .map_err(Error::from)?;

        Ok(StatusSnapshot::from_register(Status::from(raw)))
    }

    /// Indicates whether a new sample is available on all enabled axes.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.read_status()?.xyz_data_available)
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Selects a new output data rate.
    pub fn set_odr(&mut self, odr: Odr) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| ctrl1.set_odr(odr))
    }

    /// Switches between normal and low-power operating modes.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| ctrl1.set_power_mode(mode))
    }

    /// Enables or disables individual measurement axes.
    pub fn enable_axes(&mut self, x: bool, y: bool, z: bool) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| {
            ctrl1.set_x_enable(x);
            ctrl1.set_y_enable(y);
            ctrl1.set_z_enable(z);
        })
    }

    /// Selects a new full-scale range.
    pub fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), CommE> {
        self.update_ctrl4(|ctrl4| ctrl4.set_full_scale(full_scale))
    }

    /// Selects the output register update behaviour.
    pub fn set_block_data_update(&mut self, bdu: BlockDataUpdate) -> Result<(), CommE> {
        self.update_ctrl4(|ctrl4| ctrl4.set_block_data_update(bdu))
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    #[inline]
    fn unpack_axis(low: u8, high: u8) -> i16 {
        // Two's-complement 16-bit value assembled as low | (high << 8).
        i16::from_le_bytes([low, high])
    }

    /// Reads both data registers of one axis, low byte first.
    fn read_axis(&mut self, low_register: u8) -> Result<i16, CommE> {
        let low = self
            .interface
            .read_register(low_register)
            .map_err(Error::from)?;
        let high = self
            .interface
            .read_register(low_register + 1)
            .map_err(Error::from)?;

        Ok(Self::unpack_axis(low, high))
    }

    /// Reads a raw acceleration triplet.
    ///
    /// Each axis is read as two single-byte register accesses (low then high),
    /// so a sample spans six bus transactions.
    pub fn read_axes(&mut self) -> Result<AccelReading, CommE> {
        let x = self.read_axis(REG_OUT_X_L)?;
        let y = self.read_axis(REG_OUT_Y_L)?;
        let z = self.read_axis(REG_OUT_Z_L)?;

        Ok(AccelReading { x, y, z })
    }

    // ==================================================================
    // == Internal Configuration Helpers ================================
    // ==================================================================

    fn update_ctrl1<F>(&mut self, mut mutate: F) -> Result<(), CommE>
    where
        F: FnMut(&mut Ctrl1),
    {
        let current = self
            .interface
            .read_register(REG_CTRL_REG1)
            .map_err(Error::from)?;

        let mut ctrl1 = Ctrl1::from(current);
        mutate(&mut ctrl1);

        let new_odr = ctrl1.odr();
        let new_mode = ctrl1.power_mode();
        if new_odr.requires_low_power() && new_mode == PowerMode::Normal {
            return Err(Error::InvalidConfig);
        }

        let updated = u8::from(ctrl1);
        if updated != current {
            self.interface
                .write_register(REG_CTRL_REG1, updated)
                .map_err(Error::from)?;
        }

        self.config.odr = new_odr;
        self.config.power_mode = new_mode;
        self.config.x_enable = ctrl1.x_enable();
        self.config.y_enable = ctrl1.y_enable();
        self.config.z_enable = ctrl1.z_enable();

        Ok(())
    }

    fn update_ctrl4<F>(&mut self, mut mutate: F) -> Result<(), CommE>
    where
        F: FnMut(&mut Ctrl4),
    {
        let current = self
            .interface
            .read_register(REG_CTRL_REG4)
            .map_err(Error::from)?;

        let mut ctrl4 = Ctrl4::from(current);
        mutate(&mut ctrl4);

        let updated = u8::from(ctrl4);
        if updated != current {
            self.interface
                .write_register(REG_CTRL_REG4, updated)
                .map_err(Error::from)?;
        }

        self.config.full_scale = ctrl4.full_scale();
        self.config.block_data_update = ctrl4.block_data_update();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Lis3dhtr;
    use crate::interface::Lis3dhtrInterface;
    use core::convert::Infallible;

    struct NoBus;

    impl Lis3dhtrInterface for NoBus {
        type Error = Infallible;

        fn write_register(&mut self, _register: u8, _value: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn read_register(&mut self, _register: u8) -> Result<u8, Self::Error> {
            Ok(0)
        }
    }

    fn unpack(low: u8, high: u8) -> i16 {
        Lis3dhtr::<NoBus>::unpack_axis(low, high)
    }

    /// Reference vectors for the two's-complement axis decode.
    #[test]
    fn unpack_axis_matches_reference_vectors() {
        assert_eq!(unpack(0x00, 0x00), 0);
        assert_eq!(unpack(0xFF, 0x7F), 32767);
        assert_eq!(unpack(0x00, 0x80), -32768);
        assert_eq!(unpack(0xFF, 0xFF), -1);
    }

    #[test]
    fn unpack_axis_orders_low_byte_first() {
        assert_eq!(unpack(0x34, 0x12), 0x1234);
        assert_eq!(unpack(0x12, 0x34), 0x3412);
    }
}

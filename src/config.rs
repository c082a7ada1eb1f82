//! Configuration primitives for the LIS3DHTR driver.

use crate::params::{BlockDataUpdate, FullScale, Odr, PowerMode};
use crate::registers::{Ctrl1, Ctrl4};

/// User-facing configuration for the LIS3DHTR sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Output data rate selection.
    pub odr: Odr,
    /// Normal or low-power operating mode.
    pub power_mode: PowerMode,
    /// X-axis measurement enable.
    pub x_enable: bool,
    /// Y-axis measurement enable.
    pub y_enable: bool,
    /// Z-axis measurement enable.
    pub z_enable: bool,
    /// Full-scale range selection.
    pub full_scale: FullScale,
    /// Output register update behaviour.
    pub block_data_update: BlockDataUpdate,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.odr.requires_low_power() && self.power_mode == PowerMode::Normal {
            return Err(ConfigError::OdrModeMismatch);
        }

        Ok(())
    }

    /// Encodes the `CTRL_REG1` value this configuration programs.
    pub fn ctrl1(&self) -> Ctrl1 {
        Ctrl1::new()
            .with_x_enable(self.x_enable)
            .with_y_enable(self.y_enable)
            .with_z_enable(self.z_enable)
            .with_power_mode(self.power_mode)
            .with_odr(self.odr)
    }

    /// Encodes the `CTRL_REG4` value this configuration programs.
    pub fn ctrl4(&self) -> Ctrl4 {
        Ctrl4::new()
            .with_full_scale(self.full_scale)
            .with_block_data_update(self.block_data_update)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: Odr) -> Self {
        self.config.odr = odr;
        self
    }

    /// Overrides the operating power mode.
    pub fn power_mode(mut self, power_mode: PowerMode) -> Self {
        self.config.power_mode = power_mode;
        self
    }

    /// Selects which axes produce measurements.
    pub fn axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.config.x_enable = x;
        self.config.y_enable = y;
        self.config.z_enable = z;
        self
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Overrides the output register update behaviour.
    pub fn block_data_update(mut self, block_data_update: BlockDataUpdate) -> Self {
        self.config.block_data_update = block_data_update;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: Odr::Hz10,
            power_mode: PowerMode::Normal,
            x_enable: true,
            y_enable: true,
            z_enable: true,
            full_scale: FullScale::G2,
            block_data_update: BlockDataUpdate::Continuous,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The selected ODR encoding is not available in the selected power mode.
    OdrModeMismatch,
}

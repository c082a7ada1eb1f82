//! Strongly typed parameter enumerations for the LIS3DHTR driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis3dhtr::params::{FullScale, Odr, PowerMode};
//!
//! let odr = Odr::Hz10;
//! let fs = FullScale::G2;
//! let mode = PowerMode::Normal;
//! let _ = (odr, fs, mode);
//! ```

use modular_bitfield::prelude::Specifier;

/// Available output data rate (ODR) selections (`CTRL_REG1[7:4]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 4]
pub enum Odr {
    /// Power-down mode, no output.
    PowerDown = 0b0000,
    /// 1 Hz output data rate.
    Hz1 = 0b0001,
    /// 10 Hz output data rate.
    Hz10 = 0b0010,
    /// 25 Hz output data rate.
    Hz25 = 0b0011,
    /// 50 Hz output data rate.
    Hz50 = 0b0100,
    /// 100 Hz output data rate.
    Hz100 = 0b0101,
    /// 200 Hz output data rate.
    Hz200 = 0b0110,
    /// 400 Hz output data rate.
    Hz400 = 0b0111,
    /// 1.6 kHz output data rate, low-power mode only.
    LowPower1k6 = 0b1000,
    /// 1.344 kHz in normal mode, 5.376 kHz in low-power mode.
    Hz1344 = 0b1001,
}

impl Odr {
    /// Returns the ODR in hertz for the given power mode.
    pub const fn hz(self, mode: PowerMode) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::LowPower1k6 => 1_600,
            Self::Hz1344 => match mode {
                PowerMode::Normal => 1_344,
                PowerMode::LowPower => 5_376,
            },
        }
    }

    /// Indicates whether this encoding is only valid in low-power mode.
    pub const fn requires_low_power(self) -> bool {
        matches!(self, Self::LowPower1k6)
    }
}

/// Power mode selection (`CTRL_REG1.LPen`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum PowerMode {
    /// Normal mode, 10-bit output resolution.
    Normal = 0,
    /// Low-power mode, 8-bit output resolution.
    LowPower = 1,
}

/// Full-scale range selection (`CTRL_REG4.FS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g range.
    G2 = 0b00,
    /// ±4 g range.
    G4 = 0b01,
    /// ±8 g range.
    G8 = 0b10,
    /// ±16 g range.
    G16 = 0b11,
}

impl FullScale {
    /// Returns the full-scale range magnitude in g.
    pub const fn range_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }
}

/// Output register update behaviour (`CTRL_REG4.BDU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum BlockDataUpdate {
    /// Output registers update continuously.
    Continuous = 0,
    /// Output registers hold until both MSB and LSB are read.
    OnRead = 1,
}

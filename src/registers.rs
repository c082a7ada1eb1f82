//! Register map definitions for the LIS3DHTR accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{BlockDataUpdate, FullScale, Odr, PowerMode};

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;

/// Value reported by `WHO_AM_I` on a genuine LIS3DHTR.
pub const EXPECTED_WHO_AM_I: u8 = 0x33;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `CTRL_REG1` register (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Low-power mode enable (bit 3).
    pub power_mode: PowerMode,
    // Output data rate selection (bits 7:4).
    pub odr: Odr,
}

impl From<u8> for Ctrl1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl1> for u8 {
    fn from(value: Ctrl1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG4` register (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl4 {
    // SPI serial interface mode selection (bit 0).
    pub spi_3wire: bool,
    // Self-test mode selection (bits 2:1).
    pub self_test: B2,
    // High-resolution output mode (bit 3).
    pub high_resolution: bool,
    // Full-scale range selection (bits 5:4).
    pub full_scale: FullScale,
    // Big/little endian data selection (bit 6).
    pub big_endian: bool,
    // Block data update behaviour (bit 7).
    pub block_data_update: BlockDataUpdate,
}

impl From<u8> for Ctrl4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl4> for u8 {
    fn from(value: Ctrl4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `STATUS_REG` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub x_data_available: bool,
    // New Y-axis data available (bit 1).
    pub y_data_available: bool,
    // New Z-axis data available (bit 2).
    pub z_data_available: bool,
    // New data available on all enabled axes (bit 3).
    pub xyz_data_available: bool,
    // X-axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis data overrun (bit 6).
    pub z_overrun: bool,
    // Data overrun on all enabled axes (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Ctrl1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for Ctrl4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that the reference power-on byte decodes per the datasheet.
    #[test]
    fn ctrl1_layout_matches_datasheet() {
        let ctrl1 = Ctrl1::from(0x27);
        assert!(ctrl1.x_enable());
        assert!(ctrl1.y_enable());
        assert!(ctrl1.z_enable());
        assert_eq!(ctrl1.power_mode(), PowerMode::Normal);
        assert_eq!(ctrl1.odr(), Odr::Hz10);
    }

    /// Ensures Ctrl4 encodes and decodes as expected across all fields.
    #[test]
    fn ctrl4_roundtrip() {
        let ctrl4 = Ctrl4::new()
            .with_block_data_update(BlockDataUpdate::OnRead)
            .with_full_scale(FullScale::G8)
            .with_high_resolution(true);

        assert_eq!(u8::from(ctrl4), 0b1_0_10_1_00_0);
        let decoded = Ctrl4::from(u8::from(ctrl4));
        assert_eq!(decoded.block_data_update(), BlockDataUpdate::OnRead);
        assert_eq!(decoded.full_scale(), FullScale::G8);
        assert!(decoded.high_resolution());
        assert!(!decoded.big_endian());
    }

    /// Validates that Status bitfields match the datasheet layout.
    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_1001);
        assert!(status.x_data_available());
        assert!(!status.y_data_available());
        assert!(!status.z_data_available());
        assert!(status.xyz_data_available());
        assert!(!status.x_overrun());
        assert!(status.xyz_overrun());
    }
}

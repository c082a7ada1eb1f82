#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::{AccelReading, Lis3dhtr};
pub use crate::error::{Error, Result};

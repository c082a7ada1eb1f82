mod common;

use common::{trans_read, I2cMock, I2cTrans, DEV_ADDR};
use embedded_hal::i2c::ErrorKind;
use lis3dhtr::config::Config;
use lis3dhtr::interface::i2c::SlaveAddr;
use lis3dhtr::{AccelReading, Error, Lis3dhtr};

#[test]
fn read_axes_issues_six_single_byte_reads_low_byte_first() {
    let expectations = [
        trans_read(0x28, 0xFF),
        trans_read(0x29, 0x7F),
        trans_read(0x2A, 0x00),
        trans_read(0x2B, 0x80),
        trans_read(0x2C, 0xFF),
        trans_read(0x2D, 0xFF),
    ];
    let mock = I2cMock::new(&expectations);
    let mut dev = Lis3dhtr::new_i2c(mock, SlaveAddr::Default, Config::default());

    let reading = dev.read_axes().unwrap();
    assert_eq!(
        reading,
        AccelReading {
            x: 32767,
            y: -32768,
            z: -1,
        }
    );

    let (mut i2c, _) = dev.release_i2c();
    i2c.done();
}

#[test]
fn read_axes_decodes_a_resting_sample() {
    // Roughly 1 g on Z at ±2 g full scale, X/Y near zero.
    let expectations = [
        trans_read(0x28, 0x40),
        trans_read(0x29, 0x00),
        trans_read(0x2A, 0xC0),
        trans_read(0x2B, 0xFF),
        trans_read(0x2C, 0x00),
        trans_read(0x2D, 0x40),
    ];
    let mock = I2cMock::new(&expectations);
    let mut dev = Lis3dhtr::new_i2c(mock, SlaveAddr::Default, Config::default());

    let reading = dev.read_axes().unwrap();
    assert_eq!(reading.x, 64);
    assert_eq!(reading.y, -64);
    assert_eq!(reading.z, 16384);

    let (mut i2c, _) = dev.release_i2c();
    i2c.done();
}

#[test]
fn read_axes_surfaces_bus_errors() {
    let expectations =
        [I2cTrans::write_read(DEV_ADDR, vec![0x28], vec![0x00]).with_error(ErrorKind::Other)];
    let mock = I2cMock::new(&expectations);
    let mut dev = Lis3dhtr::new_i2c(mock, SlaveAddr::Default, Config::default());

    assert_eq!(dev.read_axes(), Err(Error::Interface(ErrorKind::Other)));

    let (mut i2c, _) = dev.release_i2c();
    i2c.done();
}

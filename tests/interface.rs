mod common;

use common::{I2cMock, I2cTrans, ALT_ADDR, DEV_ADDR};
use lis3dhtr::interface::i2c::{I2cInterface, SlaveAddr};
use lis3dhtr::interface::Lis3dhtrInterface;

#[test]
fn write_register_frames_address_and_value() {
    let expectations = [I2cTrans::write(DEV_ADDR, vec![0x20, 0x27])];
    let mock = I2cMock::new(&expectations);
    let mut interface = I2cInterface::new(mock, SlaveAddr::Default);

    interface.write_register(0x20, 0x27).unwrap();

    interface.release().done();
}

#[test]
fn read_register_issues_pointer_write_then_single_byte_read() {
    let expectations = [I2cTrans::write_read(DEV_ADDR, vec![0x28], vec![0x5A])];
    let mock = I2cMock::new(&expectations);
    let mut interface = I2cInterface::new(mock, SlaveAddr::Default);

    let value = interface.read_register(0x28).unwrap();
    assert_eq!(value, 0x5A);

    interface.release().done();
}

#[test]
fn slave_address_selection_maps_to_bus_addresses() {
    assert_eq!(SlaveAddr::Default.addr(), DEV_ADDR);
    assert_eq!(SlaveAddr::Alternative.addr(), ALT_ADDR);

    let expectations = [I2cTrans::write(ALT_ADDR, vec![0x23, 0x00])];
    let mock = I2cMock::new(&expectations);
    let mut interface = I2cInterface::new(mock, SlaveAddr::Alternative);
    assert_eq!(interface.address(), ALT_ADDR);

    interface.write_register(0x23, 0x00).unwrap();

    interface.release().done();
}

use embedded_hal_mock as hal;
pub use hal::eh1::delay::NoopDelay;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x18;
pub const ALT_ADDR: u8 = 0x19;

pub fn trans_who_am_i() -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x0F], vec![0x33])
}

pub fn trans_write(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![register, value])
}

pub fn trans_read(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![register], vec![value])
}

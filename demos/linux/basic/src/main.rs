//! Polls a LIS3DHTR on a Linux I2C bus and prints raw axis counts.

use std::thread;
use std::time::Duration;

use linux_embedded_hal::{Delay, I2cdev};

use lis3dhtr::config::Config;
use lis3dhtr::interface::i2c::SlaveAddr;
use lis3dhtr::Lis3dhtr;

const I2C_BUS: &str = "/dev/i2c-1";
const POLL_INTERVAL: Duration = Duration::from_millis(300);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = I2cdev::new(I2C_BUS)?;
    let mut sensor = Lis3dhtr::new_i2c(bus, SlaveAddr::Default, Config::default());

    sensor
        .init(&mut Delay)
        .map_err(|err| format!("sensor initialization failed: {err:?}"))?;

    loop {
        match sensor.read_axes() {
            Ok(reading) => {
                println!("Acceleration in X-Axis : {}", reading.x);
                println!("Acceleration in Y-Axis : {}", reading.y);
                println!("Acceleration in Z-Axis : {}", reading.z);
            }
            Err(err) => eprintln!("read failed: {err:?}"),
        }

        thread::sleep(POLL_INTERVAL);
    }
}

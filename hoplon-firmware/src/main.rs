//! Hoplon - Weapon Console Panel Firmware
//!
//! Main firmware binary for RP2040-based bridge consoles. Drives four
//! charge bank displays hanging off a single I2C bus.
//!
//! Named after the Greek "hoplon" (ὅπλον) meaning "arms" - the
//! weapon banks this console fronts.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, Config as I2cConfig};
use embassy_time::Delay;
use embedded_hal_bus::i2c::RefCellDevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hoplon_drivers::lcd::Hd44780;
use hoplon_drivers::panel::ChargePanel;

use crate::tasks::panel::SharedI2c;

mod channels;
mod config;
mod tasks;

// The display bus must outlive the tasks borrowing it
static I2C_BUS: StaticCell<SharedI2c> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hoplon firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display bus: I2C0 on GPIO4 (SDA) / GPIO5 (SCL), standard mode
    // for the PCF8574 backpacks
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = config::I2C_FREQUENCY_HZ;
    let bus = i2c::I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let bus: &'static SharedI2c = I2C_BUS.init(RefCell::new(bus));
    info!("Display bus initialized");

    // One driver per backpack, all sharing the bus
    let screens =
        config::BANK_ADDRESSES.map(|addr| Hd44780::new(RefCellDevice::new(bus), Delay, addr));
    let panel = ChargePanel::new(screens);

    // Spawn tasks
    spawner.spawn(tasks::panel_task(panel)).unwrap();
    spawner.spawn(tasks::control_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

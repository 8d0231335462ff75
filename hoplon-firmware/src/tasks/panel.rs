//! Panel task
//!
//! Owns the four display drivers and the charge panel state. Drains
//! the command channel, runs the animation, and publishes the latest
//! charge levels for the controller.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Instant, Ticker};
use embedded_hal_bus::i2c::RefCellDevice;

use hoplon_core::traits::DisplayError;
use hoplon_drivers::lcd::Hd44780;
use hoplon_drivers::panel::ChargePanel;

use crate::channels::{PanelCommand, CHARGE_LEVELS, PANEL_COMMANDS};

/// The console's display bus
pub type SharedI2c = RefCell<I2c<'static, I2C0, Blocking>>;

/// One display module on the shared bus
pub type PanelLcd = Hd44780<RefCellDevice<'static, I2c<'static, I2C0, Blocking>>, Delay>;

/// Milliseconds between panel polls
///
/// The panel debounces redraws internally, so polling faster than
/// its frame interval only buys command latency.
const LOOP_INTERVAL_MS: u64 = 10;

/// Panel task - runs the charge display animation
#[embassy_executor::task]
pub async fn panel_task(mut panel: ChargePanel<PanelLcd>) {
    info!("Panel task started");

    match panel.init() {
        Ok(()) => info!("Panel displays initialized"),
        Err(e) => warn!("Panel init failed: {:?}", e),
    }

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(LOOP_INTERVAL_MS));

    loop {
        ticker.next().await;

        // Drain pending commands before the next frame
        while let Ok(cmd) = PANEL_COMMANDS.try_receive() {
            if let Err(e) = apply_command(&mut panel, cmd) {
                warn!("Panel command failed: {:?}", e);
            }
        }

        let now_ms = start.elapsed().as_millis() as u32;
        if let Err(e) = panel.update(now_ms) {
            warn!("Panel update failed: {:?}", e);
        }

        CHARGE_LEVELS.signal(panel.levels());
    }
}

fn apply_command(
    panel: &mut ChargePanel<PanelLcd>,
    cmd: PanelCommand,
) -> Result<(), DisplayError> {
    match cmd {
        PanelCommand::PowerOn => panel.power_on(),
        PanelCommand::PowerOff => panel.power_off(),
        PanelCommand::SetRate { bank, rate } => {
            panel.set_rate(bank, rate);
            Ok(())
        }
        PanelCommand::SetValue { bank, value } => panel.set_value(bank, value),
        PanelCommand::SetName { bank, name } => {
            panel.set_name(bank, name.as_str());
            Ok(())
        }
    }
}

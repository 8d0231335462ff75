//! Console control task
//!
//! Runs the bridge exercise loop: arm the loadout, wait for every
//! bank to charge, hold the ready flash, then fire a volley and
//! start over. Every third volley power-cycles the console instead,
//! exercising the cold-start path.

use defmt::*;
use embassy_time::{Duration, Timer};

use heapless::String;
use hoplon_core::charge::{BANK_COUNT, CHARGE_MAX, NAME_LEN};

use crate::channels::{PanelCommand, CHARGE_LEVELS, PANEL_COMMANDS};
use crate::config::Loadout;

/// How long the READY/FIRE flash holds before the volley
const READY_HOLD: Duration = Duration::from_secs(3);

/// Pause between volleys
const REARM_PAUSE: Duration = Duration::from_secs(1);

/// Volleys between console power cycles
const VOLLEYS_PER_CYCLE: u32 = 3;

/// Control task - scripts the console through charge/fire cycles
#[embassy_executor::task]
pub async fn control_task() {
    info!("Control task started");

    // Arm the exercise loadout, then light the console
    let loadout = Loadout::default();
    for (bank, name) in loadout.names.iter().enumerate() {
        if let Some(name) = name {
            let mut label: String<NAME_LEN> = String::new();
            let _ = label.push_str(name);
            PANEL_COMMANDS
                .send(PanelCommand::SetName { bank, name: label })
                .await;
        }
    }
    for (bank, rate) in loadout.rates.iter().enumerate() {
        if let Some(rate) = *rate {
            PANEL_COMMANDS
                .send(PanelCommand::SetRate { bank, rate })
                .await;
        }
    }
    PANEL_COMMANDS.send(PanelCommand::PowerOn).await;

    let mut volleys = 0u32;

    loop {
        // Wait for every bank to report full charge
        loop {
            let levels = CHARGE_LEVELS.wait().await;
            if levels.iter().all(|&v| v >= CHARGE_MAX) {
                break;
            }
        }
        info!("All banks charged");

        Timer::after(READY_HOLD).await;

        volleys += 1;
        if volleys % VOLLEYS_PER_CYCLE == 0 {
            info!("Volley {}: full power cycle", volleys);
            PANEL_COMMANDS.send(PanelCommand::PowerOff).await;
            Timer::after(REARM_PAUSE).await;
            PANEL_COMMANDS.send(PanelCommand::PowerOn).await;
        } else {
            info!("Volley {}: firing all banks", volleys);
            for bank in 0..BANK_COUNT {
                PANEL_COMMANDS
                    .send(PanelCommand::SetValue { bank, value: 0 })
                    .await;
            }
            Timer::after(REARM_PAUSE).await;
        }
    }
}

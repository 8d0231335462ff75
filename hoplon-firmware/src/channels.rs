//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use heapless::String;
use hoplon_core::charge::{BANK_COUNT, NAME_LEN};

/// Channel capacity for panel commands
const PANEL_CHANNEL_SIZE: usize = 8;

/// Commands accepted by the panel task
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelCommand {
    /// Light the console and start charging
    PowerOn,
    /// Blank the console and dump all charge
    PowerOff,
    /// Change how fast a bank charges
    SetRate { bank: usize, rate: u8 },
    /// Force a bank's charge counter
    SetValue { bank: usize, value: u8 },
    /// Relabel a bank
    SetName { bank: usize, name: String<NAME_LEN> },
}

/// Panel commands from the console controller
pub static PANEL_COMMANDS: Channel<CriticalSectionRawMutex, PanelCommand, PANEL_CHANNEL_SIZE> =
    Channel::new();

/// Latest charge levels, one entry per bank (updated by panel task)
pub static CHARGE_LEVELS: Signal<CriticalSectionRawMutex, [u8; BANK_COUNT]> = Signal::new();

//! Console wiring configuration
//!
//! Compile-time description of how the display modules hang off the
//! I2C bus. Addresses are set by solder jumpers on the backpacks, so
//! a rewired console only needs this file touched.

use hoplon_core::charge::BANK_COUNT;

/// Display bus frequency in Hz
///
/// The PCF8574 tops out at standard mode.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Backpack addresses in presentation order
///
/// The bank number is the array index. The console is wired with the
/// inner modules on 0x23/0x27 and the outer pair on 0x21/0x25;
/// presentation runs the left station then the right, inner module
/// before outer in each.
pub const BANK_ADDRESSES: [u8; BANK_COUNT] = [0x23, 0x21, 0x27, 0x25];

/// Loadout applied by the control task at boot
///
/// `None` entries keep the factory defaults.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Loadout {
    /// Replacement weapon labels per bank
    pub names: [Option<&'static str>; BANK_COUNT],
    /// Replacement charge rates per bank
    pub rates: [Option<u8>; BANK_COUNT],
}

impl Default for Loadout {
    fn default() -> Self {
        // Bank 2 carries torpedoes this exercise, and the EMP
        // charges at half rate
        Self {
            names: [None, None, Some("TORPEDO"), None],
            rates: [None, None, None, Some(1)],
        }
    }
}

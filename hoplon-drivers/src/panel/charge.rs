//! Four-bank weapon charge panel
//!
//! Drives one 16x2 display per weapon bank. Every bank shows its
//! label on the top row and an animated charge bar on the bottom;
//! full banks flash READY/FIRE instead of the bar. Redraws are
//! round-robined so each effective update touches one module at most.

use core::fmt::Write;

use heapless::String;

use hoplon_core::bar::{self, BAR_GLYPHS, GLYPH_FULL};
use hoplon_core::blink::BlinkTimer;
use hoplon_core::charge::{ChargeBank, BANK_COUNT};
use hoplon_core::traits::{CharDisplay, DisplayError};

/// Milliseconds between effective updates
pub const UPDATE_INTERVAL_MS: u32 = 50;

/// Factory weapon labels, one per bank in presentation order
pub const DEFAULT_NAMES: [&str; BANK_COUNT] = ["LASER", "LASER", "LASER", "EMP"];

/// Bottom row with the bar field blanked, used to wipe stale cells
const CHARGE_ROW_BLANK: &str = "CHARGE:         ";

/// Four-bank charge panel controller
///
/// Owns its displays. The array index is the bank number; callers
/// arrange the displays to match the physical console layout.
pub struct ChargePanel<D> {
    screens: [D; BANK_COUNT],
    banks: [ChargeBank; BANK_COUNT],
    blink: BlinkTimer,
    current: usize,
    powered: bool,
    last_update_ms: Option<u32>,
}

impl<D: CharDisplay> ChargePanel<D> {
    /// Create a panel over four displays with the factory loadout
    ///
    /// The panel starts unpowered and at zero charge. Nothing is sent
    /// to the hardware until [`init`](ChargePanel::init) runs.
    pub fn new(screens: [D; BANK_COUNT]) -> Self {
        Self {
            screens,
            banks: core::array::from_fn(|i| ChargeBank::new(DEFAULT_NAMES[i])),
            blink: BlinkTimer::new(),
            current: 0,
            powered: false,
            last_update_ms: None,
        }
    }

    /// Run the startup sequence on every display
    ///
    /// Each module is initialized, flashes a numbered STARTUP banner,
    /// gets the five bar glyphs loaded into CGRAM, and is left dark
    /// and blank with its charge dumped.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let screens = self.screens.iter_mut();
        for (i, (screen, bank)) in screens.zip(&mut self.banks).enumerate() {
            screen.init()?;
            screen.set_backlight(true)?;
            screen.set_cursor(0, 3)?;

            let mut banner: String<16> = String::new();
            // bank index is a single digit
            let _ = write!(banner, "STARTUP {}", i);
            screen.print(&banner)?;

            for (slot, bitmap) in BAR_GLYPHS.iter().enumerate() {
                screen.define_glyph(slot as u8, bitmap)?;
            }

            bank.reset();
            screen.set_backlight(false)?;
            screen.clear()?;
        }
        Ok(())
    }

    /// Advance the animation
    ///
    /// `now_ms` is a free-running millisecond clock; wrap-around is
    /// handled. Calls landing within [`UPDATE_INTERVAL_MS`] of the
    /// last effective update are no-ops, so the panel can be polled
    /// as often as the caller likes. Each effective update advances
    /// the blink timer and, when powered, charges the bank whose
    /// turn it is and redraws its display. A full refresh of the
    /// console takes four effective updates.
    pub fn update(&mut self, now_ms: u32) -> Result<(), DisplayError> {
        if let Some(last) = self.last_update_ms {
            if now_ms.wrapping_sub(last) < UPDATE_INTERVAL_MS {
                return Ok(());
            }
        }
        self.last_update_ms = Some(now_ms);

        self.blink.tick();

        if !self.powered {
            return Ok(());
        }

        self.banks[self.current].charge();
        self.draw(self.current)?;
        self.current = (self.current + 1) % BANK_COUNT;
        Ok(())
    }

    /// Power the console up and resume charging
    ///
    /// Backlights come on; charge counters pick up from wherever
    /// [`power_off`](ChargePanel::power_off) left them, which is
    /// zero. No-op when already powered. Every screen is attempted
    /// even when one errors; the first fault is returned.
    pub fn power_on(&mut self) -> Result<(), DisplayError> {
        if self.powered {
            return Ok(());
        }
        self.powered = true;
        let mut result = Ok(());
        for screen in &mut self.screens {
            result = result.and(screen.set_backlight(true));
        }
        result
    }

    /// Power the console down
    ///
    /// Backlights go off, screens blank, and all charge is dumped.
    /// The rotation pointer and blink phase carry over to the next
    /// power-on. No-op when already off. Charge is dumped before any
    /// bus traffic; the counters read zero even when a display
    /// errors, and every screen is still attempted with the first
    /// fault returned.
    pub fn power_off(&mut self) -> Result<(), DisplayError> {
        if !self.powered {
            return Ok(());
        }
        self.powered = false;
        for bank in &mut self.banks {
            bank.reset();
        }
        let mut result = Ok(());
        for screen in &mut self.screens {
            result = result.and(screen.set_backlight(false));
            result = result.and(screen.clear());
        }
        result
    }

    /// Set a bank's charge rate
    ///
    /// Out-of-range banks are ignored.
    pub fn set_rate(&mut self, bank: usize, rate: u8) {
        if bank < BANK_COUNT {
            self.banks[bank].set_rate(rate);
        }
    }

    /// Force a bank's charge counter, clamped to full
    ///
    /// The bank's bottom row is re-blanked immediately so lowering a
    /// value does not leave stale bar cells behind; the new bar draws
    /// when the rotation next reaches the bank. Out-of-range banks
    /// are ignored.
    pub fn set_value(&mut self, bank: usize, value: u8) -> Result<(), DisplayError> {
        if bank >= BANK_COUNT {
            return Ok(());
        }
        self.banks[bank].set_value(value);

        let screen = &mut self.screens[bank];
        screen.set_cursor(1, 0)?;
        screen.print(CHARGE_ROW_BLANK)
    }

    /// Current charge of a bank, or `None` out of range
    pub fn value(&self, bank: usize) -> Option<u8> {
        self.banks.get(bank).map(|b| b.value())
    }

    /// Relabel a bank, truncating to the visible field
    ///
    /// Out-of-range banks are ignored.
    pub fn set_name(&mut self, bank: usize, name: &str) {
        if bank < BANK_COUNT {
            self.banks[bank].set_name(name);
        }
    }

    /// Whether the console is powered
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Snapshot of all charge counters
    pub fn levels(&self) -> [u8; BANK_COUNT] {
        core::array::from_fn(|i| self.banks[i].value())
    }

    /// Redraw one bank's display
    fn draw(&mut self, index: usize) -> Result<(), DisplayError> {
        let bank = &self.banks[index];
        let screen = &mut self.screens[index];

        screen.set_cursor(0, 0)?;
        screen.print("WEAPON: ")?;
        screen.print(bank.name())?;

        screen.set_cursor(1, 0)?;
        screen.print("CHARGE: ")?;

        if bank.is_full() {
            let text = if self.blink.is_on() {
                "READY   "
            } else {
                "FIRE    "
            };
            screen.print(text)
        } else {
            let seg = bar::segments(bank.value());
            for _ in 0..seg.full {
                screen.write_glyph(GLYPH_FULL)?;
            }
            if let Some(slot) = seg.partial {
                screen.write_glyph(slot)?;
            }
            Ok(())
        }
    }
}

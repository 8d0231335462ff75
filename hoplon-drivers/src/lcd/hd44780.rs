//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack maps its eight port pins onto the LCD control lines:
//! P0=RS, P1=RW, P2=E, P3=backlight, P4-P7=data. The controller runs
//! in 4-bit mode, so every byte goes out as two nibbles latched on
//! the falling edge of E.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use hoplon_core::traits::{CharDisplay, DisplayError};

/// Rows on the panel's modules
pub const ROWS: u8 = 2;
/// Columns on the panel's modules
pub const COLS: u8 = 16;

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// CGRAM slots available on the controller
const GLYPH_SLOTS: u8 = 8;

// PCF8574 port bits
const RS: u8 = 0x01;
const ENABLE: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

/// HD44780 instruction set
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// Entry mode flag: increment cursor, no display shift
    pub const ENTRY_INCREMENT: u8 = 0x02;
    /// Display control flag: display visible, cursor and blink off
    pub const DISPLAY_ON: u8 = 0x04;
    /// Function set flags: two lines, 5x8 font (4-bit bus is bit 4 = 0)
    pub const TWO_LINES_5X8: u8 = 0x08;
}

/// HD44780 driver over a PCF8574 backpack
///
/// Generic over the bus handle and delay source so several modules
/// can share one I2C peripheral through `embedded-hal-bus` wrappers.
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    backlight: bool,
}

impl<I2C: I2c, D: DelayNs> Hd44780<I2C, D> {
    /// Create a driver for the module at `address`
    ///
    /// Nothing is sent on the bus until [`CharDisplay::init`] runs.
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            backlight: false,
        }
    }

    /// Return the cursor to the origin without clearing
    pub fn home(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::HOME)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Blank the panel without losing DDRAM contents
    pub fn display_off(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::DISPLAY_CONTROL)
    }

    /// Undo [`display_off`](Hd44780::display_off)
    pub fn display_on(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)
    }

    fn bus_write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[byte])
            .map_err(|_| DisplayError::Bus)
    }

    /// Put one nibble on P4-P7 and strobe E
    fn write_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), DisplayError> {
        let rs_bit = if rs { RS } else { 0 };
        let backlight = if self.backlight { BACKLIGHT } else { 0 };
        let data = (nibble << 4) | backlight | rs_bit;

        // The controller latches on the falling edge of E
        self.bus_write(data | ENABLE)?;
        self.delay.delay_us(1);
        self.bus_write(data)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8, rs: bool) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4, rs)?;
        self.write_nibble(byte & 0x0F, rs)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_byte(cmd, false)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, true)
    }
}

impl<I2C: I2c, D: DelayNs> CharDisplay for Hd44780<I2C, D> {
    fn init(&mut self) -> Result<(), DisplayError> {
        // The controller needs 40ms+ after power-up before it listens
        self.delay.delay_ms(50);

        // Force 8-bit mode three times, then drop to 4-bit
        self.write_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.write_nibble(0x03, false)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03, false)?;
        self.write_nibble(0x02, false)?;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES_5X8)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        // Clear is the slowest instruction the controller has
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= ROWS || col >= COLS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.data(byte)?;
        }
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot >= GLYPH_SLOTS {
            return Err(DisplayError::InvalidGlyph);
        }
        self.data(slot)
    }

    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError> {
        if slot >= GLYPH_SLOTS {
            return Err(DisplayError::InvalidGlyph);
        }
        self.command(cmd::SET_CGRAM_ADDR | (slot << 3))?;
        for &row in bitmap {
            self.data(row)?;
        }
        // Hand the address counter back to DDRAM so the next data
        // byte lands on screen, not in glyph memory
        self.command(cmd::SET_DDRAM_ADDR)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        // The backlight pin rides every transfer; push one idle byte
        // so the change takes effect immediately
        let byte = if on { BACKLIGHT } else { 0 };
        self.bus_write(byte)
    }
}

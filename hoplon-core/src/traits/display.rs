//! Character display abstraction

/// Errors reported by character display drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction with the display failed
    Bus,
    /// Cursor position outside the character grid
    OutOfBounds,
    /// Glyph slot outside the controller's CGRAM range
    InvalidGlyph,
}

/// Trait for HD44780-class character displays
///
/// Abstracts the 16x2 modules the panel draws on. Cursor positions
/// are zero-based `(row, col)`. Implementations are expected to keep
/// the cursor advancing left to right after each written cell.
pub trait CharDisplay {
    /// Run the controller's power-on initialization sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the screen and return the cursor to the origin
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Write one custom glyph cell at the cursor
    ///
    /// `slot` must have been loaded with [`define_glyph`] first.
    ///
    /// [`define_glyph`]: CharDisplay::define_glyph
    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError>;

    /// Load a 5x8 glyph bitmap into a CGRAM slot
    ///
    /// `bitmap` holds 8 rows top to bottom, the low 5 bits of each
    /// byte being pixel columns with bit 4 leftmost.
    fn define_glyph(&mut self, slot: u8, bitmap: &[u8; 8]) -> Result<(), DisplayError>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;
}

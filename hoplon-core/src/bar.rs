//! Charge bar segmentation
//!
//! Maps a 0-80 charge counter onto character cells: ten units per
//! cell, two units per pixel column. Full cells use the widest glyph
//! and the remainder picks one of four narrower ones, so the lit
//! width always tracks half the counter exactly.

/// Charge units represented by one full character cell
pub const UNITS_PER_CELL: u8 = 10;

/// Charge units represented by one pixel column
pub const UNITS_PER_PIXEL: u8 = 2;

/// CGRAM slot of the full-width bar glyph
pub const GLYPH_FULL: u8 = 4;

/// Glyph bitmaps for the bar, indexed by lit width minus one
///
/// Each glyph is 8 identical rows; the low 5 bits of a row are pixel
/// columns with bit 4 leftmost, so the bars grow from the left edge
/// of the cell. Loaded into CGRAM slots 0-4 at panel init.
pub const BAR_GLYPHS: [[u8; 8]; 5] = [
    [0b10000; 8],
    [0b11000; 8],
    [0b11100; 8],
    [0b11110; 8],
    [0b11111; 8],
];

/// Cell breakdown of a charge value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarSegments {
    /// Number of full-width cells
    pub full: u8,
    /// Glyph slot for the trailing partial cell, if any
    pub partial: Option<u8>,
}

/// Split a charge value into bar cells
pub fn segments(value: u8) -> BarSegments {
    let full = value / UNITS_PER_CELL;
    let px = (value % UNITS_PER_CELL) / UNITS_PER_PIXEL;
    BarSegments {
        full,
        partial: px.checked_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lit_pixels(seg: BarSegments) -> u8 {
        seg.full * 5 + seg.partial.map_or(0, |slot| slot + 1)
    }

    #[test]
    fn test_empty_bar() {
        assert_eq!(segments(0), BarSegments { full: 0, partial: None });
        // One unit rounds down to nothing lit
        assert_eq!(segments(1), BarSegments { full: 0, partial: None });
    }

    #[test]
    fn test_partial_widths() {
        assert_eq!(segments(2), BarSegments { full: 0, partial: Some(0) });
        assert_eq!(segments(4), BarSegments { full: 0, partial: Some(1) });
        assert_eq!(segments(9), BarSegments { full: 0, partial: Some(3) });
    }

    #[test]
    fn test_full_cells() {
        assert_eq!(segments(10), BarSegments { full: 1, partial: None });
        assert_eq!(segments(42), BarSegments { full: 4, partial: Some(0) });
        assert_eq!(segments(80), BarSegments { full: 8, partial: None });
    }

    #[test]
    fn test_glyph_widths_grow_by_one_pixel() {
        for (i, glyph) in BAR_GLYPHS.iter().enumerate() {
            for row in glyph {
                assert_eq!(row.count_ones() as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_glyphs_anchor_left() {
        for glyph in &BAR_GLYPHS {
            for row in glyph {
                assert_ne!(row & 0b10000, 0);
            }
        }
    }

    proptest! {
        #[test]
        fn lit_pixels_track_half_the_value(value in 0u8..=80) {
            prop_assert_eq!(lit_pixels(segments(value)), value / 2);
        }

        #[test]
        fn partial_slot_stays_below_full_glyph(value in 0u8..=80) {
            if let Some(slot) = segments(value).partial {
                prop_assert!(slot < GLYPH_FULL);
            }
        }
    }
}

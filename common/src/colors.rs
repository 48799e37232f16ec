//! Color constants for the ST7789 panel.
//!
//! All colors are `Rgb565`, the panel's native 16-bit format, and are passed
//! to the driver unchanged. The eight base colors come straight from the
//! `RgbColor` trait constants so they match what the driver expects bit for bit.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Base Colors
// =============================================================================

/// Pure black (0, 0, 0). Default background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure white (31, 63, 31). Default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0).
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Cyan (0, 63, 31). Used by the demo greeting.
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Magenta (31, 0, 31).
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

/// Yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Named lookup
// =============================================================================

/// One of the eight base colors, addressable by name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Black,
    Blue,
    White,
    Red,
    Green,
    Cyan,
    Magenta,
    Yellow,
}

impl NamedColor {
    /// Every named color, in table order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Blue,
        Self::White,
        Self::Red,
        Self::Green,
        Self::Cyan,
        Self::Magenta,
        Self::Yellow,
    ];

    /// Upper-case name as used in the color table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::Blue => "BLUE",
            Self::White => "WHITE",
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Cyan => "CYAN",
            Self::Magenta => "MAGENTA",
            Self::Yellow => "YELLOW",
        }
    }

    /// The `Rgb565` value sent to the panel.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Black => BLACK,
            Self::Blue => BLUE,
            Self::White => WHITE,
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Cyan => CYAN,
            Self::Magenta => MAGENTA,
            Self::Yellow => YELLOW,
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|named| named.name().eq_ignore_ascii_case(name))
    }
}

impl From<NamedColor> for Rgb565 {
    fn from(named: NamedColor) -> Self { named.color() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(NamedColor::from_name("CYAN"), Some(NamedColor::Cyan));
        assert_eq!(NamedColor::from_name("magenta"), Some(NamedColor::Magenta));
        assert_eq!(NamedColor::from_name("Orange"), None);
        assert_eq!(NamedColor::from_name(""), None);
    }

    #[test]
    fn test_names_round_trip_through_table() {
        for named in NamedColor::ALL {
            assert_eq!(NamedColor::from_name(named.name()), Some(named));
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in NamedColor::ALL.iter().enumerate() {
            for b in &NamedColor::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{} and {} collide", a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_into_rgb565() {
        let color: Rgb565 = NamedColor::Yellow.into();
        assert_eq!(color, YELLOW);
        assert_eq!(Rgb565::from(NamedColor::Black), Rgb565::new(0, 0, 0));
    }
}

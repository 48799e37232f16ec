//! Board wiring and panel configuration.
//!
//! Pin numbers are RP2040 GPIO numbers. The panel is wired to SPI1:
//!
//! - Backlight: GPIO10
//! - Reset: GPIO11
//! - DC: GPIO12 (SPI1 RX pin, used as plain GPIO)
//! - CS: GPIO13 (SPI1 CSn pin, driven as GPIO)
//! - CLK: GPIO14 (SPI1 SCK)
//! - MOSI: GPIO15 (SPI1 TX)

use embedded_graphics::geometry::Size;

use crate::layout::WrapMode;

// =============================================================================
// Wiring
// =============================================================================

/// SPI peripheral index the panel is attached to.
pub const SPI_BUS: u8 = 1;

/// Backlight enable pin (active high).
pub const BACKLIGHT_PIN: u8 = 10;

/// Panel reset pin (active low).
pub const RESET_PIN: u8 = 11;

/// Data/command select pin.
pub const DC_PIN: u8 = 12;

/// Chip-select pin.
pub const CS_PIN: u8 = 13;

/// SPI clock pin.
pub const CLK_PIN: u8 = 14;

/// SPI data-out pin.
pub const DIN_PIN: u8 = 15;

// =============================================================================
// Panel
// =============================================================================

/// Native panel width in pixels (portrait, before rotation).
pub const PANEL_WIDTH: u32 = 240;

/// Native panel height in pixels (portrait, before rotation).
pub const PANEL_HEIGHT: u32 = 320;

/// SPI clock. 62.5 MHz is the ST7789 datasheet maximum.
pub const SPI_FREQUENCY_HZ: u32 = 62_500_000;

/// Panel rotation in quarter turns clockwise.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Native portrait orientation.
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a quarter-turn count (0 = normal, 1 = 90°, 2 = 180°, 3 = 270°).
    /// Values wrap modulo 4.
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// True when width and height trade places.
    #[inline]
    pub const fn swaps_axes(self) -> bool { matches!(self, Self::Deg90 | Self::Deg270) }

    /// Screen size seen by drawing code for a panel of native size `panel`.
    pub const fn apply(
        self,
        panel: Size,
    ) -> Size {
        if self.swaps_axes() {
            Size::new(panel.height, panel.width)
        } else {
            panel
        }
    }
}

/// Runtime panel configuration, defaulting to the constants above.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LcdConfig {
    /// Native panel size (before rotation).
    pub panel: Size,
    pub rotation: Rotation,
    /// Default wrap mode for `Lcd::print`.
    pub wrap: WrapMode,
    /// The ST7789 modules this targets need inverted colors.
    pub invert_colors: bool,
    pub spi_frequency_hz: u32,
}

impl LcdConfig {
    /// Configuration matching the board wiring, landscape orientation.
    pub const fn new() -> Self {
        Self {
            panel: Size::new(PANEL_WIDTH, PANEL_HEIGHT),
            rotation: Rotation::Deg90,
            wrap: WrapMode::Word,
            invert_colors: true,
            spi_frequency_hz: SPI_FREQUENCY_HZ,
        }
    }

    /// Drawable size after rotation.
    #[inline]
    pub const fn screen_size(&self) -> Size { self.rotation.apply(self.panel) }
}

impl Default for LcdConfig {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_are_unique() {
        let pins = [BACKLIGHT_PIN, RESET_PIN, DC_PIN, CS_PIN, CLK_PIN, DIN_PIN];
        for (i, a) in pins.iter().enumerate() {
            assert!(!pins[i + 1..].contains(a), "GPIO{a} assigned twice");
        }
    }

    #[test]
    fn test_rotation_from_quarter_turns() {
        assert_eq!(Rotation::from_quarter_turns(0), Rotation::Deg0);
        assert_eq!(Rotation::from_quarter_turns(1), Rotation::Deg90);
        assert_eq!(Rotation::from_quarter_turns(3), Rotation::Deg270);
        assert_eq!(Rotation::from_quarter_turns(6), Rotation::Deg180);
    }

    #[test]
    fn test_rotation_swaps_axes() {
        let panel = Size::new(240, 320);
        assert_eq!(Rotation::Deg0.apply(panel), panel);
        assert_eq!(Rotation::Deg180.apply(panel), panel);
        assert_eq!(Rotation::Deg90.apply(panel), Size::new(320, 240));
        assert_eq!(Rotation::Deg270.apply(panel), Size::new(320, 240));
    }

    #[test]
    fn test_default_config_is_landscape() {
        let config = LcdConfig::default();
        assert_eq!(config.panel, Size::new(PANEL_WIDTH, PANEL_HEIGHT));
        assert_eq!(config.screen_size(), Size::new(320, 240));
        assert_eq!(config.wrap, WrapMode::Word);
        assert_eq!(config.spi_frequency_hz, 62_500_000);
    }
}

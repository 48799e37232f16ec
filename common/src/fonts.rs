//! Fixed-width fonts and the glyph metrics layout needs.
//!
//! Layout only ever reads two numbers from a font: how far the cursor moves
//! per glyph and how tall a line is. [`FontMetrics`] captures exactly that so
//! the wrapping arithmetic can be exercised without any bitmap data.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_9X18_BOLD, FONT_10X20};
use profont::PROFONT_24_POINT;

/// Glyph cell dimensions of a fixed-width font.
pub trait FontMetrics {
    /// Horizontal advance per glyph in pixels.
    fn glyph_width(&self) -> u32;

    /// Line height in pixels.
    fn glyph_height(&self) -> u32;
}

/// Advance includes the inter-character spacing, so `n` glyphs always occupy
/// `n * glyph_width()` pixels of cursor travel.
impl FontMetrics for MonoFont<'_> {
    #[inline]
    fn glyph_width(&self) -> u32 { self.character_size.width + self.character_spacing }

    #[inline]
    fn glyph_height(&self) -> u32 { self.character_size.height }
}

/// Bare glyph size, for layout without a concrete font.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontSize {
    pub width: u32,
    pub height: u32,
}

impl FontSize {
    pub const fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self { width, height }
    }
}

impl FontMetrics for FontSize {
    #[inline]
    fn glyph_width(&self) -> u32 { self.width }

    #[inline]
    fn glyph_height(&self) -> u32 { self.height }
}

// =============================================================================
// Basic font set
// =============================================================================

/// Large font (`ProFont` 24pt).
pub const LARGE_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Normal font (10x20).
pub const NORMAL_FONT: &MonoFont<'static> = &FONT_10X20;

/// Bold font (9x18 bold).
pub const BOLD_FONT: &MonoFont<'static> = &FONT_9X18_BOLD;

/// Small font (6x10).
pub const SMALL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Extra small font (5x8).
pub const EXTRA_SMALL_FONT: &MonoFont<'static> = &FONT_5X8;

/// A font with a display name.
#[derive(Clone, Copy)]
pub struct NamedFont {
    pub name: &'static str,
    pub font: &'static MonoFont<'static>,
}

/// Logged by name; glyph data has no `Format` impl.
#[cfg(feature = "defmt")]
impl defmt::Format for NamedFont {
    fn format(
        &self,
        fmt: defmt::Formatter,
    ) {
        defmt::write!(fmt, "NamedFont {{ name: {=str} }}", self.name);
    }
}

/// Basic fonts, tallest first.
pub const BASIC_FONTS: [NamedFont; 5] = [
    NamedFont { name: "large_font", font: LARGE_FONT },
    NamedFont { name: "normal_font", font: NORMAL_FONT },
    NamedFont { name: "bold_font", font: BOLD_FONT },
    NamedFont { name: "small_font", font: SMALL_FONT },
    NamedFont { name: "extra_small_font", font: EXTRA_SMALL_FONT },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_font_metrics() {
        assert_eq!(SMALL_FONT.glyph_width(), 6);
        assert_eq!(SMALL_FONT.glyph_height(), 10);
        assert_eq!(NORMAL_FONT.glyph_width(), 10);
        assert_eq!(NORMAL_FONT.glyph_height(), 20);
    }

    #[test]
    fn test_metrics_include_spacing() {
        let font = PROFONT_24_POINT;
        assert_eq!(
            font.glyph_width(),
            font.character_size.width + font.character_spacing
        );
    }

    #[test]
    fn test_basic_fonts_shrink_in_height() {
        for pair in BASIC_FONTS.windows(2) {
            assert!(
                pair[0].font.glyph_height() > pair[1].font.glyph_height(),
                "{} is not taller than {}",
                pair[0].name,
                pair[1].name
            );
        }
        assert_eq!(BASIC_FONTS[0].name, "large_font");
        assert_eq!(BASIC_FONTS[4].name, "extra_small_font");
    }

    #[test]
    fn test_font_size_metrics() {
        let size = FontSize::new(16, 32);
        assert_eq!(size.glyph_width(), 16);
        assert_eq!(size.glyph_height(), 32);
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_font_types_are_loggable() {
        fn loggable<T: defmt::Format>() {}
        loggable::<FontSize>();
        loggable::<NamedFont>();
    }
}

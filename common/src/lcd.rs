//! Text helper wrapped around an ST7789 draw target.
//!
//! [`Lcd`] owns the panel driver (anything implementing
//! `DrawTarget<Color = Rgb565>`) and the backlight pin. Drawing is delegated
//! to `embedded-graphics`; this type only decides where text goes.

use core::convert::Infallible;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::colors::{BLACK, WHITE};
use crate::layout::{LayoutSummary, WrapMode, center_origin, layout_text};

/// Foreground and background colors for a text call.
///
/// Text is always drawn with a background so re-drawn strings overwrite
/// whatever was underneath.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextColors {
    pub fg: Rgb565,
    pub bg: Rgb565,
}

impl TextColors {
    pub const fn new(
        fg: Rgb565,
        bg: Rgb565,
    ) -> Self {
        Self { fg, bg }
    }
}

impl Default for TextColors {
    /// White on black.
    fn default() -> Self { Self::new(WHITE, BLACK) }
}

/// Backlight stand-in for panels whose backlight is hard-wired on.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoBacklight;

impl ErrorType for NoBacklight {
    type Error = Infallible;
}

impl OutputPin for NoBacklight {
    fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }

    fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

/// ST7789 panel with text helpers.
pub struct Lcd<D, BL> {
    display: D,
    backlight: BL,
    wrap: WrapMode,
}

impl<D, BL> Lcd<D, BL>
where
    D: DrawTarget<Color = Rgb565>,
    BL: OutputPin,
{
    /// Wrap an initialized display. `wrap` is the mode used by [`Lcd::print`].
    pub fn new(
        display: D,
        backlight: BL,
        wrap: WrapMode,
    ) -> Self {
        Self {
            display,
            backlight,
            wrap,
        }
    }

    /// Drawable width in pixels (after rotation).
    #[inline]
    pub fn screen_width(&self) -> u32 { self.display.bounding_box().size.width }

    /// Drawable height in pixels (after rotation).
    #[inline]
    pub fn screen_height(&self) -> u32 { self.display.bounding_box().size.height }

    #[inline]
    pub fn screen_size(&self) -> Size { self.display.bounding_box().size }

    pub fn screen_center(&self) -> Point {
        Point::new((self.screen_width() / 2) as i32, (self.screen_height() / 2) as i32)
    }

    #[inline]
    pub fn wrap_mode(&self) -> WrapMode { self.wrap }

    pub fn set_wrap_mode(
        &mut self,
        wrap: WrapMode,
    ) {
        self.wrap = wrap;
    }

    /// Draw `text` with its first glyph's top-left corner at `position`,
    /// wrapping at the right screen edge according to `wrap`.
    pub fn text(
        &mut self,
        font: &MonoFont<'_>,
        text: &str,
        position: Point,
        colors: TextColors,
        wrap: WrapMode,
    ) -> Result<LayoutSummary, D::Error> {
        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(colors.fg)
            .background_color(colors.bg)
            .build();
        let right_edge = self.screen_width() as i32;
        let display = &mut self.display;

        layout_text(text, font, position, right_edge, wrap, |unit, at| {
            Text::with_baseline(unit, at, style, Baseline::Top)
                .draw(display)
                .map(|_| ())
        })
    }

    /// [`Lcd::text`] in white on black using the stored wrap mode.
    pub fn print(
        &mut self,
        font: &MonoFont<'_>,
        text: &str,
        position: Point,
    ) -> Result<LayoutSummary, D::Error> {
        self.text(font, text, position, TextColors::default(), self.wrap)
    }

    /// Draw `text` centered on the screen. `xpos` / `ypos` pin either
    /// coordinate instead of centering along that axis.
    pub fn center_text(
        &mut self,
        font: &MonoFont<'_>,
        text: &str,
        xpos: Option<i32>,
        ypos: Option<i32>,
        colors: TextColors,
        wrap: WrapMode,
    ) -> Result<LayoutSummary, D::Error> {
        let origin = center_origin(text, font, self.screen_size(), xpos, ypos);
        self.text(font, text, origin, colors, wrap)
    }

    /// Fill the whole screen with `color`.
    pub fn fill(
        &mut self,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        self.display.clear(color)
    }

    /// Blank the whole screen to `color`, usually [`BLACK`].
    pub fn clear_screen(
        &mut self,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        self.fill(color)
    }

    /// Turn the backlight on. Does not re-initialize the panel.
    pub fn on(&mut self) -> Result<(), BL::Error> { self.backlight.set_high() }

    /// Turn the backlight off. Panel contents are kept.
    pub fn off(&mut self) -> Result<(), BL::Error> { self.backlight.set_low() }

    #[inline]
    pub fn display(&self) -> &D { &self.display }

    #[inline]
    pub fn display_mut(&mut self) -> &mut D { &mut self.display }

    /// Give back the display and backlight pin.
    pub fn release(self) -> (D, BL) { (self.display, self.backlight) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{CYAN, GREEN, RED};
    use crate::fonts::SMALL_FONT;

    /// Backlight double recording the last level written.
    #[derive(Default)]
    struct FakePin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    fn lcd() -> Lcd<MockDisplay<Rgb565>, FakePin> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        Lcd::new(display, FakePin::default(), WrapMode::Word)
    }

    #[test]
    fn test_screen_dimensions() {
        let lcd = lcd();
        assert_eq!(lcd.screen_width(), 64);
        assert_eq!(lcd.screen_height(), 64);
        assert_eq!(lcd.screen_size(), Size::new(64, 64));
        assert_eq!(lcd.screen_center(), Point::new(32, 32));
    }

    #[test]
    fn test_text_draws_glyph_cells() {
        let mut lcd = lcd();
        let summary = lcd
            .text(SMALL_FONT, "Hi", Point::new(4, 8), TextColors::default(), WrapMode::Off)
            .unwrap();
        assert_eq!(summary.lines, 1);
        assert_eq!(
            lcd.display().affected_area(),
            Rectangle::new(Point::new(4, 8), Size::new(12, 10))
        );
    }

    #[test]
    fn test_text_wraps_at_screen_edge() {
        let mut lcd = lcd();
        // 64 px / 6 px glyphs: 10 glyphs per line
        let summary = lcd
            .text(SMALL_FONT, "abcdef ghijkl", Point::zero(), TextColors::default(), WrapMode::Word)
            .unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.end, Point::new(36, 10));
        assert_eq!(
            lcd.display().affected_area(),
            Rectangle::new(Point::zero(), Size::new(42, 20))
        );
    }

    #[test]
    fn test_print_uses_stored_wrap_mode() {
        let mut lcd = lcd();
        assert_eq!(lcd.wrap_mode(), WrapMode::Word);
        let summary = lcd.print(SMALL_FONT, "one two three", Point::zero()).unwrap();
        assert_eq!(summary.lines, 2);

        lcd.set_wrap_mode(WrapMode::Char);
        let summary = lcd.print(SMALL_FONT, "one two three", Point::new(0, 30)).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.end, Point::new(18, 40));
    }

    #[test]
    fn test_center_text() {
        let mut lcd = lcd();
        let colors = TextColors::new(CYAN, BLACK);
        lcd.center_text(SMALL_FONT, "Hi", None, None, colors, WrapMode::Word).unwrap();
        // x = 32 - 12 / 2, y = 32 - 10 / 2
        assert_eq!(
            lcd.display().affected_area(),
            Rectangle::new(Point::new(26, 27), Size::new(12, 10))
        );
    }

    #[test]
    fn test_center_text_pinned_row() {
        let mut lcd = lcd();
        lcd.center_text(SMALL_FONT, "abcd", None, Some(2), TextColors::default(), WrapMode::Off)
            .unwrap();
        assert_eq!(
            lcd.display().affected_area(),
            Rectangle::new(Point::new(20, 2), Size::new(24, 10))
        );
    }

    #[test]
    fn test_text_uses_colors() {
        let mut lcd = lcd();
        lcd.text(SMALL_FONT, " ", Point::zero(), TextColors::new(WHITE, RED), WrapMode::Off)
            .unwrap();
        assert_eq!(lcd.display().get_pixel(Point::new(0, 0)), Some(RED));
        assert_eq!(lcd.display().get_pixel(Point::new(6, 0)), None);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut lcd = lcd();
        lcd.fill(RED).unwrap();
        assert_eq!(lcd.display().get_pixel(Point::new(63, 63)), Some(RED));
        lcd.clear_screen(BLACK).unwrap();
        assert_eq!(lcd.display().get_pixel(Point::new(10, 10)), Some(BLACK));
        lcd.clear_screen(GREEN).unwrap();
        assert_eq!(lcd.display().get_pixel(Point::new(0, 0)), Some(GREEN));
    }

    #[test]
    fn test_backlight_on_off() {
        let mut lcd = lcd();
        lcd.on().unwrap();
        lcd.off().unwrap();
        lcd.on().unwrap();
        let (_, pin) = lcd.release();
        assert!(pin.high);
        assert_eq!(pin.writes, 3);
    }

    #[test]
    fn test_no_backlight_is_noop() {
        let mut lcd = Lcd::new(MockDisplay::<Rgb565>::new(), NoBacklight, WrapMode::Off);
        assert!(lcd.on().is_ok());
        assert!(lcd.off().is_ok());
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_text_colors_are_loggable() {
        fn loggable<T: defmt::Format>() {}
        loggable::<TextColors>();
    }
}

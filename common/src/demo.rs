//! Demo screens shared by the firmware and the simulator.
//!
//! Each function draws one complete frame and returns; the callers own the
//! delays between frames (`embassy_time::Timer` on the Pico, `thread::sleep`
//! on the desktop).

use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::colors::{BLACK, CYAN};
use crate::fonts::{BASIC_FONTS, EXTRA_SMALL_FONT, FontMetrics, LARGE_FONT};
use crate::layout::{LayoutSummary, WrapMode};
use crate::lcd::{Lcd, TextColors};

/// Sentence used by every demo frame.
pub const EXAMPLE_TEXT: &str = "Hello World! I hope you are doing great";

/// Cyan on black.
pub const EXAMPLE_COLORS: TextColors = TextColors::new(CYAN, BLACK);

/// Row the greeting starts on.
pub const GREETING_Y: i32 = 60;

/// How long the greeting stays up.
pub const GREETING_HOLD_MS: u64 = 2000;

/// How long each font sample stays up.
pub const FONT_HOLD_MS: u64 = 3000;

/// Clear the screen and draw the example sentence centered and word-wrapped
/// in the large font.
pub fn draw_greeting<D, BL>(lcd: &mut Lcd<D, BL>) -> Result<LayoutSummary, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    BL: OutputPin,
{
    lcd.fill(BLACK)?;
    lcd.center_text(LARGE_FONT, EXAMPLE_TEXT, None, Some(GREETING_Y), EXAMPLE_COLORS, WrapMode::Word)
}

/// Caption for font sample `index` (zero-based), e.g. `"Font 2/5: normal_font"`.
pub fn font_caption(index: usize) -> String<48> {
    let mut caption = String::new();
    if let Some(named) = BASIC_FONTS.get(index) {
        let _ = write!(caption, "Font {}/{}: {}", index + 1, BASIC_FONTS.len(), named.name);
    }
    caption
}

/// Clear the screen and show the example sentence in basic font `index`,
/// with a caption along the bottom edge. Out-of-range indices wrap around.
pub fn draw_font_sample<D, BL>(
    lcd: &mut Lcd<D, BL>,
    index: usize,
) -> Result<LayoutSummary, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    BL: OutputPin,
{
    let index = index % BASIC_FONTS.len();
    let named = BASIC_FONTS[index];

    lcd.clear_screen(BLACK)?;
    let summary = lcd.center_text(named.font, EXAMPLE_TEXT, None, None, EXAMPLE_COLORS, WrapMode::Word)?;

    let caption_y = lcd.screen_height() as i32 - EXTRA_SMALL_FONT.glyph_height() as i32;
    lcd.text(
        EXTRA_SMALL_FONT,
        &font_caption(index),
        Point::new(0, caption_y),
        TextColors::default(),
        WrapMode::Off,
    )?;

    Ok(summary)
}

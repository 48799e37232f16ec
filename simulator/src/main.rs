//! ST7789 text demo on the desktop.
//!
//! Runs the same frames as the firmware in an `embedded-graphics-simulator`
//! window sized like the rotated panel.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod timing;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use st7789_text::colors::BLACK;
use st7789_text::demo::{FONT_HOLD_MS, GREETING_HOLD_MS, draw_font_sample, draw_greeting, font_caption};
use st7789_text::fonts::BASIC_FONTS;
use st7789_text::{Lcd, LcdConfig, NoBacklight};

use crate::timing::FRAME_TIME;

fn main() {
    let config = LcdConfig::default();
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(config.screen_size());
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("ST7789 Text Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut lcd = Lcd::new(display, NoBacklight, config.wrap);

    if let Ok(summary) = draw_greeting(&mut lcd) {
        println!("Greeting: {} lines", summary.lines);
    }
    if !hold(&mut window, lcd.display(), Duration::from_millis(GREETING_HOLD_MS)) {
        return;
    }

    println!("Basic fonts example:");
    for index in (0..BASIC_FONTS.len()).cycle() {
        if let Ok(summary) = draw_font_sample(&mut lcd, index) {
            println!("{} ({} lines)", font_caption(index), summary.lines);
        }
        if !hold(&mut window, lcd.display(), Duration::from_millis(FONT_HOLD_MS)) {
            return;
        }
    }
}

/// Keep the window responsive for `duration`. Returns `false` once the
/// window has been closed.
fn hold(
    window: &mut Window,
    display: &SimulatorDisplay<Rgb565>,
    duration: Duration,
) -> bool {
    let start = Instant::now();
    while start.elapsed() < duration {
        window.update(display);
        if window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return false;
        }
        thread::sleep(FRAME_TIME);
    }
    true
}

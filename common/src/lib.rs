//! Text helpers for ST7789 SPI LCDs.
//!
//! The panel driver itself (`mipidsi` on hardware, the `embedded-graphics`
//! simulator on the desktop) does all the pixel work. This crate adds the
//! pieces it lacks:
//!
//! - [`colors`]: the eight base `Rgb565` colors and lookup by name
//! - [`config`]: board wiring, panel size and rotation
//! - [`fonts`]: glyph metrics and the basic font set
//! - [`layout`]: word/character wrapping and centering arithmetic
//! - [`lcd`]: [`Lcd`], the display + backlight wrapper with text helpers
//! - [`demo`]: demo frames shared by the firmware and the simulator
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p st7789-text
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`); the firmware uses the crate
//! as `no_std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod demo;
pub mod fonts;
pub mod layout;
pub mod lcd;

// Re-export commonly used items
pub use config::{LcdConfig, Rotation};
pub use fonts::{FontMetrics, FontSize};
pub use layout::{LayoutSummary, WrapMode, center_origin, layout_text, text_width};
pub use lcd::{Lcd, NoBacklight, TextColors};

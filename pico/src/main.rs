//! ST7789 text demo firmware for Raspberry Pi Pico (RP2040).
//!
//! Brings up the panel on SPI1, shows the centered greeting, then cycles the
//! example sentence through every basic font.

#![no_std]
#![no_main]

mod display;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use st7789_text::config::{BACKLIGHT_PIN, CLK_PIN, CS_PIN, DC_PIN, DIN_PIN, RESET_PIN, SPI_BUS};
use st7789_text::demo::{FONT_HOLD_MS, GREETING_HOLD_MS, draw_font_sample, draw_greeting, font_caption};
use st7789_text::fonts::BASIC_FONTS;
use st7789_text::{Lcd, LcdConfig};
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"st7789-text"),
    embassy_rp::binary_info::rp_program_description!(c"ST7789 text layout demo"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ST7789 text demo starting...");

    let p = embassy_rp::init(Default::default());
    let config = LcdConfig::default();

    info!(
        "SPI{} @ {} Hz: SCK=GP{} MOSI=GP{} CS=GP{} DC=GP{} RST=GP{} BL=GP{}",
        SPI_BUS,
        config.spi_frequency_hz,
        CLK_PIN,
        DIN_PIN,
        CS_PIN,
        DC_PIN,
        RESET_PIN,
        BACKLIGHT_PIN
    );

    // Keep in sync with st7789_text::config
    let backlight = Output::new(p.PIN_10, Level::Low);
    let reset = Output::new(p.PIN_11, Level::High);
    let dc = Output::new(p.PIN_12, Level::Low);
    let cs = Output::new(p.PIN_13, Level::High);

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_14, p.PIN_15, display_spi_config(&config));

    let panel = init_display(spi, cs, dc, reset, &config);
    let mut lcd = Lcd::new(panel, backlight, config.wrap);

    let size = lcd.screen_size();
    info!("Display initialized: {}x{} ({})", size.width, size.height, config.rotation);

    // Backlight last so the uninitialized panel is never visible
    if lcd.on().is_err() {
        warn!("Backlight pin write failed");
    }

    match draw_greeting(&mut lcd) {
        Ok(summary) => info!("Greeting: {} lines", summary.lines),
        Err(_) => warn!("Greeting draw failed"),
    }
    Timer::after_millis(GREETING_HOLD_MS).await;

    info!("Basic fonts example:");
    let mut index = 0usize;
    loop {
        let caption = font_caption(index);
        match draw_font_sample(&mut lcd, index) {
            Ok(summary) => info!("{} ({} lines)", caption.as_str(), summary.lines),
            Err(_) => warn!("{}: draw failed", caption.as_str()),
        }

        Timer::after_millis(FONT_HOLD_MS).await;
        index = (index + 1) % BASIC_FONTS.len();
    }
}

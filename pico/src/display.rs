//! ST7789 panel on SPI1 of the RP2040.
//!
//! Pin mapping (see `st7789_text::config`):
//! - Backlight: GPIO10
//! - Reset: GPIO11
//! - DC: GPIO12
//! - CS: GPIO13
//! - CLK: GPIO14 (SPI1 SCK)
//! - MOSI: GPIO15 (SPI1 TX)

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::Builder;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation as PanelRotation};
use st7789_text::{LcdConfig, Rotation};

/// ST7789 driver type with a hardware reset pin.
pub type St7789Display<'d> = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, embedded_hal_bus::spi::NoDelay>, Output<'d>>,
    ST7789,
    Output<'d>,
>;

/// Construct and initialize the ST7789 driver.
///
/// Pulses reset, programs orientation and inversion, and leaves the panel on.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    reset: Output<'d>,
    config: &LcdConfig,
) -> St7789Display<'d> {
    // Create SPI device with chip select
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    // Create display interface
    let di = SPIInterface::new(spi_device, dc);

    let inversion = if config.invert_colors {
        ColorInversion::Inverted
    } else {
        ColorInversion::Normal
    };

    // Display size is the native (portrait) panel; mipidsi swaps axes on rotation
    Builder::new(ST7789, di)
        .display_size(config.panel.width as u16, config.panel.height as u16)
        .orientation(Orientation::new().rotate(panel_rotation(config.rotation)))
        .invert_colors(inversion)
        .reset_pin(reset)
        .init(&mut embassy_time::Delay)
        .unwrap()
}

fn panel_rotation(rotation: Rotation) -> PanelRotation {
    match rotation {
        Rotation::Deg0 => PanelRotation::Deg0,
        Rotation::Deg90 => PanelRotation::Deg90,
        Rotation::Deg180 => PanelRotation::Deg180,
        Rotation::Deg270 => PanelRotation::Deg270,
    }
}

/// SPI configuration for the ST7789 display.
pub fn display_spi_config(config: &LcdConfig) -> SpiConfig {
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = config.spi_frequency_hz;
    spi_config
}

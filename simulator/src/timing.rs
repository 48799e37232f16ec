//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` library cannot, so
//! they live here rather than in `st7789_text::demo`.

use std::time::Duration;

/// Window refresh interval while a demo frame is held (~50 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(20);

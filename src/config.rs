//! Node configuration.
//!
//! Wire-level limits are compile-time constants; per-board settings live in
//! [`NodeConfig`].

use embassy_time::Duration;

use crate::color::Rgb;

/// Number of pixels a single command can address.
pub const MAX_LEDS: usize = 30;

/// Number of color channels per pixel group (R, G, B).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Longest command line kept by the reader.
///
/// Enough for `MAX_LEDS` groups of `255,255,255/`.
pub const MAX_LINE_LEN: usize = 384;

/// Terminates every line in both directions.
pub const LINE_DELIMITER: u8 = b'\n';

/// Serial baud rate expected by the controller.
pub const BAUD_RATE: u32 = 9600;

/// Upper bound on how long a single line read may take.
pub const DEFAULT_LINE_TIMEOUT: Duration = Duration::from_millis(100);

/// Minimum time between accepted edges on one sensor.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Sent upstream once the node has finished booting.
pub const READY_MESSAGE: &str = "Setup Complete";

/// Boot stage shown once the LED strip is ready
pub const BOOT_STAGE_STRIP: usize = 1;
/// Boot stage shown once the ball sensor is ready
pub const BOOT_STAGE_BALL: usize = 2;
/// Boot stage shown once the laser sensor is ready
pub const BOOT_STAGE_LASER: usize = 5;

/// Default color of the boot progress pixels
pub const DEFAULT_BOOT_COLOR: Rgb = Rgb { r: 0, g: 0, b: 64 };

/// Runtime configuration for the node
#[derive(Debug, Clone, Copy)]
pub struct NodeConfig {
    /// Upper bound on a single line read
    pub line_timeout: Duration,
    /// Color used to show boot progress
    pub boot_color: Rgb,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            line_timeout: DEFAULT_LINE_TIMEOUT,
            boot_color: DEFAULT_BOOT_COLOR,
        }
    }
}

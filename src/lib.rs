#![no_std]

pub mod color;
pub mod config;
pub mod latch;
pub mod link;
pub mod node;
pub mod parser;
pub mod pixel_table;
pub mod renderer;
pub mod sensor;
pub mod strip;

pub use config::{MAX_LEDS, MAX_LINE_LEN, NodeConfig};
pub use latch::EventLatch;
pub use link::{Clock, Line, SerialLink, SystemClock};
pub use node::{CycleReport, Node, NodeParts};
pub use parser::{parse, parse_into};
pub use pixel_table::PixelTable;
pub use renderer::{render, show_boot_stage};
pub use sensor::{EdgeSource, EventKind, Sensor};
pub use strip::SmartLedStrip;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip trait
///
/// Implement this trait to support different hardware platforms.
/// The node is generic over this trait.
pub trait LedStrip {
    /// Turn every pixel off
    fn blackout(&mut self);

    /// Set one pixel, in the strip's native channel order
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Push the pending pixels to the LEDs
    fn draw(&mut self);
}

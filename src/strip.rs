//! [`LedStrip`] adapter for `smart-leds` drivers.

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedStrip;
use crate::color::{BLACK, Rgb};

/// Buffered strip on top of any `smart-leds` writer.
///
/// Pixel updates go to an in-memory frame buffer; [`LedStrip::draw`] sends the
/// whole buffer to the writer in one go.
///
/// N is the number of LEDs in the strip
pub struct SmartLedStrip<W, const N: usize> {
    writer: W,
    frame_buffer: [Rgb; N],
}

impl<W, const N: usize> SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a new strip with every pixel off
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame_buffer: [BLACK; N],
        }
    }

    /// Pending frame, as it will be written on the next draw
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Get a reference to the writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> LedStrip for SmartLedStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn blackout(&mut self) {
        self.frame_buffer = [BLACK; N];
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame_buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn draw(&mut self) {
        if self.writer.write(self.frame_buffer.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("strip: failed to write frame");
        }
    }
}

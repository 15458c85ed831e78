use crate::color::{BLACK, Rgb};
use crate::config::CHANNELS_PER_PIXEL;

/// Fixed-capacity table of pixel colors decoded from one command line.
///
/// Colors are stored in the downlink channel order (R, G, B). Only the first
/// [`len`](Self::len) entries are meaningful.
///
/// N is the maximum number of pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelTable<const N: usize> {
    pixels: [Rgb; N],
    len: usize,
}

impl<const N: usize> PixelTable<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            len: 0,
        }
    }

    /// Zero every entry and reset the length
    pub fn clear(&mut self) {
        self.pixels = [BLACK; N];
        self.len = 0;
    }

    /// Number of decoded pixels
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Decoded pixels, in index order
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Get the pixel at `index`, if it was decoded
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.as_slice().get(index).copied()
    }

    /// Mark the pixel at `index` as present, extending the length to cover it.
    ///
    /// Returns `false` if `index` is outside the table.
    pub fn touch(&mut self, index: usize) -> bool {
        if index >= N {
            return false;
        }
        if index >= self.len {
            self.len = index + 1;
        }
        true
    }

    /// Store one channel value of the pixel at `index`.
    ///
    /// Returns `false` without writing if `index` or `channel` is out of range.
    pub fn set_channel(&mut self, index: usize, channel: usize, value: u8) -> bool {
        if channel >= CHANNELS_PER_PIXEL || !self.touch(index) {
            return false;
        }
        let pixel = &mut self.pixels[index];
        match channel {
            0 => pixel.r = value,
            1 => pixel.g = value,
            _ => pixel.b = value,
        }
        true
    }
}

impl<const N: usize> Default for PixelTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

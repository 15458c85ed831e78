use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Map a color from the downlink channel order (R, G, B) to the strip's
/// native order (G, R, B).
#[inline]
pub const fn to_device_order(color: Rgb) -> Rgb {
    Rgb {
        r: color.g,
        g: color.r,
        b: color.b,
    }
}

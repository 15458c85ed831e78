use crate::LedStrip;
use crate::color::{Rgb, to_device_order};
use crate::pixel_table::PixelTable;

/// Push a decoded table to the strip.
///
/// The strip is blanked first, so pixels past the table length stay off.
/// Colors are converted to the strip's channel order and the strip is drawn
/// once after all pixels are set.
pub fn render<S: LedStrip, const N: usize>(strip: &mut S, table: &PixelTable<N>) {
    strip.blackout();
    for (index, color) in table.as_slice().iter().enumerate() {
        strip.set_pixel_color(index, to_device_order(*color));
    }
    strip.draw();
}

/// Show boot progress by lighting the first `stage` pixels.
///
/// `color` is given in the strip's channel order.
pub fn show_boot_stage<S: LedStrip>(strip: &mut S, stage: usize, color: Rgb) {
    strip.blackout();
    for index in 0..stage {
        strip.set_pixel_color(index, color);
    }
    strip.draw();
}

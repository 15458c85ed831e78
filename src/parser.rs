//! Downlink command parser.
//!
//! A command is a `/`-separated list of pixel groups, each group a
//! `,`-separated list of up to three decimal channel values in R, G, B order:
//!
//! ```text
//! 255,0,0/0,255,0/0,0,255
//! ```
//!
//! Parsing never fails. Unknown bytes are skipped and values above 255 wrap
//! modulo 256. Input past the table capacity or past the third channel of a
//! group ends the scan.

use crate::config::CHANNELS_PER_PIXEL;
use crate::pixel_table::PixelTable;

/// Separates pixel groups
pub const PIXEL_SEPARATOR: u8 = b'/';
/// Separates channels within a pixel group
pub const CHANNEL_SEPARATOR: u8 = b',';

/// Decode `line` into `table`, replacing its previous contents.
///
/// Returns the number of decoded pixels. A pixel counts once it has received
/// a digit or a channel separator, so a trailing `/` adds nothing and an empty
/// line yields an empty table.
pub fn parse_into<const N: usize>(line: &[u8], table: &mut PixelTable<N>) -> usize {
    table.clear();

    let mut pixel = 0;
    let mut channel = 0;
    let mut bytes = line.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        match byte {
            PIXEL_SEPARATOR => {
                pixel += 1;
                channel = 0;
                if pixel >= N {
                    break;
                }
            }
            CHANNEL_SEPARATOR => {
                table.touch(pixel);
                channel += 1;
                if channel >= CHANNELS_PER_PIXEL {
                    break;
                }
            }
            b'0'..=b'9' => {
                let mut value = byte - b'0';
                while let Some(digit) = bytes.next_if(u8::is_ascii_digit) {
                    value = value.wrapping_mul(10).wrapping_add(digit - b'0');
                }
                table.set_channel(pixel, channel, value);
            }
            _ => {}
        }
    }

    table.len()
}

/// Decode `line` into a fresh table
pub fn parse<const N: usize>(line: &[u8]) -> PixelTable<N> {
    let mut table = PixelTable::new();
    parse_into(line, &mut table);
    table
}

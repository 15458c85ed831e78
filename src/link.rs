//! Line-oriented serial link to the field controller.
//!
//! Downlink lines carry LED commands, uplink lines carry event reports. Reads
//! are bounded by a timeout so the main loop keeps servicing the sensors even
//! when the controller stalls in the middle of a line.

use embassy_time::{Duration, Instant};
use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::LINE_DELIMITER;

/// One received line, delimiter stripped
pub type Line<const N: usize> = Vec<u8, N>;

/// Source of the current time.
///
/// Passed in rather than read globally so the link can be driven with
/// synthetic time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Serial link that reads command lines and writes report lines.
///
/// N is the maximum line length. Bytes past it are dropped until the
/// delimiter arrives.
pub struct SerialLink<T, const N: usize> {
    transport: T,
    timeout: Duration,
}

impl<T, const N: usize> SerialLink<T, N>
where
    T: Read + ReadReady + Write,
{
    pub const fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    /// Read timeout for a single line
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Poll for the next line.
    ///
    /// Returns `Ok(None)` immediately if no bytes are waiting. Otherwise reads
    /// until the delimiter or until the timeout has elapsed since the call
    /// started, whichever comes first, and returns what was read. A timed out
    /// line is returned as is.
    ///
    /// The deadline is checked after each read, so every call that finds
    /// bytes waiting consumes at least one of them, even with a zero timeout.
    pub fn poll_line(&mut self, clock: &impl Clock) -> Result<Option<Line<N>>, T::Error> {
        if !self.transport.read_ready()? {
            return Ok(None);
        }

        let started = clock.now();
        let mut line = Line::new();
        let mut overflow = false;

        loop {
            if self.transport.read_ready()? {
                let mut byte = [0u8; 1];
                if self.transport.read(&mut byte)? == 0 {
                    break;
                }
                if byte[0] == LINE_DELIMITER {
                    return Ok(Some(line));
                }
                if line.push(byte[0]).is_err() && !overflow {
                    overflow = true;
                    #[cfg(feature = "esp32-log")]
                    println!("link: line exceeds {} bytes, dropping the rest", N);
                }
            }

            if self.is_expired(started, clock.now()) {
                break;
            }
        }

        #[cfg(feature = "esp32-log")]
        println!("link: read timed out after {} bytes", line.len());

        Ok(Some(line))
    }

    /// Write `text` as one line and flush it.
    pub fn send_line(&mut self, text: &str) -> Result<(), T::Error> {
        self.transport.write_all(text.as_bytes())?;
        self.transport.write_all(&[LINE_DELIMITER])?;
        self.transport.flush()
    }

    /// Get a reference to the transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn is_expired(&self, started: Instant, now: Instant) -> bool {
        now.checked_duration_since(started)
            .is_some_and(|elapsed| elapsed >= self.timeout)
    }
}

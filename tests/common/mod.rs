#![allow(dead_code)]
#![allow(unreachable_pub)]

use std::cell::Cell;
use std::collections::VecDeque;

use building_node::color::BLACK;
use building_node::{Clock, EdgeSource, Instant, LedStrip, Rgb};
use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};

pub const STRIP_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

impl embedded_io::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// In-memory serial port
#[derive(Debug, Default)]
pub struct FakeSerial {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl FakeSerial {
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut serial = Self::default();
        serial.push_input(bytes);
        serial
    }

    pub fn push_input(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn sent(&self) -> String {
        String::from_utf8(self.tx.clone()).expect("uplink is utf-8")
    }

    pub fn sent_lines(&self) -> Vec<String> {
        self.sent().lines().map(str::to_owned).collect()
    }
}

impl ErrorType for FakeSerial {
    type Error = FakeError;
}

impl Read for FakeSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err(FakeError);
        }
        let mut count = 0;
        while count < buf.len() {
            let Some(byte) = self.rx.pop_front() else {
                break;
            };
            buf[count] = byte;
            count += 1;
        }
        Ok(count)
    }
}

impl ReadReady for FakeSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        if self.fail_reads {
            return Err(FakeError);
        }
        Ok(!self.rx.is_empty())
    }
}

impl Write for FakeSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(FakeError);
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Serial port that streams the same byte forever and never sends a newline
#[derive(Debug)]
pub struct EndlessSerial(pub u8);

impl ErrorType for EndlessSerial {
    type Error = FakeError;
}

impl Read for EndlessSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        buf.fill(self.0);
        Ok(buf.len())
    }
}

impl ReadReady for EndlessSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

impl Write for EndlessSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Clock that moves forward by a fixed step every time it is read
#[derive(Debug)]
pub struct StepClock {
    now_ms: Cell<u64>,
    step_ms: u64,
}

impl StepClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(0),
            step_ms,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let now = self.now_ms.get();
        self.now_ms.set(now + self.step_ms);
        Instant::from_millis(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOp {
    Blackout,
    Set(usize, Rgb),
    Draw,
}

/// Strip that records every call
#[derive(Debug)]
pub struct RecordingStrip {
    pub ops: Vec<StripOp>,
    pub pixels: [Rgb; STRIP_LEN],
    pub drawn: [Rgb; STRIP_LEN],
}

impl RecordingStrip {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            pixels: [BLACK; STRIP_LEN],
            drawn: [BLACK; STRIP_LEN],
        }
    }

    pub fn draw_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == StripOp::Draw).count()
    }
}

impl LedStrip for RecordingStrip {
    fn blackout(&mut self) {
        self.pixels = [BLACK; STRIP_LEN];
        self.ops.push(StripOp::Blackout);
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        self.ops.push(StripOp::Set(index, color));
    }

    fn draw(&mut self) {
        self.drawn = self.pixels;
        self.ops.push(StripOp::Draw);
    }
}

/// Input pin that remembers how it was configured
#[derive(Debug, Default)]
pub struct FakePin {
    pub id: u8,
    pub pull_up: bool,
    pub listening: bool,
}

impl FakePin {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl EdgeSource for FakePin {
    fn pin(&self) -> u8 {
        self.id
    }

    fn enable_pull_up(&mut self) {
        self.pull_up = true;
    }

    fn listen_falling_edge(&mut self) {
        self.listening = true;
    }
}

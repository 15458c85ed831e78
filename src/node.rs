//! Main cycle of a building node.
//!
//! Every pass checks the serial link for a new LED command, then polls the
//! ball and laser sensors in that order and reports whatever fired.

use core::fmt::Debug;

use embedded_io::{Read, ReadReady, Write};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedStrip;
use crate::config::{
    BOOT_STAGE_BALL, BOOT_STAGE_LASER, BOOT_STAGE_STRIP, MAX_LEDS, MAX_LINE_LEN, NodeConfig,
    READY_MESSAGE,
};
use crate::latch::EventLatch;
use crate::link::{Clock, SerialLink};
use crate::parser::parse_into;
use crate::pixel_table::PixelTable;
use crate::renderer::{render, show_boot_stage};
use crate::sensor::{EdgeSource, EventKind, Sensor};

/// Hardware the node is built from.
pub struct NodeParts<'a, T, S, C, B, L> {
    /// Serial transport to the field controller
    pub transport: T,
    /// LED strip
    pub strip: S,
    /// Time source for read timeouts
    pub clock: C,
    /// Ball drop input pin
    pub ball_pin: B,
    /// Latch fed by the ball pin interrupt
    pub ball_latch: &'a EventLatch,
    /// Laser hit input pin
    pub laser_pin: L,
    /// Latch fed by the laser pin interrupt
    pub laser_latch: &'a EventLatch,
}

/// What happened during one pass of the main cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Number of pixels rendered, if a command arrived
    pub pixels: Option<usize>,
    /// A ball event was reported
    pub ball: bool,
    /// A laser event was reported
    pub laser: bool,
    /// Reading or writing the link failed
    pub link_error: bool,
}

impl CycleReport {
    /// Check if the pass did anything
    pub const fn is_idle(&self) -> bool {
        self.pixels.is_none() && !self.ball && !self.laser && !self.link_error
    }
}

/// Building node - owns every collaborator and runs the main cycle
pub struct Node<'a, T, S, C, B, L>
where
    T: Read + ReadReady + Write,
    S: LedStrip,
    C: Clock,
    B: EdgeSource,
    L: EdgeSource,
{
    link: SerialLink<T, MAX_LINE_LEN>,
    strip: S,
    clock: C,
    ball: Sensor<'a, B>,
    laser: Sensor<'a, L>,
    table: PixelTable<MAX_LEDS>,
}

impl<'a, T, S, C, B, L> Node<'a, T, S, C, B, L>
where
    T: Read + ReadReady + Write,
    S: LedStrip,
    C: Clock,
    B: EdgeSource,
    L: EdgeSource,
{
    /// Bring up the node.
    ///
    /// Shows boot progress on the strip as each part gets ready, then tells
    /// the controller the node is up.
    pub fn boot(parts: NodeParts<'a, T, S, C, B, L>, config: &NodeConfig) -> Self {
        let mut strip = parts.strip;
        show_boot_stage(&mut strip, BOOT_STAGE_STRIP, config.boot_color);

        let ball = Sensor::init(EventKind::Ball, parts.ball_pin, parts.ball_latch);
        show_boot_stage(&mut strip, BOOT_STAGE_BALL, config.boot_color);

        let laser = Sensor::init(EventKind::Laser, parts.laser_pin, parts.laser_latch);
        show_boot_stage(&mut strip, BOOT_STAGE_LASER, config.boot_color);

        let mut link = SerialLink::new(parts.transport, config.line_timeout);
        if let Err(err) = link.send_line(READY_MESSAGE) {
            log_link_error("ready message", &err);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "node: booted, ball pin {}, laser pin {}",
            ball.pin(),
            laser.pin()
        );

        Self {
            link,
            strip,
            clock: parts.clock,
            ball,
            laser,
            table: PixelTable::new(),
        }
    }

    /// Run one pass of the main cycle.
    ///
    /// Never blocks longer than the link read timeout. Link failures are
    /// recorded in the report and the pass carries on.
    pub fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        match self.link.poll_line(&self.clock) {
            Ok(Some(line)) => {
                let pixels = parse_into(&line, &mut self.table);
                render(&mut self.strip, &self.table);
                report.pixels = Some(pixels);
            }
            Ok(None) => {}
            Err(err) => {
                log_link_error("read", &err);
                report.link_error = true;
            }
        }

        if let Some(kind) = self.ball.poll() {
            report.ball = true;
            self.report_event(kind, &mut report);
        }
        if let Some(kind) = self.laser.poll() {
            report.laser = true;
            self.report_event(kind, &mut report);
        }

        report
    }

    /// Run the main cycle forever
    pub fn run(&mut self) -> ! {
        loop {
            let report = self.run_cycle();
            if !report.is_idle() {
                #[cfg(feature = "esp32-log")]
                println!("node: {:?}", report);
            }
        }
    }

    /// Pixels rendered by the last command
    pub const fn pixels(&self) -> &PixelTable<MAX_LEDS> {
        &self.table
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &S {
        &self.strip
    }

    /// Get a reference to the link.
    pub const fn link(&self) -> &SerialLink<T, MAX_LINE_LEN> {
        &self.link
    }

    /// Get a mutable reference to the link.
    pub fn link_mut(&mut self) -> &mut SerialLink<T, MAX_LINE_LEN> {
        &mut self.link
    }

    pub const fn ball_sensor(&self) -> &Sensor<'a, B> {
        &self.ball
    }

    pub const fn laser_sensor(&self) -> &Sensor<'a, L> {
        &self.laser
    }

    fn report_event(&mut self, kind: EventKind, report: &mut CycleReport) {
        if let Err(err) = self.link.send_line(kind.as_str()) {
            log_link_error(kind.as_str(), &err);
            report.link_error = true;
        }
    }
}

#[allow(unused_variables)]
fn log_link_error<E: Debug>(context: &str, err: &E) {
    #[cfg(feature = "esp32-log")]
    println!("node: link error ({}): {:?}", context, err);
}

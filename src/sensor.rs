//! Sensors that report discrete events upstream.

use crate::latch::EventLatch;

const EVENT_NAME_BALL: &str = "ball";
const EVENT_NAME_LASER: &str = "laser";

/// Kind of event a sensor detects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A ball dropped through the building
    Ball,
    /// The laser beam was hit
    Laser,
}

impl EventKind {
    /// Text sent upstream when the event fires
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ball => EVENT_NAME_BALL,
            Self::Laser => EVENT_NAME_LASER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EVENT_NAME_BALL => Some(Self::Ball),
            EVENT_NAME_LASER => Some(Self::Laser),
            _ => None,
        }
    }
}

/// Input pin that signals events with a falling edge.
///
/// Implement this trait for the board's GPIO type. The board is also
/// responsible for routing the pin interrupt to [`EventLatch::on_edge`].
pub trait EdgeSource {
    /// Pin number, for diagnostics
    fn pin(&self) -> u8;

    /// Configure the pin as an input with the internal pull-up enabled
    fn enable_pull_up(&mut self);

    /// Enable the falling edge interrupt
    fn listen_falling_edge(&mut self);
}

/// A configured event input bound to its latch.
pub struct Sensor<'a, P: EdgeSource> {
    kind: EventKind,
    source: P,
    latch: &'a EventLatch,
}

impl<'a, P: EdgeSource> Sensor<'a, P> {
    /// Configure `source` and bind it to `latch`.
    pub fn init(kind: EventKind, mut source: P, latch: &'a EventLatch) -> Self {
        source.enable_pull_up();
        source.listen_falling_edge();
        Self {
            kind,
            source,
            latch,
        }
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Pin the sensor was initialized with
    pub fn pin(&self) -> u8 {
        self.source.pin()
    }

    /// Get the underlying edge source
    pub const fn source(&self) -> &P {
        &self.source
    }

    /// Take the pending event, if any
    pub fn poll(&self) -> Option<EventKind> {
        self.latch.poll_and_clear().then_some(self.kind)
    }
}

//! Testing utilities and mock implementations
//!
//! Mock digital pins and a transmit-to-receive loopback harness for
//! exercising the adapter on the host, without hardware.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::phy::pins::{MiiRxPins, MiiTxPins};
use crate::phy::rx::NibbleReceiver;
use crate::phy::tx::NibbleTransmitter;
use crate::stream::{FrameByte, frame};

// =============================================================================
// Mock Digital Pin
// =============================================================================

/// Mock pin usable as both an `OutputPin` and an `InputPin`.
///
/// Clones share the same level, so a test can keep a handle to a pin it has
/// moved into a driver. Output writes are recorded for verification.
///
/// # Example
///
/// ```ignore
/// let pin = MockPin::new();
/// let mut driver = ResetPinDriver::new(pin.clone());
/// driver.apply(false).unwrap();
/// assert!(!pin.level());
/// ```
#[derive(Clone, Default)]
pub struct MockPin {
    shared: Rc<RefCell<PinRecord>>,
}

#[derive(Default)]
struct PinRecord {
    level: bool,
    history: Vec<bool>,
}

impl MockPin {
    /// Create a pin at the low level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pin level.
    pub fn level(&self) -> bool {
        self.shared.borrow().level
    }

    /// Set the level externally (for pins used as inputs).
    pub fn drive(&self, level: bool) {
        self.shared.borrow_mut().level = level;
    }

    /// Every level written through the `OutputPin` impl, in order.
    pub fn history(&self) -> Vec<bool> {
        self.shared.borrow().history.clone()
    }

    fn record(&self, level: bool) {
        let mut record = self.shared.borrow_mut();
        record.level = level;
        record.history.push(level);
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.shared.borrow().level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.shared.borrow().level)
    }
}

// =============================================================================
// Handshake Producer
// =============================================================================

/// Byte-stream producer that follows the hold-until-accepted discipline.
///
/// Offers the head element every tick and advances only when the consumer
/// reports acceptance, like a well-behaved upstream.
#[derive(Debug, Default)]
pub struct FrameProducer {
    pending: VecDeque<FrameByte>,
}

impl FrameProducer {
    /// Producer with nothing to send.
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer preloaded with one frame per byte slice.
    pub fn from_frames(frames: &[&[u8]]) -> Self {
        let mut producer = Self::new();
        for bytes in frames {
            producer.push_frame(bytes);
        }
        producer
    }

    /// Queue another frame.
    pub fn push_frame(&mut self, bytes: &[u8]) {
        self.pending.extend(frame(bytes));
    }

    /// The element currently on offer.
    pub fn offer(&self) -> Option<FrameByte> {
        self.pending.front().copied()
    }

    /// Advance past the current element if the consumer took it.
    pub fn advance(&mut self, accepted: bool) {
        if accepted {
            self.pending.pop_front();
        }
    }

    /// True once every queued element has been accepted.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// =============================================================================
// Loopback Harness
// =============================================================================

/// Ticks needed after the last acceptance for the registered output and the
/// receiver pipeline to drain.
const SETTLE_TICKS: usize = 8;

/// Transmit-to-receive loopback stepped in lock step.
///
/// Each step ticks the transmitter, feeds its registered pin drive straight
/// into the receiver (output enable becomes data-valid), and collects
/// whatever the receiver emits. The registered pin drive of every tick is
/// recorded in `pin_trace`.
#[derive(Debug)]
pub struct Loopback {
    pub tx: NibbleTransmitter,
    pub rx: NibbleReceiver,
    pub producer: FrameProducer,
    /// Elements emitted by the receiver, in order.
    pub received: Vec<FrameByte>,
    /// Registered transmit pin drive of every step.
    pub pin_trace: Vec<MiiTxPins>,
}

impl Loopback {
    /// Harness over fresh machines and the given producer.
    pub fn new(producer: FrameProducer) -> Self {
        Self {
            tx: NibbleTransmitter::new(),
            rx: NibbleReceiver::new(),
            producer,
            received: Vec::new(),
            pin_trace: Vec::new(),
        }
    }

    /// Advance both machines by one tick.
    pub fn step(&mut self) {
        let out = self.tx.tick(self.producer.offer());
        self.producer.advance(out.accepted);
        self.pin_trace.push(out.pins);

        let sample = MiiRxPins {
            data: out.pins.data,
            valid: out.pins.enable,
        };
        self.received.extend(self.rx.tick(sample));
    }

    /// Step until the producer drains, then let the pipeline settle.
    ///
    /// Panics if the producer fails to drain; only well-formed frames keep
    /// the transmitter moving.
    pub fn run_to_idle(&mut self) {
        let mut remaining = 4 * (self.producer.pending.len() + 1) + SETTLE_TICKS;
        while !self.producer.is_empty() {
            assert!(remaining > 0, "loopback failed to drain the producer");
            remaining -= 1;
            self.step();
        }
        for _ in 0..SETTLE_TICKS {
            self.step();
        }
    }
}

//! Receive deserializer: nibble-pair pin samples to a framed byte stream.
//!
//! [`NibbleReceiver`] is the mirror of the transmit serializer: a three-state
//! machine stepped once per tick of the receive clock domain, sampling the
//! four data lines and the data-valid line. The first valid nibble of a burst
//! always begins a new byte, bytes are reassembled low nibble first, and the
//! data-valid line delimits frames: the tick where it drops closes the frame
//! and tags the final byte with the end marker.
//!
//! The assembled byte is a pure function of the two nibble latches and is
//! decoupled from the framing control, so framing decisions never disturb
//! already-latched data.
//!
//! There is no output backpressure: an assembled byte is emitted for exactly
//! one tick and a consumer that is not watching loses it, exactly as on real
//! pins.

use crate::phy::pins::{MiiRxPins, NIBBLE_MASK, assemble};
use crate::stream::FrameByte;

/// Receive deserializer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxState {
    /// Waiting for data-valid; the start-of-frame flag is armed here.
    #[default]
    Idle,
    /// Capturing the high nibble of the current byte.
    LoadHigh,
    /// Byte complete; emitting it and deciding whether the frame continues.
    LoadLow,
}

/// Nibble-to-byte receive deserializer.
///
/// Stepped by [`tick`](Self::tick) once per receive-domain clock edge with
/// the current pin sample.
///
/// A data-valid drop between the low and high nibble captures is not
/// distinguished from a clean end of burst: the high nibble is latched from
/// whatever the data lines hold on the capture tick and the byte completes
/// normally. Inherited behavior; no truncation is signaled.
#[derive(Debug)]
pub struct NibbleReceiver {
    state: RxState,
    /// Low nibble latch, captured first.
    low: u8,
    /// High nibble latch, captured second.
    high: u8,
    /// Armed while idle, consumed by the first emitted byte of a frame.
    first_pending: bool,
}

impl NibbleReceiver {
    /// Create a receiver in the idle state.
    pub const fn new() -> Self {
        Self {
            state: RxState::Idle,
            low: 0,
            high: 0,
            first_pending: true,
        }
    }

    /// Advance one tick of the receive domain.
    ///
    /// Returns the assembled byte on the tick it becomes valid, `None`
    /// otherwise. The returned element is only offered this tick.
    pub fn tick(&mut self, pins: MiiRxPins) -> Option<FrameByte> {
        match self.state {
            RxState::Idle => {
                self.first_pending = true;
                if pins.valid {
                    self.low = pins.data & NIBBLE_MASK;
                    self.state = RxState::LoadHigh;
                }
                None
            }
            RxState::LoadHigh => {
                self.high = pins.data & NIBBLE_MASK;
                self.state = RxState::LoadLow;
                None
            }
            RxState::LoadLow => {
                let first = self.first_pending;
                let data = assemble(self.low, self.high);
                if pins.valid {
                    // Frame continues: the next byte starts immediately.
                    self.first_pending = false;
                    self.low = pins.data & NIBBLE_MASK;
                    self.state = RxState::LoadHigh;
                    Some(FrameByte::new(data, first, false))
                } else {
                    self.state = RxState::Idle;
                    Some(FrameByte::new(data, first, true))
                }
            }
        }
    }

    /// Current state, for observability.
    pub const fn state(&self) -> RxState {
        self.state
    }

    /// Return to idle, clear the latches, and re-arm the start flag.
    pub fn reset(&mut self) {
        self.state = RxState::Idle;
        self.low = 0;
        self.high = 0;
        self.first_pending = true;
    }
}

impl Default for NibbleReceiver {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

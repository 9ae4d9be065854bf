//! Transmit serializer: framed byte stream to nibble-pair pin drive.
//!
//! [`NibbleTransmitter`] is a three-state machine stepped once per tick of
//! the transmit clock domain. Each accepted byte leaves the interface as two
//! consecutive enable-qualified nibbles, low nibble first, and back-to-back
//! bytes are serialized with zero idle ticks in between: the byte transfers
//! on the same tick its high nibble is computed, so the producer can line up
//! the next byte immediately.
//!
//! The pin drive visible to the outside is registered: the bundle reported by
//! a tick is the value computed on the previous tick. This models the output
//! register in front of the pads and keeps the nibble stream glitch-free at
//! pin level.

use crate::phy::pins::{MiiTxPins, high_nibble, low_nibble};
use crate::stream::FrameByte;

/// Transmit serializer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxState {
    /// Waiting for the start of a frame.
    #[default]
    Idle,
    /// Driving the current byte's low nibble.
    SendLow,
    /// Driving the current byte's high nibble; the byte transfers here.
    SendHigh,
}

/// Outputs of one transmitter tick.
///
/// `ready` and `accepted` are combinational for the tick that produced them;
/// `pins` is the registered drive, one tick behind the state outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxTick {
    /// Sink readiness this tick.
    pub ready: bool,
    /// Whether the offered element transferred this tick (valid and ready).
    pub accepted: bool,
    /// Registered pin drive.
    pub pins: MiiTxPins,
}

/// Byte-to-nibble transmit serializer.
///
/// Stepped by [`tick`](Self::tick) once per transmit-domain clock edge. The
/// sink argument is the producer's current offer, which must be held stable
/// across ticks until a tick reports `accepted`.
///
/// There is no error path. A producer that never marks end-of-frame leaves
/// the machine cycling between [`TxState::SendLow`] and [`TxState::SendHigh`]
/// re-serializing whatever the data lines hold; that is a caller contract
/// violation, not a recoverable condition.
#[derive(Debug)]
pub struct NibbleTransmitter {
    state: TxState,
    /// Registered pin drive, one tick behind the combinational outputs.
    out_reg: MiiTxPins,
}

impl NibbleTransmitter {
    /// Create a transmitter in the idle state with idle pin drive.
    pub const fn new() -> Self {
        Self {
            state: TxState::Idle,
            out_reg: MiiTxPins::idle(),
        }
    }

    /// Advance one tick of the transmit domain.
    ///
    /// `sink` is the element currently offered by the producer, or `None`
    /// when the producer has nothing valid (the data lines then read as
    /// zero). While idle, readiness is asserted; observing a valid
    /// start-of-frame byte drops readiness in the same tick without
    /// consuming the byte, and serialization begins on the next tick. A
    /// valid byte offered while idle *without* the start marker is drained
    /// and discarded, which keeps a malformed stream from wedging the
    /// producer.
    pub fn tick(&mut self, sink: Option<FrameByte>) -> TxTick {
        let (valid, byte) = match sink {
            Some(byte) => (true, byte),
            None => (false, FrameByte::new(0, false, false)),
        };

        let mut ready = false;
        let mut drive = MiiTxPins::idle();

        let next = match self.state {
            TxState::Idle => {
                ready = true;
                if valid && byte.first {
                    // Hold the byte in the sink; it transfers at SendHigh.
                    ready = false;
                    TxState::SendLow
                } else {
                    TxState::Idle
                }
            }
            TxState::SendLow => {
                drive = MiiTxPins::drive(low_nibble(byte.data));
                TxState::SendHigh
            }
            TxState::SendHigh => {
                drive = MiiTxPins::drive(high_nibble(byte.data));
                ready = true;
                if valid && byte.last {
                    TxState::Idle
                } else {
                    TxState::SendLow
                }
            }
        };

        let accepted = valid && ready;
        let pins = self.out_reg;
        self.out_reg = drive;
        self.state = next;

        TxTick {
            ready,
            accepted,
            pins,
        }
    }

    /// Current state, for observability.
    pub const fn state(&self) -> TxState {
        self.state
    }

    /// Return to idle and clear the output register.
    pub fn reset(&mut self) {
        self.state = TxState::Idle;
        self.out_reg = MiiTxPins::idle();
    }
}

impl Default for NibbleTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_ready_without_an_offer() {
        let mut tx = NibbleTransmitter::new();
        let out = tx.tick(None);
        assert!(out.ready);
        assert!(!out.accepted);
        assert_eq!(out.pins, MiiTxPins::idle());
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn start_byte_drops_ready_without_consuming() {
        let mut tx = NibbleTransmitter::new();
        let out = tx.tick(Some(FrameByte::single(0xA5)));
        assert!(!out.ready);
        assert!(!out.accepted);
        assert_eq!(tx.state(), TxState::SendLow);
    }

    #[test]
    fn byte_without_start_marker_is_drained_while_idle() {
        let mut tx = NibbleTransmitter::new();
        let out = tx.tick(Some(FrameByte::middle(0x42)));
        // The stray element is consumed and discarded; nothing is driven.
        assert!(out.ready);
        assert!(out.accepted);
        assert_eq!(tx.state(), TxState::Idle);
        let out = tx.tick(None);
        assert_eq!(out.pins, MiiTxPins::idle());
    }

    #[test]
    fn single_byte_frame_nibble_sequence() {
        let mut tx = NibbleTransmitter::new();
        let byte = FrameByte::single(0xA5);

        let t0 = tx.tick(Some(byte));
        assert_eq!(t0.pins, MiiTxPins::idle());

        // Low nibble computed; registered output still idle.
        let t1 = tx.tick(Some(byte));
        assert_eq!(tx.state(), TxState::SendHigh);
        assert_eq!(t1.pins, MiiTxPins::idle());

        // High nibble computed, byte transfers; low nibble reaches the pins.
        let t2 = tx.tick(Some(byte));
        assert!(t2.ready);
        assert!(t2.accepted);
        assert_eq!(t2.pins, MiiTxPins::drive(0x5));
        assert_eq!(tx.state(), TxState::Idle);

        // High nibble reaches the pins one tick later, then the line idles.
        let t3 = tx.tick(None);
        assert_eq!(t3.pins, MiiTxPins::drive(0xA));
        let t4 = tx.tick(None);
        assert_eq!(t4.pins, MiiTxPins::idle());
    }

    #[test]
    fn multi_byte_frame_has_no_idle_ticks_between_bytes() {
        let mut tx = NibbleTransmitter::new();
        let bytes = [
            FrameByte::start(0x12),
            FrameByte::middle(0x34),
            FrameByte::end(0x56),
        ];

        let mut offered = 0;
        let mut enables = 0;
        // One start tick + two ticks per byte + one drain tick for the
        // registered output.
        for _ in 0..8 {
            let sink = bytes.get(offered).copied();
            let out = tx.tick(sink);
            if out.accepted {
                offered += 1;
            }
            if out.pins.enable {
                enables += 1;
            }
        }
        assert_eq!(offered, 3);
        // Three bytes, two nibbles each, with no gaps.
        assert_eq!(enables, 6);
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn end_of_frame_returns_to_idle_and_reasserts_ready() {
        let mut tx = NibbleTransmitter::new();
        let byte = FrameByte::single(0xFF);
        tx.tick(Some(byte));
        let mid = tx.tick(Some(byte));
        assert!(!mid.ready);
        let done = tx.tick(Some(byte));
        assert!(done.ready);
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn valid_dropped_mid_frame_keeps_serializing() {
        let mut tx = NibbleTransmitter::new();
        tx.tick(Some(FrameByte::start(0xAB)));
        // Producer vanishes; the machine keeps cycling and drives zeros.
        let t1 = tx.tick(None);
        assert!(!t1.accepted);
        assert_eq!(tx.state(), TxState::SendHigh);
        let t2 = tx.tick(None);
        assert!(!t2.accepted);
        assert_eq!(tx.state(), TxState::SendLow);
        assert_eq!(t2.pins, MiiTxPins::drive(0x0));
    }

    #[test]
    fn reset_returns_to_idle_and_idles_the_pins() {
        let mut tx = NibbleTransmitter::new();
        let byte = FrameByte::start(0xCD);
        tx.tick(Some(byte));
        tx.tick(Some(byte));
        tx.reset();
        assert_eq!(tx.state(), TxState::Idle);
        let out = tx.tick(None);
        assert!(out.ready);
        assert_eq!(out.pins, MiiTxPins::idle());
    }

    #[test]
    fn error_line_is_never_driven() {
        let mut tx = NibbleTransmitter::new();
        let byte = FrameByte::single(0x0F);
        for _ in 0..6 {
            let out = tx.tick(Some(byte));
            assert!(!out.pins.error);
        }
    }
}

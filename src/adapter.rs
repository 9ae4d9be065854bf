//! Composition root: the assembled MII PHY adapter.
//!
//! [`MiiPhy`] wires the transmit serializer, the receive deserializer, and
//! the clock/reset generator into one unit. It adds no protocol logic of its
//! own; its per-domain step functions apply that domain's synchronized reset
//! to the domain's state machine and otherwise just forward.

use crate::clock::ClockDomainGenerator;
use crate::phy::pins::{MiiRxPins, MiiTxPins};
use crate::phy::rx::NibbleReceiver;
use crate::phy::tx::{NibbleTransmitter, TxTick};
use crate::stream::FrameByte;

/// Byte-stream-to-nibble MII PHY adapter.
///
/// The upstream byte-stream sink is the `sink` argument of
/// [`tx_tick`](Self::tx_tick); the downstream byte-stream source is the
/// return value of [`rx_tick`](Self::rx_tick). Each tick method belongs to
/// one clock domain and must be called on that domain's edges only:
///
/// - [`base_tick`](Self::base_tick) - the base context, drives the PHY
///   reference clock pin
/// - [`tx_tick`](Self::tx_tick) - the transmit context
/// - [`rx_tick`](Self::rx_tick) - the receive context
///
/// While a domain's synchronized reset is active, its state machine is held
/// in idle and its outputs stay at their reset values. Both domains power up
/// in reset and release after `STAGES` of their own ticks.
#[derive(Debug)]
pub struct MiiPhy<const STAGES: usize = 2> {
    crg: ClockDomainGenerator<STAGES>,
    tx: NibbleTransmitter,
    rx: NibbleReceiver,
}

impl<const STAGES: usize> MiiPhy<STAGES> {
    /// Width of the byte-stream data path in bits.
    pub const DATA_WIDTH: usize = 8;

    /// Create an adapter with both domains in their power-on reset.
    pub const fn new() -> Self {
        Self {
            crg: ClockDomainGenerator::new(),
            tx: NibbleTransmitter::new(),
            rx: NibbleReceiver::new(),
        }
    }

    /// Advance one tick of the base context; returns the reference clock
    /// output level.
    pub fn base_tick(&mut self) -> bool {
        self.crg.base_tick()
    }

    /// Advance one tick of the transmit domain.
    ///
    /// Under reset the sink is not serviced: readiness stays low and the
    /// pins drive their idle values.
    pub fn tx_tick(&mut self, sink: Option<FrameByte>) -> TxTick {
        if self.crg.tx_tick() {
            self.tx.reset();
            return TxTick {
                ready: false,
                accepted: false,
                pins: MiiTxPins::idle(),
            };
        }
        self.tx.tick(sink)
    }

    /// Advance one tick of the receive domain.
    ///
    /// Under reset the pin sample is ignored and nothing is emitted.
    pub fn rx_tick(&mut self, pins: MiiRxPins) -> Option<FrameByte> {
        if self.crg.rx_tick() {
            self.rx.reset();
            return None;
        }
        self.rx.tick(pins)
    }

    /// Set or clear the level-held reset request for the whole adapter.
    pub fn set_reset(&mut self, request: bool) {
        self.crg.set_reset(request);
    }

    /// Current level of the reset request bit.
    pub const fn reset_requested(&self) -> bool {
        self.crg.reset_requested()
    }

    /// Active-low hardware reset line to the PHY.
    pub const fn phy_reset_n(&self) -> bool {
        self.crg.phy_reset_n()
    }

    /// Current level of the reference clock output.
    pub const fn ref_clk(&self) -> bool {
        self.crg.ref_clk()
    }

    /// The transmit serializer, for observability.
    pub const fn transmitter(&self) -> &NibbleTransmitter {
        &self.tx
    }

    /// The receive deserializer, for observability.
    pub const fn receiver(&self) -> &NibbleReceiver {
        &self.rx
    }

    /// The clock/reset generator, for observability.
    pub const fn clock_domains(&self) -> &ClockDomainGenerator<STAGES> {
        &self.crg
    }
}

impl<const STAGES: usize> Default for MiiPhy<STAGES> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

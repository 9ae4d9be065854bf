//! Clock and reset generation for the PHY interface.
//!
//! Three clocking contexts drive the adapter: a base context that produces
//! the half-rate reference clock for the PHY's clock pin, and the transmit
//! and receive contexts, whose edges come from clocks the PHY itself supplies
//! back. [`ClockDomainGenerator`] does not create those edges - the caller
//! ticks each context as its clock source dictates - it labels them and
//! delivers a safely synchronized reset into each.

use crate::clock::reset::ResetSynchronizer;

/// Clock domain and reset generator.
///
/// Owns the externally written reset-request bit and one
/// [`ResetSynchronizer`] per data domain. The request is the only value that
/// crosses domains, and it only does so through the synchronizers; the two
/// domain resets are independent in timing and no simultaneity is guaranteed.
///
/// The request bit also drives the PHY's active-low hardware reset pin, see
/// [`phy_reset_n`](Self::phy_reset_n).
#[derive(Debug)]
pub struct ClockDomainGenerator<const STAGES: usize = 2> {
    /// Level-held reset request, written from outside the data domains.
    reset_request: bool,
    /// Current level of the divided reference clock output.
    ref_clk: bool,
    tx_reset: ResetSynchronizer<STAGES>,
    rx_reset: ResetSynchronizer<STAGES>,
}

impl<const STAGES: usize> ClockDomainGenerator<STAGES> {
    /// Create a generator with the request deasserted and both domains held
    /// in their power-on reset.
    pub const fn new() -> Self {
        Self {
            reset_request: false,
            ref_clk: false,
            tx_reset: ResetSynchronizer::new(),
            rx_reset: ResetSynchronizer::new(),
        }
    }

    /// Advance one tick of the base context.
    ///
    /// The reference output toggles unconditionally, producing a free-running
    /// clock at half the base tick rate. Returns the new output level.
    pub fn base_tick(&mut self) -> bool {
        self.ref_clk = !self.ref_clk;
        self.ref_clk
    }

    /// Advance one tick of the transmit domain; returns its reset level.
    pub fn tx_tick(&mut self) -> bool {
        self.tx_reset.tick(self.reset_request)
    }

    /// Advance one tick of the receive domain; returns its reset level.
    pub fn rx_tick(&mut self) -> bool {
        self.rx_reset.tick(self.reset_request)
    }

    /// Set or clear the level-held reset request.
    pub fn set_reset(&mut self, request: bool) {
        self.reset_request = request;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "PHY reset request {}",
            if request { "asserted" } else { "released" }
        );
    }

    /// Current level of the reset request bit.
    pub const fn reset_requested(&self) -> bool {
        self.reset_request
    }

    /// Active-low hardware reset line to the PHY (inverted request bit).
    pub const fn phy_reset_n(&self) -> bool {
        !self.reset_request
    }

    /// Current level of the reference clock output.
    pub const fn ref_clk(&self) -> bool {
        self.ref_clk
    }

    /// Transmit-domain reset level as of that domain's last tick.
    pub const fn tx_reset_asserted(&self) -> bool {
        self.tx_reset.is_asserted()
    }

    /// Receive-domain reset level as of that domain's last tick.
    pub const fn rx_reset_asserted(&self) -> bool {
        self.rx_reset.is_asserted()
    }
}

impl<const STAGES: usize> Default for ClockDomainGenerator<STAGES> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

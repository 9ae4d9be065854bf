//! Per-domain reset synchronizer.
//!
//! A level-held reset request raised outside a clock domain cannot be used
//! inside it directly: releasing it mid-cycle would reset part of the state
//! and not the rest. The standard fix is a small shift register clocked by
//! the destination domain: assertion takes effect at once, release marches
//! through the stages and reaches the domain aligned to its own edge.

/// Fixed-depth reset synchronizer for one clock domain.
///
/// Assertion is asynchronous in effect: a tick that observes the request high
/// loads every stage, so the synchronized reset is active from that same
/// tick. Deassertion shifts a released level through all `STAGES` stages, so
/// the domain comes out of reset a fixed number of its own ticks after the
/// request drops.
///
/// A fresh synchronizer powers up asserted and releases only once the
/// request has been observed low for `STAGES` consecutive ticks, which holds
/// the domain in reset through start-up.
#[derive(Debug, Clone)]
pub struct ResetSynchronizer<const STAGES: usize = 2> {
    /// Shift register; the last stage is the synchronized reset level.
    stages: [bool; STAGES],
}

impl<const STAGES: usize> ResetSynchronizer<STAGES> {
    /// Create a synchronizer in the asserted (power-on) state.
    pub const fn new() -> Self {
        const { assert!(STAGES > 0, "a reset synchronizer needs at least one stage") };
        Self {
            stages: [true; STAGES],
        }
    }

    /// Re-sample the reset request at this domain's tick boundary.
    ///
    /// Returns the synchronized reset level for this tick.
    pub fn tick(&mut self, request: bool) -> bool {
        if request {
            self.stages = [true; STAGES];
        } else {
            self.stages.copy_within(..STAGES - 1, 1);
            self.stages[0] = false;
        }
        self.is_asserted()
    }

    /// Synchronized reset level as of the last tick.
    pub const fn is_asserted(&self) -> bool {
        self.stages[STAGES - 1]
    }

    /// Force back to the asserted power-on state.
    pub fn reset(&mut self) {
        self.stages = [true; STAGES];
    }
}

impl<const STAGES: usize> Default for ResetSynchronizer<STAGES> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

//! ISR-safe shared access to the adapter.
//!
//! The reset request is the one piece of adapter state written from outside
//! the data domains - typically a register interface running in an interrupt
//! context while the main loop ticks the domains. [`SharedPhy`] makes that
//! safe: every access goes through `critical_section::with()`, disabling
//! interrupts for the duration of the closure.
//!
//! For single-context use (nothing touching the adapter from an interrupt),
//! a plain [`MiiPhy`] value is simpler and has no overhead.
//!
//! # Example
//!
//! ```ignore
//! use mii_nibble_phy::sync::SharedPhy;
//!
//! static PHY: SharedPhy = SharedPhy::new();
//!
//! // In the register-write interrupt handler:
//! PHY.set_reset(true);
//!
//! // In the transmit-domain loop:
//! PHY.with(|phy| phy.tx_tick(None));
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::adapter::MiiPhy;

// =============================================================================
// Critical Section Cell
// =============================================================================

/// Cell providing interior mutability with critical section protection.
///
/// Combines `critical_section::Mutex` with `RefCell` for safe mutable access
/// from both normal code and interrupt handlers.
pub struct CriticalSectionCell<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionCell<T> {
    /// Create a new cell (const, suitable for static initialization).
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Execute a closure with exclusive mutable access.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            let mut value = self.inner.borrow_ref_mut(cs);
            f(&mut value)
        })
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow_mut()
                .ok()
                .map(|mut value| f(&mut value))
        })
    }
}

// =============================================================================
// Shared Adapter
// =============================================================================

/// ISR-safe adapter wrapper using critical sections.
pub struct SharedPhy<const STAGES: usize = 2> {
    inner: CriticalSectionCell<MiiPhy<STAGES>>,
}

impl<const STAGES: usize> SharedPhy<STAGES> {
    /// Create a new shared adapter (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(MiiPhy::new()),
        }
    }

    /// Execute a closure with exclusive access to the adapter.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut MiiPhy<STAGES>) -> R,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut MiiPhy<STAGES>) -> R,
    {
        self.inner.try_with(f)
    }

    /// Set or clear the reset request.
    ///
    /// Convenience for the common interrupt-side operation.
    pub fn set_reset(&self, request: bool) {
        self.with(|phy| phy.set_reset(request));
    }

    /// Current level of the reset request bit.
    pub fn reset_requested(&self) -> bool {
        self.with(|phy| phy.reset_requested())
    }
}

impl<const STAGES: usize> Default for SharedPhy<STAGES> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Clock domains and reset synchronization.
//!
//! - [`crg`] - reference clock divider plus the tx/rx domain contexts
//! - [`reset`] - the per-domain reset synchronizer primitive
//!
//! State belonging to one domain is stepped only by that domain's tick and is
//! never read from another domain; the reset request is the single
//! cross-domain signal and always travels through a synchronizer.

// Submodules
pub mod crg;
pub mod reset;

// Re-exports for convenience
pub use crg::ClockDomainGenerator;
pub use reset::ResetSynchronizer;

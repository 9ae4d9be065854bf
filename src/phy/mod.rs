//! Nibble-serialization PHY layer.
//!
//! The two halves of the 4-bit data path:
//!
//! - [`tx`] - byte stream in, enable-qualified nibble pairs out
//! - [`rx`] - nibble pairs in, byte stream with frame boundaries out
//! - [`pins`] - the pin bundles both halves speak
//!
//! Each half runs in its own clock domain and is stepped one tick at a time;
//! the only coupling between them is the wire.

// Submodules
pub mod pins;
pub mod rx;
pub mod tx;

// Re-exports for convenience
pub use pins::{MiiRxPins, MiiTxPins, NIBBLE_MASK};
pub use rx::{NibbleReceiver, RxState};
pub use tx::{NibbleTransmitter, TxState, TxTick};

// =============================================================================
// Loopback Tests
// =============================================================================

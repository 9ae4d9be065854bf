//! MII Nibble PHY Adapter
//!
//! A `no_std`, `no_alloc`, cycle-accurate model of the byte-stream-to-pin
//! serialization core of an MII (Media Independent Interface) Ethernet PHY
//! adapter: the layer that moves framed bytes across the 4-bit MII data path,
//! two nibbles per byte, low nibble first.
//!
//! # Architecture
//!
//! The adapter is organized into three layers:
//!
//! 1. **PHY Layer** ([`phy`]): the transmit serializer and receive
//!    deserializer state machines plus the pin bundles they speak
//! 2. **Clock Layer** ([`clock`]): the reference clock divider and the
//!    per-domain reset synchronizers
//! 3. **HAL Layer** ([`hal`]): `embedded-hal` bridges from the modeled pin
//!    bundles to real GPIO
//!
//! [`MiiPhy`] composes the three into one unit with a per-domain tick API.
//!
//! # Execution model
//!
//! There is no scheduler and nothing blocks. Every component advances exactly
//! one logical step per call of its domain's tick method, and three domains
//! exist: the base context (reference clock divider), the transmit context,
//! and the receive context. The caller ticks each domain as its clock source
//! dictates; the only value that crosses domains is the reset request, which
//! travels through a [`ResetSynchronizer`] per domain.
//!
//! Protocol misuse is not detected: a producer that never closes a frame, or
//! a consumer that stops watching, stalls the respective state machine
//! forever. The one actively handled hazard is the asynchronous reset
//! request.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for the public data types
//! - `critical-section`: Enable the ISR-safe [`SharedPhy`] wrapper
//!
//! # Example
//!
//! ```
//! use mii_nibble_phy::{FrameByte, MiiPhy};
//!
//! let mut phy: MiiPhy = MiiPhy::new();
//!
//! // The transmit domain powers up in reset and releases after a couple of
//! // its own ticks.
//! while !phy.tx_tick(None).ready {}
//!
//! // Serialize a one-byte frame: low nibble first, then high.
//! let byte = FrameByte::single(0xA5);
//! let t0 = phy.tx_tick(Some(byte)); // start observed, readiness drops
//! assert!(!t0.ready);
//! let _t1 = phy.tx_tick(Some(byte)); // low nibble computed
//! let t2 = phy.tx_tick(Some(byte)); // high nibble computed, byte accepted
//! assert!(t2.accepted);
//! // Pin outputs are registered, one tick behind:
//! assert_eq!(t2.pins.data, 0x5);
//! assert!(t2.pins.enable);
//! let t3 = phy.tx_tick(None);
//! assert_eq!(t3.pins.data, 0xA);
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod adapter;
pub mod clock;
pub mod hal;
pub mod phy;
pub mod stream;

#[cfg(feature = "critical-section")]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapter::MiiPhy;
pub use clock::{ClockDomainGenerator, ResetSynchronizer};
pub use phy::pins::{MiiRxPins, MiiTxPins, NIBBLE_MASK};
pub use phy::rx::{NibbleReceiver, RxState};
pub use phy::tx::{NibbleTransmitter, TxState, TxTick};
pub use stream::{FrameByte, frame};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::{CriticalSectionCell, SharedPhy};

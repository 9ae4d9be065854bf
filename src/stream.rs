//! Framed byte stream primitives.
//!
//! The transmit and receive halves of the adapter exchange bytes through a
//! valid/ready handshake: the producer offers an element and holds it stable,
//! the consumer reports readiness, and the transfer happens on the first tick
//! where both line up. In this model the producer side of a port is an
//! `Option<FrameByte>` argument to the per-tick step function (`None` means
//! valid is deasserted and the data lines read as zero), and the consumer's
//! readiness comes back in the step function's output.
//!
//! Frame boundaries travel in-band: every element carries a start-of-frame
//! and an end-of-frame marker. A well-formed frame has exactly one `first`
//! element (the first one) and exactly one `last` element (possibly the same),
//! and is never empty.

/// One element of a framed byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameByte {
    /// Payload byte.
    pub data: u8,
    /// Start-of-frame marker, set on the first byte of a frame.
    pub first: bool,
    /// End-of-frame marker, set on the last byte of a frame.
    pub last: bool,
}

impl FrameByte {
    /// Create an element with explicit frame markers.
    pub const fn new(data: u8, first: bool, last: bool) -> Self {
        Self { data, first, last }
    }

    /// First byte of a multi-byte frame.
    pub const fn start(data: u8) -> Self {
        Self::new(data, true, false)
    }

    /// Interior byte of a frame.
    pub const fn middle(data: u8) -> Self {
        Self::new(data, false, false)
    }

    /// Last byte of a multi-byte frame.
    pub const fn end(data: u8) -> Self {
        Self::new(data, false, true)
    }

    /// Sole byte of a one-byte frame (both markers set).
    pub const fn single(data: u8) -> Self {
        Self::new(data, true, true)
    }
}

/// Iterate a byte slice as one frame with correct start/end marking.
///
/// The first element carries `first`, the final element carries `last`,
/// and a one-byte slice yields a single element carrying both. An empty
/// slice yields nothing; frames are never empty, so producing one from an
/// empty slice is the caller's mistake.
pub fn frame(bytes: &[u8]) -> impl Iterator<Item = FrameByte> + '_ {
    let len = bytes.len();
    bytes
        .iter()
        .enumerate()
        .map(move |(i, &data)| FrameByte::new(data, i == 0, i + 1 == len))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn constructors_set_markers() {
        assert_eq!(FrameByte::start(0x11), FrameByte::new(0x11, true, false));
        assert_eq!(FrameByte::middle(0x22), FrameByte::new(0x22, false, false));
        assert_eq!(FrameByte::end(0x33), FrameByte::new(0x33, false, true));
        assert_eq!(FrameByte::single(0x44), FrameByte::new(0x44, true, true));
    }

    #[test]
    fn frame_marks_first_and_last() {
        let elements: Vec<FrameByte> = frame(&[1, 2, 3]).collect();
        assert_eq!(
            elements,
            [
                FrameByte::start(1),
                FrameByte::middle(2),
                FrameByte::end(3),
            ]
        );
    }

    #[test]
    fn frame_of_one_byte_carries_both_markers() {
        let elements: Vec<FrameByte> = frame(&[0xA5]).collect();
        assert_eq!(elements, [FrameByte::single(0xA5)]);
    }

    #[test]
    fn frame_of_empty_slice_yields_nothing() {
        assert_eq!(frame(&[]).count(), 0);
    }
}

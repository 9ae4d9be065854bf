//! GPIO bridge between the modeled pin bundles and real pins.
//!
//! The protocol core works on plain pin-bundle values; these adapters carry
//! those values across `embedded-hal` digital pins so the model can drive
//! actual hardware - a bit-banged PHY hookup, a logic-analyzer test rig, or
//! a second board acting as the link partner.
//!
//! All pins of one bundle must share an error type; errors propagate
//! unchanged. This is the only fallible surface of the crate: the protocol
//! core itself never fails, it stalls.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::phy::pins::{MiiRxPins, MiiTxPins};

// =============================================================================
// Transmit Bundle Driver
// =============================================================================

/// Drives a [`MiiTxPins`] value onto six output pins.
///
/// Call [`apply`](Self::apply) once per transmit tick with the registered
/// drive reported by the transmitter.
#[derive(Debug)]
pub struct TxPinDriver<D0, D1, D2, D3, EN, ER> {
    d0: D0,
    d1: D1,
    d2: D2,
    d3: D3,
    en: EN,
    er: ER,
}

impl<D0, D1, D2, D3, EN, ER> TxPinDriver<D0, D1, D2, D3, EN, ER> {
    /// Bundle six output pins: TXD0..TXD3, TX_EN, TX_ER.
    pub const fn new(d0: D0, d1: D1, d2: D2, d3: D3, en: EN, er: ER) -> Self {
        Self {
            d0,
            d1,
            d2,
            d3,
            en,
            er,
        }
    }

    /// Release the pins.
    pub fn free(self) -> (D0, D1, D2, D3, EN, ER) {
        (self.d0, self.d1, self.d2, self.d3, self.en, self.er)
    }
}

impl<E, D0, D1, D2, D3, EN, ER> TxPinDriver<D0, D1, D2, D3, EN, ER>
where
    D0: OutputPin<Error = E>,
    D1: OutputPin<Error = E>,
    D2: OutputPin<Error = E>,
    D3: OutputPin<Error = E>,
    EN: OutputPin<Error = E>,
    ER: OutputPin<Error = E>,
{
    /// Drive the bundle onto the pins.
    pub fn apply(&mut self, pins: MiiTxPins) -> Result<(), E> {
        self.d0.set_state(PinState::from(pins.data & 0x01 != 0))?;
        self.d1.set_state(PinState::from(pins.data & 0x02 != 0))?;
        self.d2.set_state(PinState::from(pins.data & 0x04 != 0))?;
        self.d3.set_state(PinState::from(pins.data & 0x08 != 0))?;
        self.en.set_state(PinState::from(pins.enable))?;
        self.er.set_state(PinState::from(pins.error))?;
        Ok(())
    }

    /// Drive the idle bundle (all lines low).
    pub fn idle(&mut self) -> Result<(), E> {
        self.apply(MiiTxPins::idle())
    }
}

// =============================================================================
// Receive Bundle Sampler
// =============================================================================

/// Samples five input pins into a [`MiiRxPins`] value.
///
/// Call [`sample`](Self::sample) once per receive tick and feed the result
/// to the receiver.
#[derive(Debug)]
pub struct RxPinSampler<D0, D1, D2, D3, DV> {
    d0: D0,
    d1: D1,
    d2: D2,
    d3: D3,
    dv: DV,
}

impl<D0, D1, D2, D3, DV> RxPinSampler<D0, D1, D2, D3, DV> {
    /// Bundle five input pins: RXD0..RXD3, RX_DV.
    pub const fn new(d0: D0, d1: D1, d2: D2, d3: D3, dv: DV) -> Self {
        Self { d0, d1, d2, d3, dv }
    }

    /// Release the pins.
    pub fn free(self) -> (D0, D1, D2, D3, DV) {
        (self.d0, self.d1, self.d2, self.d3, self.dv)
    }
}

impl<E, D0, D1, D2, D3, DV> RxPinSampler<D0, D1, D2, D3, DV>
where
    D0: InputPin<Error = E>,
    D1: InputPin<Error = E>,
    D2: InputPin<Error = E>,
    D3: InputPin<Error = E>,
    DV: InputPin<Error = E>,
{
    /// Read the current bundle off the pins.
    pub fn sample(&mut self) -> Result<MiiRxPins, E> {
        let mut data = 0u8;
        if self.d0.is_high()? {
            data |= 0x01;
        }
        if self.d1.is_high()? {
            data |= 0x02;
        }
        if self.d2.is_high()? {
            data |= 0x04;
        }
        if self.d3.is_high()? {
            data |= 0x08;
        }
        let valid = self.dv.is_high()?;
        Ok(MiiRxPins { data, valid })
    }
}

// =============================================================================
// PHY Reset Pin
// =============================================================================

/// Drives the PHY's active-low hardware reset line.
#[derive(Debug)]
pub struct ResetPinDriver<RST> {
    rst_n: RST,
}

impl<RST> ResetPinDriver<RST> {
    /// Wrap the reset pin.
    pub const fn new(rst_n: RST) -> Self {
        Self { rst_n }
    }

    /// Release the pin.
    pub fn free(self) -> RST {
        self.rst_n
    }
}

impl<RST: OutputPin> ResetPinDriver<RST> {
    /// Drive the line to the given level (low asserts the PHY reset).
    pub fn apply(&mut self, reset_n: bool) -> Result<(), RST::Error> {
        self.rst_n.set_state(PinState::from(reset_n))
    }
}

// =============================================================================
// Tests
// =============================================================================

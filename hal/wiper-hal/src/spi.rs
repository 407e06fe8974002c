//! SPI bus abstractions
//!
//! Models a single-byte SPI master whose transfer engine can be started and
//! stopped and whose receive path can be looped back onto the transmit
//! path. Loopback lets a TX-only wiring (no MISO) still complete a full
//! duplex transfer, so "transfer complete" is observable.

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Enable the transfer engine
    fn start(&mut self);

    /// Disable the transfer engine
    fn stop(&mut self);

    /// Route transmitted data back to the receive path (or stop doing so)
    fn set_loopback(&mut self, enabled: bool);

    /// Transfer one byte
    ///
    /// Writes `byte` and blocks until a byte has been clocked back in.
    /// Returns the received byte.
    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error>;
}

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
    /// Bit order on the wire
    pub bit_order: BitOrder,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl Mode {
    /// Clock polarity and phase for this mode
    pub const fn polarity_phase(self) -> (Polarity, Phase) {
        match self {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

impl SpiConfig {
    /// MSB-first configuration for the given mode and clock
    pub const fn new(frequency: u32, mode: Mode) -> Self {
        let (polarity, phase) = mode.polarity_phase();
        Self {
            frequency,
            polarity,
            phase,
            bit_order: BitOrder::MsbFirst,
        }
    }

    /// The SPI mode this configuration corresponds to
    pub fn mode(&self) -> Mode {
        match (self.polarity, self.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [Mode::Mode0, Mode::Mode1, Mode::Mode2, Mode::Mode3] {
            let config = SpiConfig::new(1_000_000, mode);
            assert_eq!((config.polarity, config.phase), mode.polarity_phase());
            assert_eq!(config.mode(), mode);
            assert_eq!(config.bit_order, BitOrder::MsbFirst);
        }
    }

    #[test]
    fn test_mode0_is_idle_low_first_edge() {
        assert_eq!(
            Mode::Mode0.polarity_phase(),
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition)
        );
        assert_eq!(
            Mode::Mode3.polarity_phase(),
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition)
        );
    }
}

//! PL022 SPI master for RP2040
//!
//! `embassy-rp` drives the transfer itself; the loopback (LBM) and
//! synchronous serial enable (SSE) bits it does not expose are set through
//! the PAC here, so the rest of the firmware only sees the named operations
//! of `wiper_hal::SpiBus`.

use embassy_rp::pac;
use embassy_rp::peripherals::{SPI0, SPI1};
use embassy_rp::spi::{self, Blocking, Instance, Spi};
use wiper_hal::{BitOrder, Phase, Polarity, SpiConfig};

/// Error from SPI transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// The transfer did not complete
    Transfer,
}

impl From<spi::Error> for SpiBusError {
    fn from(_: spi::Error) -> Self {
        SpiBusError::Transfer
    }
}

/// Requested configuration cannot be expressed on the PL022
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiConfigError {
    /// The PL022 only shifts MSB first
    UnsupportedBitOrder,
}

/// Convert a bus config to an `embassy-rp` SPI config
pub fn spi_config(config: &SpiConfig) -> Result<spi::Config, SpiConfigError> {
    if config.bit_order != BitOrder::MsbFirst {
        return Err(SpiConfigError::UnsupportedBitOrder);
    }

    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match config.polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match config.phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    Ok(out)
}

/// SPI instance whose control registers can be reached directly
pub trait ControlRegisters: Instance {
    /// Register block for this instance
    fn regs() -> pac::spi::Spi;
}

impl ControlRegisters for SPI0 {
    fn regs() -> pac::spi::Spi {
        pac::SPI0
    }
}

impl ControlRegisters for SPI1 {
    fn regs() -> pac::spi::Spi {
        pac::SPI1
    }
}

/// Blocking SPI master with loopback control
pub struct Rp2040Spi<'d, T: ControlRegisters> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: ControlRegisters> Rp2040Spi<'d, T> {
    /// Wrap a blocking `embassy-rp` SPI
    ///
    /// The engine is left stopped with loopback off until a transfer
    /// needs it.
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        let mut bus = Self { spi };
        wiper_hal::SpiBus::stop(&mut bus);
        wiper_hal::SpiBus::set_loopback(&mut bus, false);
        bus
    }
}

impl<T: ControlRegisters> wiper_hal::SpiBus for Rp2040Spi<'_, T> {
    type Error = SpiBusError;

    fn start(&mut self) {
        T::regs().cr1().modify(|w| w.set_sse(true));
    }

    fn stop(&mut self) {
        T::regs().cr1().modify(|w| w.set_sse(false));
    }

    fn set_loopback(&mut self, enabled: bool) {
        T::regs().cr1().modify(|w| w.set_lbm(enabled));
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi.blocking_transfer_in_place(&mut buf)?;
        Ok(buf[0])
    }
}

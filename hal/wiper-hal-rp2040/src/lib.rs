//! RP2040-specific HAL for the potentiometer firmware
//!
//! This crate provides RP2040 implementations of the shared `wiper-hal`
//! traits on top of `embassy-rp`:
//!
//! - Chip-select output over any `embedded-hal` pin
//! - Terminal transmitter over any `embedded-io` writer
//! - PL022 SPI master with loopback and engine control
//! - Conversion of `wiper-hal` configs to `embassy-rp` configs

#![no_std]

pub mod gpio;
pub mod spi;
pub mod uart;

pub use gpio::GpioOutput;
pub use spi::{Rp2040Spi, SpiBusError, SpiConfigError};
pub use uart::{TerminalTx, UartBusError};

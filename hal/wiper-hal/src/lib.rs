//! Wiper Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the potentiometer
//! firmware is written against. Chip-specific HALs implement them, keeping
//! register layouts out of the portable parser and driver code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (wiper-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wiper-core / wiper-drivers             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wiper-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  wiper-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip-select)
//! - [`uart::UartTx`] - Terminal transmit line
//! - [`spi::SpiBus`] - SPI master with loopback control

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{BitOrder, Mode, Phase, Polarity, SpiBus, SpiConfig};
pub use uart::{DataBits, Parity, StopBits, UartConfig, UartTx};

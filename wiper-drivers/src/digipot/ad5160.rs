//! AD5160 digital potentiometer (SPI)
//!
//! The AD5160 is a 256-position potentiometer with an SPI-compatible,
//! write-only interface: one byte per transfer, MSB first, mode 0, latched
//! on the rising edge of chip-select.
//!
//! # Wiring
//!
//! Only SCK, MOSI and CS (active low) are connected. With no MISO line the
//! bus is switched into loopback for the duration of the transfer so the
//! receive side still sees a byte and "transfer complete" can be detected.
//! That received byte is discarded.
//!
//! # Transfer sequence
//!
//! ```text
//! CS low -> loopback on -> engine start -> transfer(byte)
//!        -> engine stop -> loopback off -> CS high
//! ```

use wiper_core::traits::Potentiometer;
use wiper_core::ResistanceSetting;
use wiper_hal::{OutputPin, SpiBus};

/// AD5160 errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ad5160Error<E> {
    /// The SPI transfer failed
    Bus(E),
}

/// AD5160 driver
pub struct Ad5160<SPI, CS> {
    spi: SPI,
    cs: CS,
    last_written: Option<u8>,
}

impl<SPI: SpiBus, CS: OutputPin> Ad5160<SPI, CS> {
    /// Create a new driver
    ///
    /// Chip-select is driven high (deselected) immediately.
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            last_written: None,
        }
    }

    /// Write a raw control byte to the wiper register
    ///
    /// Chip-select, loopback and the bus engine are restored even if the
    /// transfer fails.
    pub fn write_control_byte(&mut self, byte: u8) -> Result<(), Ad5160Error<SPI::Error>> {
        self.cs.set_low();
        self.spi.set_loopback(true);
        self.spi.start();

        let result = self.spi.transfer_byte(byte);

        self.spi.stop();
        self.spi.set_loopback(false);
        self.cs.set_high();

        result.map_err(Ad5160Error::Bus)?;
        self.last_written = Some(byte);
        Ok(())
    }

    /// Last control byte successfully written
    ///
    /// Bookkeeping only; the device cannot be read back.
    pub fn last_written(&self) -> Option<u8> {
        self.last_written
    }
}

impl<SPI: SpiBus, CS: OutputPin> Potentiometer for Ad5160<SPI, CS> {
    type Error = Ad5160Error<SPI::Error>;

    fn apply(&mut self, setting: ResistanceSetting) -> Result<(), Self::Error> {
        self.write_control_byte(setting.control_byte())
    }
}

//! Board pin map
//!
//! Raspberry Pi Pico (or any RP2040 board breaking out the same pins):
//!
//! | Pin    | Function                         |
//! |--------|----------------------------------|
//! | GPIO0  | UART0 TX (terminal)              |
//! | GPIO1  | UART0 RX (terminal)              |
//! | GPIO17 | AD5160 CS (active low)           |
//! | GPIO18 | SPI0 SCK -> AD5160 CLK           |
//! | GPIO19 | SPI0 TX (MOSI) -> AD5160 SDI     |
//!
//! SPI0 RX (MISO) is not connected; the AD5160 has no data output.

use embassy_rp::peripherals::{PIN_0, PIN_1, PIN_17, PIN_18, PIN_19, SPI0, UART0};
use embassy_rp::{Peri, Peripherals};

/// Peripherals used by the firmware
pub struct Board {
    pub terminal_uart: Peri<'static, UART0>,
    pub terminal_tx: Peri<'static, PIN_0>,
    pub terminal_rx: Peri<'static, PIN_1>,
    pub pot_spi: Peri<'static, SPI0>,
    pub pot_clk: Peri<'static, PIN_18>,
    pub pot_mosi: Peri<'static, PIN_19>,
    pub pot_cs: Peri<'static, PIN_17>,
}

impl Board {
    /// Claim the board's pins from the chip peripherals
    pub fn new(p: Peripherals) -> Self {
        Self {
            terminal_uart: p.UART0,
            terminal_tx: p.PIN_0,
            terminal_rx: p.PIN_1,
            pot_spi: p.SPI0,
            pot_clk: p.PIN_18,
            pot_mosi: p.PIN_19,
            pot_cs: p.PIN_17,
        }
    }
}

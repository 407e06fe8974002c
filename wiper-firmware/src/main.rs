//! Wiper - Serial Terminal Digital Potentiometer Firmware
//!
//! Type a number from 0 to 10 into a serial terminal (9600 8N1) and the
//! AD5160 wiper moves to that many kilo-ohms. Every digit except `1` takes
//! effect immediately; `1` needs Enter (1k) or a second `0` (10k).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::Spi;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use wiper_core::config::{POT_SPI, TERMINAL_UART};
use wiper_core::Console;
use wiper_drivers::digipot::Ad5160;
use wiper_hal_rp2040::spi::spi_config;
use wiper_hal_rp2040::uart::uart_config;
use wiper_hal_rp2040::{GpioOutput, Rp2040Spi, TerminalTx};

mod board;
mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
// TX holds a full prompt plus the invalid-entry message
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wiper firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let board = board::Board::new(p);
    info!("Peripherals initialized");

    // Setup UART for the terminal
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(
        board.terminal_uart,
        board.terminal_tx,
        board.terminal_rx,
        uart_config(&TERMINAL_UART),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Terminal UART initialized at {} baud", TERMINAL_UART.baudrate);

    // Setup SPI for the potentiometer (TX only, no MISO)
    // A bus config the PL022 cannot express is a build mistake; halt here
    let pot_spi_config = unwrap!(spi_config(&POT_SPI));
    let spi = Spi::new_blocking_txonly(
        board.pot_spi,
        board.pot_clk,
        board.pot_mosi,
        pot_spi_config,
    );
    let cs = GpioOutput::new(Output::new(board.pot_cs, Level::High), true);
    let pot = Ad5160::new(Rp2040Spi::new(spi), cs);

    info!("AD5160 SPI initialized at {} Hz", POT_SPI.frequency);

    let console = Console::new(TerminalTx::new(tx), pot);

    // Spawn tasks
    spawner.spawn(tasks::terminal_rx_task(rx)).unwrap();
    spawner.spawn(tasks::console_task(console)).unwrap();

    info!("All tasks spawned, firmware running");
}

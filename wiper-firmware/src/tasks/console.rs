//! Console task
//!
//! The control loop: prompt, wait for a byte, feed it to the console,
//! repeat. It is the only consumer of `TERMINAL_RX` and the only user of
//! the potentiometer bus.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::uart::BufferedUartTx;

use wiper_core::console::{Console, ConsoleError, Outcome};
use wiper_drivers::digipot::Ad5160;
use wiper_hal_rp2040::{GpioOutput, Rp2040Spi, TerminalTx};

use crate::channels::TERMINAL_RX;

/// Console wired to the board's terminal UART and AD5160
pub type TerminalConsole = Console<
    TerminalTx<BufferedUartTx>,
    Ad5160<Rp2040Spi<'static, SPI0>, GpioOutput<Output<'static>>>,
>;

/// Console task - runs forever, waiting on terminal input
#[embassy_executor::task]
pub async fn console_task(mut console: TerminalConsole) {
    info!("Console task started");

    if let Err(e) = console.prompt() {
        warn!("Failed to send prompt: {:?}", e);
    }

    loop {
        let byte = TERMINAL_RX.receive().await;
        let response = console.on_byte(byte);

        match response.outcome {
            Outcome::Pending => {
                debug!("Waiting for second byte");
            }
            Outcome::Applied(setting) => {
                info!(
                    "Wiper set to {}k (control byte {})",
                    setting.value(),
                    setting.control_byte()
                );
            }
            Outcome::NotApplied(setting) => {
                info!("Wiper not moved to {}k", setting.value());
            }
            Outcome::Rejected(e) => {
                info!("Invalid entry: {:?}", e);
            }
        }

        match response.error {
            None => {}
            Some(ConsoleError::Potentiometer(e)) => {
                // Write-only bus; nothing to tell the user
                warn!("Potentiometer transfer failed: {:?}", e);
            }
            Some(ConsoleError::Terminal(e)) => {
                warn!("Terminal write failed: {:?}", e);
            }
        }
    }
}

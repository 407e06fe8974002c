//! Terminal UART for RP2040
//!
//! The receive side stays with `embassy-rp`'s interrupt-driven buffered
//! UART; this module provides the blocking transmitter used by the console
//! and the conversion from `wiper_hal::UartConfig`.

use embassy_rp::uart;
use wiper_hal::{DataBits, Parity, StopBits, UartConfig};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Break condition
    Break,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<uart::Error> for UartBusError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => UartBusError::Framing,
            uart::Error::Break => UartBusError::Break,
            uart::Error::Overrun => UartBusError::Overrun,
            uart::Error::Parity => UartBusError::Parity,
            _ => UartBusError::Other,
        }
    }
}

/// Convert a terminal config to an `embassy-rp` UART config
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Blocking terminal transmitter
///
/// Wraps any blocking `embedded-io` writer, e.g. `BufferedUartTx`.
pub struct TerminalTx<W> {
    inner: W,
}

impl<W> TerminalTx<W>
where
    W: embedded_io::Write,
    UartBusError: From<W::Error>,
{
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W> wiper_hal::UartTx for TerminalTx<W>
where
    W: embedded_io::Write,
    UartBusError: From<W::Error>,
{
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()?;
        Ok(())
    }
}

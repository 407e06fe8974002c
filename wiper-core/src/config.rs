//! Fixed peripheral configuration
//!
//! Nothing here is runtime configurable; the terminal and the potentiometer
//! bus always run with these parameters.

use wiper_hal::spi::Mode;
use wiper_hal::{SpiConfig, UartConfig};

/// Terminal baud rate
pub const TERMINAL_BAUDRATE: u32 = 9600;

/// Terminal line: 9600 baud, 8N1, no flow control
pub const TERMINAL_UART: UartConfig = UartConfig::new_8n1(TERMINAL_BAUDRATE);

/// Potentiometer bus clock in Hz
pub const POT_SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// Potentiometer bus: SPI mode 0, MSB first
pub const POT_SPI: SpiConfig = SpiConfig::new(POT_SPI_FREQUENCY_HZ, Mode::Mode0);

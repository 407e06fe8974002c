//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// One byte in flight between the receive task and the console, matching
/// the UART's single-byte receive register semantics
const TERMINAL_RX_CHANNEL_SIZE: usize = 1;

/// Bytes typed into the terminal, in arrival order
pub static TERMINAL_RX: Channel<CriticalSectionRawMutex, u8, TERMINAL_RX_CHANNEL_SIZE> =
    Channel::new();

//! Terminal UART receive task
//!
//! Reads the interrupt-driven buffered UART one byte at a time and hands
//! each byte to the console. The send waits while the previous byte is
//! still unconsumed, so bytes are never dropped or reordered.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::TERMINAL_RX;

/// Terminal RX task
#[embassy_executor::task]
pub async fn terminal_rx_task(mut rx: BufferedUartRx) {
    info!("Terminal RX task started");

    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(1) => {
                trace!("RX: {=u8:#x}", buf[0]);
                TERMINAL_RX.send(buf[0]).await;
            }
            Ok(_) => {
                // Nothing read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

//! Embassy tasks
//!
//! - `terminal_rx_task` - forwards bytes from the terminal UART
//! - `console_task` - parses commands and drives the potentiometer

mod console;
mod terminal_rx;

pub use console::{console_task, TerminalConsole};
pub use terminal_rx::terminal_rx_task;

//! Terminal command parsing
//!
//! Commands are one or two ASCII bytes typed into the terminal. The
//! parser is fed one byte at a time as bytes arrive from the receive
//! interrupt.

pub mod parser;

pub use parser::{CommandError, CommandParser, ParseState, CARRIAGE_RETURN};

//! Byte-at-a-time command state machine
//!
//! Accepted commands:
//!
//! | Input      | Setting |
//! |------------|---------|
//! | `0`        | 0k      |
//! | `1` Enter  | 1k      |
//! | `2` .. `9` | 2k..9k  |
//! | `1` `0`    | 10k     |
//!
//! Every digit except `1` resolves immediately. `1` is ambiguous between 1k
//! and 10k, so it waits for either Enter or a second `0`. Anything else is
//! rejected and the parser starts over.

use crate::setting::ResistanceSetting;

/// Enter key as sent by a serial terminal
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Rejected command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// First byte is not an ASCII digit
    InvalidFirstByte(u8),
    /// `1` was followed by something other than `0` or Enter
    InvalidSecondByte(u8),
}

impl CommandError {
    /// The byte that caused the rejection
    pub fn byte(&self) -> u8 {
        match *self {
            CommandError::InvalidFirstByte(b) | CommandError::InvalidSecondByte(b) => b,
        }
    }
}

/// Parser stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseState {
    /// Fresh prompt, nothing received yet
    AwaitingFirstByte,
    /// Got `1`, waiting for `0` (10k) or Enter (1k)
    AwaitingSecondByte,
}

/// State machine for parsing terminal commands
///
/// Only a leading `1` is ever held between bytes, so the stage alone
/// carries the command in progress.
#[derive(Debug, Clone)]
pub struct CommandParser {
    state: ParseState,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Create a new parser waiting for the first byte
    pub fn new() -> Self {
        Self {
            state: ParseState::AwaitingFirstByte,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::AwaitingFirstByte;
    }

    /// Current stage
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Bytes received for the command in progress
    pub fn pending(&self) -> &'static [u8] {
        match self.state {
            ParseState::AwaitingFirstByte => b"",
            ParseState::AwaitingSecondByte => b"1",
        }
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(setting))` when a command resolves, `Ok(None)` when
    /// another byte is needed, or `Err` when the command is rejected. The
    /// parser is reset after every `Ok(Some(_))` and `Err(_)`.
    pub fn feed(&mut self, byte: u8) -> Result<Option<ResistanceSetting>, CommandError> {
        match self.state {
            ParseState::AwaitingFirstByte => {
                if byte == b'1' {
                    self.state = ParseState::AwaitingSecondByte;
                    return Ok(None);
                }

                self.reset();
                ResistanceSetting::from_ascii_digit(byte)
                    .map(Some)
                    .map_err(|_| CommandError::InvalidFirstByte(byte))
            }
            ParseState::AwaitingSecondByte => {
                self.reset();
                match byte {
                    b'0' => Ok(Some(ResistanceSetting::MAX)),
                    CARRIAGE_RETURN => Ok(Some(ResistanceSetting::ONE_K)),
                    _ => Err(CommandError::InvalidSecondByte(byte)),
                }
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first resolution found, if any. Bytes after a resolved
    /// or rejected command are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<ResistanceSetting>, CommandError> {
        for &byte in bytes {
            if let Some(setting) = self.feed(byte)? {
                return Ok(Some(setting));
            }
        }
        Ok(None)
    }
}

//! Terminal console
//!
//! Glues the terminal line, the command parser and the potentiometer
//! together. The firmware owns the receive side and hands each byte to
//! [`Console::on_byte`]; everything written back to the terminal goes out
//! through the console.

use wiper_hal::UartTx;

use crate::command::{CommandError, CommandParser};
use crate::setting::ResistanceSetting;
use crate::traits::Potentiometer;

/// Prompt sent at start-up and after every resolved command
pub const PROMPT: &[u8] = b"\n\r Resistance x 10k: ";

/// Sent after a rejected command
pub const INVALID_ENTRY: &[u8] = b"  ** Invalid entry **";

/// What a received byte did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Command not complete yet
    Pending,
    /// Potentiometer moved to this setting
    Applied(ResistanceSetting),
    /// Command was valid but the potentiometer transfer failed
    NotApplied(ResistanceSetting),
    /// Command rejected, user told so
    Rejected(CommandError),
}

/// Console failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError<T, P> {
    /// Writing to the terminal failed
    Terminal(T),
    /// The potentiometer transfer failed
    Potentiometer(P),
}

/// Result of handling one byte
///
/// A failed terminal write never stops the byte from being parsed, so the
/// outcome is always reported. `error` holds the first failure seen while
/// handling the byte, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response<T, P> {
    /// What the byte did
    pub outcome: Outcome,
    /// First failure
    pub error: Option<ConsoleError<T, P>>,
}

impl<T, P> Response<T, P> {
    fn new() -> Self {
        Self {
            outcome: Outcome::Pending,
            error: None,
        }
    }

    fn record(&mut self, error: ConsoleError<T, P>) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// True when nothing failed
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

/// Terminal console driving a potentiometer
pub struct Console<T, P> {
    tx: T,
    pot: P,
    parser: CommandParser,
}

impl<T: UartTx, P: Potentiometer> Console<T, P> {
    /// Create a console over a terminal transmitter and a potentiometer
    pub fn new(tx: T, pot: P) -> Self {
        Self {
            tx,
            pot,
            parser: CommandParser::new(),
        }
    }

    /// Start a fresh prompt cycle
    pub fn prompt(&mut self) -> Result<(), ConsoleError<T::Error, P::Error>> {
        self.parser.reset();
        self.tx
            .write_blocking(PROMPT)
            .map_err(ConsoleError::Terminal)
    }

    /// Handle one byte from the terminal
    ///
    /// The byte is echoed first so the user sees what they typed. When the
    /// byte completes a command the potentiometer is updated (or the
    /// invalid-entry message is sent) and the prompt is re-issued. The byte
    /// is parsed and the prompt cycle completed even if a terminal write
    /// fails.
    pub fn on_byte(&mut self, byte: u8) -> Response<T::Error, P::Error> {
        let mut response = Response::new();

        if let Err(e) = self.tx.write_byte(byte) {
            response.record(ConsoleError::Terminal(e));
        }

        response.outcome = match self.parser.feed(byte) {
            Ok(None) => return response,
            Ok(Some(setting)) => match self.pot.apply(setting) {
                Ok(()) => Outcome::Applied(setting),
                Err(e) => {
                    response.record(ConsoleError::Potentiometer(e));
                    Outcome::NotApplied(setting)
                }
            },
            Err(e) => {
                if let Err(te) = self.tx.write_blocking(INVALID_ENTRY) {
                    response.record(ConsoleError::Terminal(te));
                }
                Outcome::Rejected(e)
            }
        };

        if let Err(e) = self.prompt() {
            response.record(e);
        }
        response
    }

    /// The command parser
    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// The terminal transmitter
    pub fn terminal(&self) -> &T {
        &self.tx
    }

    /// The potentiometer
    pub fn potentiometer(&self) -> &P {
        &self.pot
    }

    /// Tear down the console, returning its parts
    pub fn release(self) -> (T, P) {
        (self.tx, self.pot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ParseState, CARRIAGE_RETURN};

    /// Terminal that records everything written to it
    #[derive(Default)]
    struct MockTx {
        written: Vec<u8>,
        fail: bool,
        /// A write of exactly these bytes fails
        fail_on: &'static [u8],
    }

    impl UartTx for MockTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail || (!self.fail_on.is_empty() && data == self.fail_on) {
                return Err(());
            }
            self.written.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    /// Potentiometer that records the control bytes it was asked to write
    #[derive(Default)]
    struct MockPot {
        writes: Vec<u8>,
        fail: bool,
    }

    impl Potentiometer for MockPot {
        type Error = &'static str;

        fn apply(&mut self, setting: ResistanceSetting) -> Result<(), Self::Error> {
            if self.fail {
                return Err("bus");
            }
            self.writes.push(setting.control_byte());
            Ok(())
        }
    }

    fn console() -> Console<MockTx, MockPot> {
        Console::new(MockTx::default(), MockPot::default())
    }

    fn failing_terminal(fail_on: &'static [u8]) -> Console<MockTx, MockPot> {
        Console::new(
            MockTx {
                fail_on,
                ..Default::default()
            },
            MockPot::default(),
        )
    }

    fn type_in(console: &mut Console<MockTx, MockPot>, input: &[u8]) -> Outcome {
        let mut last = Outcome::Pending;
        for &byte in input {
            let response = console.on_byte(byte);
            assert!(response.is_clean(), "{:?}", response.error);
            last = response.outcome;
        }
        last
    }

    fn transcript(parts: &[&[u8]]) -> Vec<u8> {
        parts.concat()
    }

    #[test]
    fn test_prompt() {
        let mut console = console();
        console.prompt().unwrap();
        assert_eq!(console.terminal().written, PROMPT);
    }

    #[test]
    fn test_single_digit_applies_and_reprompts() {
        let mut console = console();
        let outcome = type_in(&mut console, b"5");

        assert_eq!(outcome, Outcome::Applied(ResistanceSetting::new(5).unwrap()));
        assert_eq!(console.potentiometer().writes, [128]);
        assert_eq!(console.terminal().written, transcript(&[b"5", PROMPT]));
    }

    #[test]
    fn test_end_to_end_scenarios() {
        let cases: [(&[u8], Option<u8>); 6] = [
            (b"5", Some(128)),
            (b"0", Some(0)),
            (b"10", Some(255)),
            (b"1\r", Some(26)),
            (b"1x", None),
            (b"a", None),
        ];

        for (input, expected) in cases {
            let mut console = console();
            let outcome = type_in(&mut console, input);

            match expected {
                Some(byte) => {
                    assert!(matches!(outcome, Outcome::Applied(_)));
                    assert_eq!(console.potentiometer().writes, [byte]);
                }
                None => {
                    assert!(matches!(outcome, Outcome::Rejected(_)));
                    assert!(console.potentiometer().writes.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_invalid_entry_message_follows_echo() {
        let mut console = console();
        let outcome = type_in(&mut console, b"a");

        assert_eq!(
            outcome,
            Outcome::Rejected(CommandError::InvalidFirstByte(b'a'))
        );
        assert_eq!(
            console.terminal().written,
            transcript(&[b"a", INVALID_ENTRY, PROMPT])
        );
    }

    #[test]
    fn test_one_is_pending_until_enter() {
        let mut console = console();
        let response = console.on_byte(b'1');
        assert_eq!(response.outcome, Outcome::Pending);
        assert!(response.is_clean());
        assert_eq!(console.parser().state(), ParseState::AwaitingSecondByte);
        assert!(console.potentiometer().writes.is_empty());
        // Only the echo so far
        assert_eq!(console.terminal().written, b"1");

        let outcome = type_in(&mut console, &[CARRIAGE_RETURN]);
        assert_eq!(outcome, Outcome::Applied(ResistanceSetting::ONE_K));
        assert_eq!(console.potentiometer().writes, [26]);
    }

    #[test]
    fn test_repeated_command_writes_twice() {
        let mut console = console();
        type_in(&mut console, b"7");
        type_in(&mut console, b"7");
        assert_eq!(console.potentiometer().writes, [179, 179]);
    }

    #[test]
    fn test_pot_error_still_reprompts() {
        let mut console = Console::new(
            MockTx::default(),
            MockPot {
                fail: true,
                ..Default::default()
            },
        );
        type_in(&mut console, b"1");
        assert_eq!(
            console.on_byte(b'0'),
            Response {
                outcome: Outcome::NotApplied(ResistanceSetting::MAX),
                error: Some(ConsoleError::Potentiometer("bus")),
            }
        );
        assert_eq!(console.parser().state(), ParseState::AwaitingFirstByte);
        assert_eq!(console.terminal().written, transcript(&[b"10", PROMPT]));
    }

    #[test]
    fn test_failed_echo_still_parses() {
        let mut console = failing_terminal(b"0");
        type_in(&mut console, b"1");

        let response = console.on_byte(b'0');
        assert_eq!(response.outcome, Outcome::Applied(ResistanceSetting::MAX));
        assert_eq!(response.error, Some(ConsoleError::Terminal(())));
        assert_eq!(console.potentiometer().writes, [255]);
        assert_eq!(console.parser().state(), ParseState::AwaitingFirstByte);
        // Echo of '1' and the prompt made it out; the '0' echo did not
        assert_eq!(console.terminal().written, transcript(&[b"1", PROMPT]));
    }

    #[test]
    fn test_failed_echo_of_invalid_byte_still_rejects() {
        let mut console = failing_terminal(b"x");

        let response = console.on_byte(b'x');
        assert_eq!(
            response.outcome,
            Outcome::Rejected(CommandError::InvalidFirstByte(b'x'))
        );
        assert_eq!(response.error, Some(ConsoleError::Terminal(())));
        assert_eq!(
            console.terminal().written,
            transcript(&[INVALID_ENTRY, PROMPT])
        );
    }

    #[test]
    fn test_failed_prompt_keeps_outcome() {
        let mut console = failing_terminal(PROMPT);

        let response = console.on_byte(b'4');
        assert_eq!(
            response.outcome,
            Outcome::Applied(ResistanceSetting::new(4).unwrap())
        );
        assert_eq!(response.error, Some(ConsoleError::Terminal(())));
        assert_eq!(console.potentiometer().writes, [102]);
        assert_eq!(console.parser().state(), ParseState::AwaitingFirstByte);
    }

    #[test]
    fn test_terminal_error_is_reported() {
        let mut console = Console::new(
            MockTx {
                fail: true,
                ..Default::default()
            },
            MockPot::default(),
        );
        let response = console.on_byte(b'3');
        assert_eq!(
            response.outcome,
            Outcome::Applied(ResistanceSetting::new(3).unwrap())
        );
        assert_eq!(response.error, Some(ConsoleError::Terminal(())));
        assert_eq!(console.prompt(), Err(ConsoleError::Terminal(())));
    }

    #[test]
    fn test_release() {
        let mut console = console();
        type_in(&mut console, b"9");
        let (tx, pot) = console.release();
        assert_eq!(pot.writes, [230]);
        assert!(tx.written.ends_with(PROMPT));
    }
}

//! Board-agnostic core logic for the digital potentiometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Resistance settings and the AD5160 control-byte table
//! - Terminal command parser (one byte at a time)
//! - Console loop body (prompt, echo, dispatch)
//! - Potentiometer trait implemented by the drivers crate
//! - Fixed terminal and bus configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod console;
pub mod setting;
pub mod traits;

pub use command::{CommandError, CommandParser, ParseState};
pub use console::{Console, ConsoleError, Outcome, Response};
pub use setting::{ResistanceSetting, SettingError, CONTROL_BYTES};

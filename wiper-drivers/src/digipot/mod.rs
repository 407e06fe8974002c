//! Digital potentiometer drivers

pub mod ad5160;

pub use ad5160::{Ad5160, Ad5160Error};

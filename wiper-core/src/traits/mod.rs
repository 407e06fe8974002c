//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and device drivers.

pub mod potentiometer;

pub use potentiometer::Potentiometer;

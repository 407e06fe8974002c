//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wiper-core:
//!
//! - Digital potentiometers (AD5160)

#![no_std]
#![deny(unsafe_code)]

pub mod digipot;

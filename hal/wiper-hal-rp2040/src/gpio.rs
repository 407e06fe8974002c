//! GPIO output adapter
//!
//! Wraps any infallible `embedded-hal` output (such as
//! `embassy_rp::gpio::Output`) as a `wiper_hal::OutputPin`.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;

/// Output pin that remembers the level it was last driven to
pub struct GpioOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> GpioOutput<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut output = Self {
            pin,
            high: initial_high,
        };
        wiper_hal::OutputPin::set_state(&mut output, initial_high);
        output
    }
}

impl<P: EhOutputPin<Error = Infallible>> wiper_hal::OutputPin for GpioOutput<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(e) => match e {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(e) => match e {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

//! RP2350 GPIO implementation
//!
//! Wraps `embassy_rp::gpio::Input` and `embassy_rp::gpio::Output`. Pin
//! direction is fixed when the wrapper is built, so `set_mode` only accepts
//! the mode the pin was created with.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use embassy_rp::gpio::{Input, Output};
use embedded_hal::digital::OutputPin;

/// RP2350 input pin (AC sense line)
pub struct Rp2350Input<'d> {
    pin: Input<'d>,
}

impl<'d> Rp2350Input<'d> {
    /// Create from an Embassy GPIO input
    ///
    /// The opto-coupler output is driven, so the pin is usually created with
    /// `Pull::None`.
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Input<'_> {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&self) -> bool {
        self.pin.is_high()
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => Ok(()),
            GpioMode::OutputPushPull => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn mode(&self) -> GpioMode {
        GpioMode::Input
    }
}

/// RP2350 push-pull output pin (channel LED)
pub struct Rp2350Output<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2350Output<'d> {
    /// Create from an Embassy GPIO output
    ///
    /// LEDs are active low; create the pin with `Level::High` so they start off.
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Output<'_> {
    fn set_high(&mut self) -> Result<()> {
        OutputPin::set_high(&mut self.pin)
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }

    fn set_low(&mut self) -> Result<()> {
        OutputPin::set_low(&mut self.pin)
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }

    fn read(&self) -> bool {
        self.pin.is_set_high()
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::OutputPushPull => Ok(()),
            GpioMode::Input => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}


//! Dual AC input device
//!
//! Owns the two AC sense inputs and the two channel LEDs. Each tick samples
//! both inputs, runs the debouncer and drives the LEDs according to their
//! configured mode.
//!
//! LEDs are wired active low: `LedState::On` drives the pin low.
//!
//! # Example
//!
//! ```ignore
//! use dual_ac_in::devices::ac_in::AcIn;
//! use dual_ac_in::platform::mock::MockGpio;
//!
//! let inputs = [MockGpio::new_input(), MockGpio::new_input()];
//! let leds = [MockGpio::new_output(), MockGpio::new_output()];
//! let mut ac_in = AcIn::new(inputs, leds)?;
//! let changed = ac_in.tick(now_ms);
//! ```

use crate::core::ac_in::{AcInputs, Channel, AC_IN_CHANNEL_NUM};
use crate::core::led::{ChannelLed, LedMode, LedState};
use crate::platform::{traits::GpioInterface, GpioMode, Result};
use crate::{log_debug, log_error, log_info};

/// Dual AC input device
pub struct AcIn<I: GpioInterface, O: GpioInterface> {
    inputs: [I; AC_IN_CHANNEL_NUM],
    leds: [O; AC_IN_CHANNEL_NUM],
    state: AcInputs,
    led_state: [ChannelLed; AC_IN_CHANNEL_NUM],
}

impl<I: GpioInterface, O: GpioInterface> AcIn<I, O> {
    /// Configure the pins and seed the debounced state from the inputs
    ///
    /// Both LEDs are switched to push-pull output and driven high (off).
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be put into the required mode or the
    /// initial LED level cannot be driven.
    pub fn new(
        mut inputs: [I; AC_IN_CHANNEL_NUM],
        mut leds: [O; AC_IN_CHANNEL_NUM],
    ) -> Result<Self> {
        for input in inputs.iter_mut() {
            input.set_mode(GpioMode::Input)?;
        }
        for led in leds.iter_mut() {
            led.set_mode(GpioMode::OutputPushPull)?;
            led.set_high()?;
        }

        let levels = [inputs[0].read(), inputs[1].read()];
        log_info!("AC inputs seeded: ch0={} ch1={}", levels[0], levels[1]);

        Ok(Self {
            inputs,
            leds,
            state: AcInputs::new(levels),
            led_state: [ChannelLed::default(); AC_IN_CHANNEL_NUM],
        })
    }

    /// Sample, debounce and drive the LEDs
    ///
    /// Returns the bit mask of channels whose stable value changed.
    pub fn tick(&mut self, now_ms: u32) -> u8 {
        let levels = [self.inputs[0].read(), self.inputs[1].read()];
        let changed = self.state.update(levels, now_ms);

        for channel in Channel::ALL {
            let value = self.state.value(channel);
            if changed & channel.bit() != 0 {
                log_debug!("AC channel {} present: {}", channel.index(), value);
            }
            if let Some(level) = self.led_state[channel.index()].tick(value, now_ms) {
                self.drive_led(channel, level);
            }
        }

        changed
    }

    /// Change the LED mode of `channel`
    ///
    /// `On` and `Off` drive the LED immediately. A GPIO failure is logged and
    /// the mode change is kept.
    pub fn set_led_mode(&mut self, channel: Channel, mode: LedMode) {
        log_info!("LED {} mode -> {}", channel.index(), u8::from(mode));
        if let Some(level) = self.led_state[channel.index()].set_mode(mode) {
            self.drive_led(channel, level);
        }
    }

    pub fn led_mode(&self, channel: Channel) -> LedMode {
        self.led_state[channel.index()].mode()
    }

    /// Debounced value of `channel`
    pub fn value(&self, channel: Channel) -> bool {
        self.state.value(channel)
    }

    /// Debounced values packed into a byte (bit 0 = channel 0)
    pub fn packed(&self) -> u8 {
        self.state.packed()
    }

    /// Debounced state of both channels
    pub fn inputs(&self) -> &AcInputs {
        &self.state
    }

    /// Input pin of `channel`
    pub fn input_pin_mut(&mut self, channel: Channel) -> &mut I {
        &mut self.inputs[channel.index()]
    }

    /// LED pin of `channel`
    pub fn led_pin(&self, channel: Channel) -> &O {
        &self.leds[channel.index()]
    }

    fn drive_led(&mut self, channel: Channel, level: LedState) {
        let led = &mut self.leds[channel.index()];
        let result = match level {
            LedState::On => led.set_low(),
            LedState::Off => led.set_high(),
        };
        if let Err(_e) = result {
            log_error!("LED {} write failed: {:?}", channel.index(), _e);
        }
    }
}

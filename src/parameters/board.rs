//! Board pin assignment
//!
//! GPIO numbers of the AC sense inputs and channel LEDs on the
//! Raspberry Pi Pico 2 W carrier board.

use crate::core::ac_in::AC_IN_CHANNEL_NUM;

/// Highest GPIO number available on the RP2350A package
const RP2350_MAX_GPIO: u8 = 29;

/// Pins of one AC channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPins {
    /// Opto-coupler output (input)
    pub input: u8,
    /// Channel LED (active low output)
    pub led: u8,
}

/// Board-level pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPinConfig {
    pub channels: [ChannelPins; AC_IN_CHANNEL_NUM],
}

/// Default carrier board wiring
pub const BOARD_PINS: BoardPinConfig = BoardPinConfig {
    channels: [
        ChannelPins { input: 2, led: 14 },
        ChannelPins { input: 3, led: 15 },
    ],
};

impl Default for BoardPinConfig {
    fn default() -> Self {
        BOARD_PINS
    }
}

/// Pin configuration errors
#[derive(Debug, PartialEq, Eq)]
pub enum PinError {
    /// Pin is assigned to multiple functions
    DuplicatePin(u8),
    /// GPIO number is outside valid range for platform
    InvalidGpio(u8),
    /// Firmware built a pin other than the one recorded for the board
    WiringMismatch { expected: u8, actual: u8 },
}

impl BoardPinConfig {
    /// Validate pin configuration
    ///
    /// # Errors
    ///
    /// Returns `PinError::InvalidGpio` if a GPIO number is out of range and
    /// `PinError::DuplicatePin` if a pin is used twice.
    pub fn validate(&self) -> Result<(), PinError> {
        use heapless::FnvIndexSet;

        let mut used_pins = FnvIndexSet::<u8, 8>::new();

        for pins in &self.channels {
            for gpio in [pins.input, pins.led] {
                if gpio > RP2350_MAX_GPIO {
                    return Err(PinError::InvalidGpio(gpio));
                }
                if !used_pins.insert(gpio).unwrap_or(false) {
                    return Err(PinError::DuplicatePin(gpio));
                }
            }
        }

        Ok(())
    }

    /// Compare the pins firmware actually built against this record
    ///
    /// # Errors
    ///
    /// Returns `PinError::WiringMismatch` for the first differing pin, input
    /// before LED, channel 0 first.
    pub fn check_wiring(&self, actual: &BoardPinConfig) -> Result<(), PinError> {
        for (expected, actual) in self.channels.iter().zip(actual.channels.iter()) {
            for (expected, actual) in [(expected.input, actual.input), (expected.led, actual.led)] {
                if expected != actual {
                    return Err(PinError::WiringMismatch { expected, actual });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_valid() {
        assert_eq!(BoardPinConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut config = BOARD_PINS;
        config.channels[1].led = config.channels[0].input;
        assert_eq!(config.validate(), Err(PinError::DuplicatePin(2)));
    }

    #[test]
    fn test_out_of_range_gpio_rejected() {
        let mut config = BOARD_PINS;
        config.channels[0].input = 30;
        assert_eq!(config.validate(), Err(PinError::InvalidGpio(30)));
    }

    #[test]
    fn test_check_wiring() {
        assert_eq!(BOARD_PINS.check_wiring(&BOARD_PINS), Ok(()));

        let mut built = BOARD_PINS;
        built.channels[1].led = 16;
        assert_eq!(
            BOARD_PINS.check_wiring(&built),
            Err(PinError::WiringMismatch {
                expected: 15,
                actual: 16
            })
        );
    }
}

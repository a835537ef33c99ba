//! AC input channels
//!
//! [`AcInputs`] holds the debounce state of both channels. It is updated once
//! per polling tick from raw pin samples and read by the LED driver, the
//! callback schedulers and the request dispatcher.

pub mod channel;
pub mod debounce;

pub use channel::{pack_values, Channel, AC_IN_CHANNEL_NUM};
pub use debounce::{ChannelState, ABSENCE_RESTAMP_MS, ABSENCE_TIMEOUT_MS};

/// Debounced state of all AC input channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcInputs {
    channels: [ChannelState; AC_IN_CHANNEL_NUM],
}

impl AcInputs {
    /// Create inputs seeded from the current pin levels
    pub fn new(initial_levels: [bool; AC_IN_CHANNEL_NUM]) -> Self {
        Self {
            channels: initial_levels.map(ChannelState::new),
        }
    }

    /// Feed one raw sample per channel taken at `now_ms`
    ///
    /// Returns a bitmask of channels whose stable value changed.
    pub fn update(&mut self, levels: [bool; AC_IN_CHANNEL_NUM], now_ms: u32) -> u8 {
        let mut changed = 0;
        for channel in Channel::ALL {
            if self.channels[channel.index()].update(levels[channel.index()], now_ms) {
                changed |= channel.bit();
            }
        }
        changed
    }

    /// Debounce state of one channel
    pub fn channel(&self, channel: Channel) -> &ChannelState {
        &self.channels[channel.index()]
    }

    /// Debounced value of one channel
    pub fn value(&self, channel: Channel) -> bool {
        self.channels[channel.index()].stable_value()
    }

    /// Debounced values of all channels
    pub fn values(&self) -> [bool; AC_IN_CHANNEL_NUM] {
        self.channels.map(|state| state.stable_value())
    }

    /// Debounced values packed into a bitmask (channel 0 = bit 0)
    pub fn packed(&self) -> u8 {
        pack_values(self.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_from_levels() {
        let inputs = AcInputs::new([true, false]);
        assert!(inputs.value(Channel::Ch0));
        assert!(!inputs.value(Channel::Ch1));
        assert_eq!(inputs.packed(), 0b01);
    }

    #[test]
    fn channels_debounce_independently() {
        let mut inputs = AcInputs::new([false, false]);

        assert_eq!(inputs.update([true, false], 10), 0b01);
        assert_eq!(inputs.packed(), 0b01);

        assert_eq!(inputs.update([true, true], 20), 0b10);
        assert_eq!(inputs.packed(), 0b11);

        // Channel 0 static since 10ms, channel 1 since 20ms
        assert_eq!(inputs.update([true, true], 110), 0b01);
        assert_eq!(inputs.packed(), 0b10);

        assert_eq!(inputs.update([true, true], 120), 0b10);
        assert_eq!(inputs.packed(), 0b00);
    }

    #[test]
    fn unchanged_update_reports_nothing() {
        let mut inputs = AcInputs::new([false, false]);
        inputs.update([true, true], 10);
        assert_eq!(inputs.update([true, true], 11), 0);
    }
}

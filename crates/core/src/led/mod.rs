//! Channel LED driver
//!
//! Decides what each channel LED should show. The decision is returned as an
//! optional [`LedState`]; the firmware maps it to the physical (active-low)
//! pin. `None` means no pin write is needed.
//!
//! - `On`/`Off` are applied once, when the mode is set.
//! - `ShowChannelStatus` follows the debounced channel value every tick.
//! - `ShowHeartbeat` steps the [`LedFlicker`] pattern.

pub mod flicker;
pub mod mode;

pub use flicker::{LedFlicker, HEARTBEAT_PERIOD_MS};
pub use mode::LedMode;

/// Logical LED output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// LED driver state of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelLed {
    mode: LedMode,
    flicker: LedFlicker,
}

impl ChannelLed {
    pub const fn new(mode: LedMode) -> Self {
        Self {
            mode,
            flicker: LedFlicker::new(),
        }
    }

    /// Current mode
    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// Change the mode; returns the fixed level to drive for `On`/`Off`
    pub fn set_mode(&mut self, mode: LedMode) -> Option<LedState> {
        self.mode = mode;
        self.flicker.reset();
        match mode {
            LedMode::Off => Some(LedState::Off),
            LedMode::On => Some(LedState::On),
            LedMode::ShowHeartbeat | LedMode::ShowChannelStatus => None,
        }
    }

    /// Per-tick decision for the current mode
    pub fn tick(&mut self, channel_value: bool, now_ms: u32) -> Option<LedState> {
        match self.mode {
            LedMode::ShowHeartbeat => self.flicker.tick(now_ms),
            LedMode::ShowChannelStatus => Some(LedState::from(channel_value)),
            LedMode::Off | LedMode::On => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_modes_drive_once_on_set() {
        let mut led = ChannelLed::default();
        assert_eq!(led.set_mode(LedMode::On), Some(LedState::On));
        assert_eq!(led.tick(false, 10), None);
        assert_eq!(led.set_mode(LedMode::Off), Some(LedState::Off));
        assert_eq!(led.tick(true, 20), None);
    }

    #[test]
    fn channel_status_follows_value() {
        let mut led = ChannelLed::new(LedMode::ShowChannelStatus);
        assert_eq!(led.tick(true, 0), Some(LedState::On));
        assert_eq!(led.tick(false, 1), Some(LedState::Off));
    }

    #[test]
    fn heartbeat_ignores_channel_value() {
        let mut led = ChannelLed::default();
        assert_eq!(led.set_mode(LedMode::ShowHeartbeat), None);
        assert_eq!(led.tick(false, 0), Some(LedState::On));
        assert_eq!(led.tick(false, 120), Some(LedState::Off));
        assert_eq!(led.tick(true, 130), None);
    }
}

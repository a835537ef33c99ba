//! Heartbeat blink pattern
//!
//! A double pulse once per second: on for the first 100ms, off, on again
//! from 200ms to 300ms, then off for the rest of the period.

use super::LedState;

/// Heartbeat period
pub const HEARTBEAT_PERIOD_MS: u32 = 1000;

/// On-windows within one heartbeat period as `[start, end)` offsets
const HEARTBEAT_PULSES_MS: [(u32, u32); 2] = [(0, 100), (200, 300)];

/// Heartbeat pattern generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedFlicker {
    last: Option<LedState>,
}

impl LedFlicker {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last reported level so the next step reports again
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Heartbeat level at `now_ms`
    pub fn heartbeat_level(now_ms: u32) -> LedState {
        let phase = now_ms % HEARTBEAT_PERIOD_MS;
        if HEARTBEAT_PULSES_MS
            .iter()
            .any(|&(start, end)| (start..end).contains(&phase))
        {
            LedState::On
        } else {
            LedState::Off
        }
    }

    /// Step the pattern; returns the level to drive if it changed
    pub fn tick(&mut self, now_ms: u32) -> Option<LedState> {
        let level = Self::heartbeat_level(now_ms);
        if self.last == Some(level) {
            None
        } else {
            self.last = Some(level);
            Some(level)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_pattern_levels() {
        assert_eq!(LedFlicker::heartbeat_level(0), LedState::On);
        assert_eq!(LedFlicker::heartbeat_level(99), LedState::On);
        assert_eq!(LedFlicker::heartbeat_level(100), LedState::Off);
        assert_eq!(LedFlicker::heartbeat_level(250), LedState::On);
        assert_eq!(LedFlicker::heartbeat_level(300), LedState::Off);
        assert_eq!(LedFlicker::heartbeat_level(999), LedState::Off);
        assert_eq!(LedFlicker::heartbeat_level(1_050), LedState::On);
    }

    #[test]
    fn tick_reports_only_changes() {
        let mut flicker = LedFlicker::new();
        assert_eq!(flicker.tick(0), Some(LedState::On));
        assert_eq!(flicker.tick(50), None);
        assert_eq!(flicker.tick(100), Some(LedState::Off));
        assert_eq!(flicker.tick(150), None);
        assert_eq!(flicker.tick(200), Some(LedState::On));
    }

    #[test]
    fn reset_reports_current_level_again() {
        let mut flicker = LedFlicker::new();
        flicker.tick(500);
        assert_eq!(flicker.tick(600), None);
        flicker.reset();
        assert_eq!(flicker.tick(600), Some(LedState::Off));
    }
}

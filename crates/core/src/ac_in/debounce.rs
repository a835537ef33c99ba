//! AC presence debouncer
//!
//! An opto-isolated mains sense line toggles at line frequency while AC is
//! present and sits at a static level when it is absent. Presence is therefore
//! inferred from recent edge activity, not from the instantaneous level:
//!
//! - Any edge marks the channel present immediately.
//! - No edge for [`ABSENCE_TIMEOUT_MS`] marks it absent. At 50Hz that is
//!   roughly five missed half-cycles.
//!
//! On an absence transition the transition timestamp is moved
//! [`ABSENCE_RESTAMP_MS`] into the past, so the wrapping elapsed-time check
//! keeps reporting "elapsed" even after the 32-bit counter rolls over.

use crate::traits::is_time_elapsed_ms;

/// Time without an edge after which AC is considered absent
pub const ABSENCE_TIMEOUT_MS: u32 = 100;

/// Offset applied to the transition timestamp when declaring absence
pub const ABSENCE_RESTAMP_MS: u32 = 150;

/// Debounce state of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelState {
    raw_level: bool,
    last_transition_ms: u32,
    stable_value: bool,
}

impl ChannelState {
    /// Create a channel seeded from the current pin level
    ///
    /// The stable value starts equal to the pin level and the transition
    /// timestamp starts at 0, so a static line is reported absent once the
    /// clock passes the absence timeout.
    pub const fn new(initial_level: bool) -> Self {
        Self {
            raw_level: initial_level,
            last_transition_ms: 0,
            stable_value: initial_level,
        }
    }

    /// Feed one raw sample taken at `now_ms`
    ///
    /// Returns `true` if the stable value changed.
    pub fn update(&mut self, raw_level: bool, now_ms: u32) -> bool {
        let previous = self.stable_value;

        if raw_level != self.raw_level {
            self.raw_level = raw_level;
            self.last_transition_ms = now_ms;
            self.stable_value = true;
        } else if is_time_elapsed_ms(now_ms, self.last_transition_ms, ABSENCE_TIMEOUT_MS) {
            self.last_transition_ms = now_ms.wrapping_sub(ABSENCE_RESTAMP_MS);
            self.stable_value = false;
        }

        previous != self.stable_value
    }

    /// Last raw pin sample
    pub fn raw_level(&self) -> bool {
        self.raw_level
    }

    /// Timestamp of the last observed edge (or the absence re-stamp)
    pub fn last_transition_ms(&self) -> u32 {
        self.last_transition_ms
    }

    /// Debounced "AC present" value
    pub fn stable_value(&self) -> bool {
        self.stable_value
    }
}

//! Callback configuration and emission bookkeeping

use crate::traits::is_time_elapsed_ms;

/// Period, change filter and last emission of one callback
///
/// `V` is the value type the callback reports: `bool` for a single channel,
/// `u8` for the packed combined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackConfig<V> {
    period_ms: u32,
    value_has_to_change: bool,
    last_value: V,
    last_time_ms: u32,
}

impl<V: Copy + PartialEq> CallbackConfig<V> {
    /// Disabled callback (period 0) seeded with `initial_value`
    pub const fn new(initial_value: V) -> Self {
        Self {
            period_ms: 0,
            value_has_to_change: false,
            last_value: initial_value,
            last_time_ms: 0,
        }
    }

    /// Apply a configuration write
    ///
    /// The last emitted value is reseeded from `current_value` and the last
    /// emission time is reset to 0, not to the current time.
    pub fn configure(&mut self, period_ms: u32, value_has_to_change: bool, current_value: V) {
        self.period_ms = period_ms;
        self.value_has_to_change = value_has_to_change;
        self.last_value = current_value;
        self.last_time_ms = 0;
    }

    /// Emission period in milliseconds (0 = disabled)
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Only emit when the value changed since the last emission
    pub fn value_has_to_change(&self) -> bool {
        self.value_has_to_change
    }

    /// Value reported by the last emission
    pub fn last_value(&self) -> V {
        self.last_value
    }

    /// Time of the last emission
    pub fn last_time_ms(&self) -> u32 {
        self.last_time_ms
    }

    /// Enabled and the period elapsed since the last emission
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.period_ms != 0 && is_time_elapsed_ms(now_ms, self.last_time_ms, self.period_ms)
    }

    pub(crate) fn mark_emitted(&mut self, value: V, now_ms: u32) {
        self.last_value = value;
        self.last_time_ms = now_ms;
    }
}

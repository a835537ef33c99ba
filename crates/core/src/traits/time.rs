//! Time abstraction traits for platform-agnostic timing operations.
//!
//! The peripheral runs on a free-running 32-bit millisecond counter. All
//! elapsed-time checks use wrapping arithmetic so they stay correct when the
//! counter rolls over (after ~49.7 days).

use core::cell::Cell;

/// Platform-agnostic millisecond clock.
///
/// This trait abstracts over different time providers:
/// - `EmbassyTime` (`dual_ac_in::core::traits`, `pico2_w` feature) for the RP2350 target
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use dual_ac_in_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let start = time.now_ms();
/// time.advance(20);
/// assert!(time.is_time_elapsed_ms(start, 20));
/// assert!(!time.is_time_elapsed_ms(start, 21));
/// ```
pub trait TimeSource {
    /// Returns the current value of the wrapping millisecond counter.
    fn now_ms(&self) -> u32;

    /// Returns `true` if at least `duration_ms` passed since `since_ms`.
    fn is_time_elapsed_ms(&self, since_ms: u32, duration_ms: u32) -> bool {
        is_time_elapsed_ms(self.now_ms(), since_ms, duration_ms)
    }
}

/// Wrapping elapsed-time check on a 32-bit millisecond counter.
#[inline]
pub const fn is_time_elapsed_ms(now_ms: u32, since_ms: u32, duration_ms: u32) -> bool {
    now_ms.wrapping_sub(since_ms) >= duration_ms
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// ```
/// use dual_ac_in_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_ms(), 0);
///
/// time.advance(150);
/// assert_eq!(time.now_ms(), 150);
/// ```
#[derive(Clone, Default)]
pub struct MockTime {
    current_ms: Cell<u32>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(ms: u32) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: u32) {
        self.current_ms.set(ms);
    }

    /// Advances the current time, wrapping like the hardware counter.
    pub fn advance(&self, ms: u32) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u32 {
        self.current_ms.get()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial(5_000);
        assert_eq!(time.now_ms(), 5_000);
    }

    #[test]
    fn mock_time_set_and_advance() {
        let time = MockTime::new();
        time.set(1_000);
        time.advance(500);
        assert_eq!(time.now_ms(), 1_500);
    }

    #[test]
    fn mock_time_advance_wraps() {
        let time = MockTime::with_initial(u32::MAX - 1);
        time.advance(3);
        assert_eq!(time.now_ms(), 1);
    }

    #[test]
    fn elapsed_check_is_inclusive() {
        assert!(is_time_elapsed_ms(100, 0, 100));
        assert!(!is_time_elapsed_ms(99, 0, 100));
    }

    #[test]
    fn elapsed_check_across_rollover() {
        // 10ms before rollover to 5ms after is 15ms
        let since = u32::MAX - 9;
        assert!(is_time_elapsed_ms(5, since, 15));
        assert!(!is_time_elapsed_ms(5, since, 16));
    }

    #[test]
    fn zero_duration_is_always_elapsed() {
        let time = MockTime::with_initial(42);
        assert!(time.is_time_elapsed_ms(42, 0));
        assert!(time.is_time_elapsed_ms(1_000, 0));
    }
}

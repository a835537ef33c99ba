//! Embassy-based time source implementation.

/// Embassy-based time source using the Embassy time driver.
///
/// The 64-bit Embassy instant is truncated to the 32-bit wrapping
/// millisecond counter the peripheral logic runs on.
///
/// # Example
///
/// ```ignore
/// use dual_ac_in::core::traits::{EmbassyTime, TimeSource};
///
/// let time = EmbassyTime;
/// let now = time.now_ms();
/// ```
#[cfg(feature = "pico2_w")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

#[cfg(feature = "pico2_w")]
impl dual_ac_in_core::traits::TimeSource for EmbassyTime {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}

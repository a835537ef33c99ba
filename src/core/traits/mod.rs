//! Core traits for platform-agnostic peripheral logic.
//!
//! The clock abstraction lives in `dual_ac_in_core` so the state machines can
//! be tested on host. This module re-exports it and adds the Embassy-backed
//! implementation used on the RP2350.
//!
//! # Features
//!
//! - **`pico2_w`**: Enables `EmbassyTime`
//! - `MockTime` is always available for host testing

pub mod time;

pub use dual_ac_in_core::traits::{is_time_elapsed_ms, MockTime, TimeSource};

#[cfg(feature = "pico2_w")]
pub use time::EmbassyTime;

//! Core peripheral functionality
//!
//! Logging macros, the clock abstraction and re-exports of the host-testable
//! state machines from `dual_ac_in_core`.

pub mod logging;
pub mod traits;

pub use dual_ac_in_core::{ac_in, callback, led, protocol};

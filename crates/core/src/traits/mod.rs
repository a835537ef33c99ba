//! Core traits for platform-agnostic peripheral logic.
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the firmware crate

pub mod time;

pub use time::{is_time_elapsed_ms, MockTime, TimeSource};

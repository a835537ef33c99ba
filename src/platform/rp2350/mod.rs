//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2350 microcontroller using the `embassy-rp` HAL.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! dual_ac_in = { version = "0.1", features = ["pico2_w"] }
//! ```

mod gpio;

pub use gpio::{Rp2350Input, Rp2350Output};

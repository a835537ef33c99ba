//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use dual_ac_in::platform::mock::MockGpio;
//! use dual_ac_in::platform::traits::GpioInterface;
//!
//! let mut led = MockGpio::new_output();
//! led.set_low()?;
//! assert!(!led.read());
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;

pub use gpio::MockGpio;

//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits.
//!
//! ## Modules
//!
//! - `ac_in`: Dual AC presence inputs with channel LEDs

pub mod ac_in;

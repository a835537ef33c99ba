#![cfg_attr(not(test), no_std)]

//! dual_ac_in - Firmware for a two-channel AC presence sensing peripheral
//!
//! This library samples two opto-isolated AC sense inputs, debounces them
//! into a stable "AC present" signal per channel, drives one status LED per
//! channel and reports state to a host controller through request/response
//! and callback messages.
//!
//! The state machines live in the host-testable `dual_ac_in_core` crate; this
//! crate adds the GPIO platform layer, the message dispatcher, the transport
//! seam and the polling loop.

// Platform abstraction layer (GPIO traits, RP2350 binding, mocks)
pub mod platform;

// Logging macros, clock abstraction, core re-exports
pub mod core;

// Device drivers using platform abstraction
pub mod devices;

// Host protocol (dispatcher, transport trait)
pub mod communication;

// Compile-time configuration
pub mod parameters;

// Polling loop
pub mod bricklet;

pub use bricklet::{Bricklet, BrickletError};

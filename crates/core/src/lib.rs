//! dual_ac_in_core - Pure no_std logic for the dual AC input peripheral
//!
//! This crate contains the platform-agnostic state machines and wire types
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Clock and transport injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`ac_in`]: Channel identifiers and the AC presence debouncer
//! - [`led`]: Channel LED modes, LED driver decisions and heartbeat pattern
//! - [`callback`]: Per-channel and combined callback schedulers
//! - [`protocol`]: Message header, requests, responses and callback frames

#![no_std]

pub mod ac_in;
pub mod callback;
pub mod led;
pub mod protocol;
pub mod traits;

//! Transport abstraction
//!
//! The transport owns framing, acknowledgement and retransmission. The
//! protocol layer only sees complete frames and a "can I send now" signal.
//!
//! # Trait Methods
//!
//! - `tick()`: Advance the transport state machine (called once per loop)
//! - `receive()`: Take the next complete frame, if any
//! - `is_send_possible()`: Backpressure signal checked before every send
//! - `send()`: Queue one complete frame for transmission
//!
//! All methods are non-blocking; the polling loop never suspends.

use crate::core::protocol::Frame;
use core::fmt;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Frame transport to the host controller
pub trait TfpTransport {
    /// Advance the transport state machine
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the underlying link failed.
    fn tick(&mut self, now_ms: u32) -> Result<(), TransportError>;

    /// Take the next complete frame received from the host
    ///
    /// Returns `Ok(None)` when no frame is pending.
    fn receive(&mut self) -> Result<Option<Frame>, TransportError>;

    /// Whether `send` would accept a frame right now
    fn is_send_possible(&self) -> bool;

    /// Queue `frame` for transmission
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Busy` if called while `is_send_possible()`
    /// is false, or another error if the link failed.
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;
}

/// Transport error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum TransportError {
    /// Generic I/O error
    IoError,
    /// No room for another outgoing frame
    Busy,
    /// Transport disconnected
    Disconnected,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::IoError => write!(f, "I/O error"),
            TransportError::Busy => write!(f, "Transport busy"),
            TransportError::Disconnected => write!(f, "Transport disconnected"),
        }
    }
}

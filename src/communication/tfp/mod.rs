//! Host protocol layer
//!
//! Routes decoded requests to the device and callback state and hands
//! finished frames to a [`transport::TfpTransport`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │           Bricklet           │
//! │   (polling loop, one tick)   │
//! └───────┬──────────────┬───────┘
//!         │ frames       │ callbacks
//!         ▼              ▼
//! ┌───────────────┐ ┌──────────────┐
//! │  Dispatcher   │ │ TransportSink│
//! └───────┬───────┘ └──────┬───────┘
//!         │ replies        │
//!         ▼                ▼
//! ┌──────────────────────────────┐
//! │      TfpTransport trait      │
//! │  (framing, ack, backpressure)│
//! └──────────────────────────────┘
//! ```

pub mod dispatcher;
pub mod sink;
pub mod transport;

pub use dispatcher::{DispatcherStats, HandleMessageResponse, MessageDispatcher};
pub use sink::TransportSink;
pub use transport::{TfpTransport, TransportError};

#[cfg(any(test, feature = "mock"))]
pub use transport::mock::MockTransport;

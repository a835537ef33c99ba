//! Mock transport implementation for testing
//!
//! Queues frames to be "received", records every frame sent and lets tests
//! toggle the backpressure signal.

use super::{TfpTransport, TransportError};
use crate::core::protocol::Frame;
use heapless::{Deque, Vec};

/// Capacity of the receive queue
const MOCK_RX_DEPTH: usize = 8;

/// Capacity of the sent-frame log
const MOCK_TX_DEPTH: usize = 32;

/// Mock transport for testing
pub struct MockTransport {
    incoming: Deque<Frame, MOCK_RX_DEPTH>,
    sent: Vec<Frame, MOCK_TX_DEPTH>,
    /// Value reported by `is_send_possible()`
    pub send_possible: bool,
    /// Error to return from `send()`
    pub send_error: Option<TransportError>,
    /// Error to return from `tick()`
    pub tick_error: Option<TransportError>,
    ticks: u32,
}

impl MockTransport {
    /// Create new mock transport that accepts every send
    pub fn new() -> Self {
        Self {
            incoming: Deque::new(),
            sent: Vec::new(),
            send_possible: true,
            send_error: None,
            tick_error: None,
            ticks: 0,
        }
    }

    /// Queue a frame to be returned by `receive()`
    ///
    /// Returns `false` if the frame is too long or the queue is full.
    pub fn push_incoming(&mut self, frame: &[u8]) -> bool {
        let mut buf = Frame::new();
        if buf.extend_from_slice(frame).is_err() {
            return false;
        }
        self.incoming.push_back(buf).is_ok()
    }

    /// Frames sent so far
    pub fn sent(&self) -> &[Frame] {
        &self.sent
    }

    /// Forget all sent frames
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Number of `tick()` calls
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TfpTransport for MockTransport {
    fn tick(&mut self, _now_ms: u32) -> Result<(), TransportError> {
        self.ticks += 1;
        match self.tick_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn receive(&mut self) -> Result<Option<Frame>, TransportError> {
        Ok(self.incoming.pop_front())
    }

    fn is_send_possible(&self) -> bool {
        self.send_possible
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        if let Some(error) = self.send_error {
            return Err(error);
        }
        if !self.send_possible {
            return Err(TransportError::Busy);
        }

        let mut buf = Frame::new();
        buf.extend_from_slice(frame)
            .map_err(|_| TransportError::IoError)?;
        self.sent.push(buf).map_err(|_| TransportError::IoError)
    }
}

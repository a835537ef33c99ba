//! Callback sink backed by a transport

use super::transport::TfpTransport;
use crate::core::callback::CallbackSink;
use crate::core::protocol::Callback;
use crate::{log_error, log_warn};

/// Hands callback frames from the schedulers to the transport
pub struct TransportSink<'a, T: TfpTransport> {
    transport: &'a mut T,
    uid: u32,
}

impl<'a, T: TfpTransport> TransportSink<'a, T> {
    pub fn new(transport: &'a mut T, uid: u32) -> Self {
        Self { transport, uid }
    }
}

impl<T: TfpTransport> CallbackSink for TransportSink<'_, T> {
    fn is_send_possible(&self) -> bool {
        self.transport.is_send_possible()
    }

    fn send(&mut self, callback: &Callback) -> bool {
        let frame = match callback.encode(self.uid) {
            Ok(frame) => frame,
            Err(_e) => {
                // Fixed-size payloads always fit; nothing to retry
                log_error!("callback {} encode failed", callback.function_id() as u8);
                return true;
            }
        };
        match self.transport.send(&frame) {
            Ok(()) => true,
            Err(_e) => {
                log_warn!(
                    "callback {} send failed, retrying: {:?}",
                    callback.function_id() as u8,
                    _e
                );
                false
            }
        }
    }
}

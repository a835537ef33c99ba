//! Callback scheduling
//!
//! Two independent schedulers decide when value callbacks are due:
//!
//! - [`ValueCallbackScheduler`]: one configuration per channel, round-robin
//! - [`AllValueCallbackScheduler`]: one configuration for the packed value
//!
//! [`CallbackHandlers`] polls both at most once per tick wait, rotating which
//! scheduler goes first, and stops as soon as one hands a message to the
//! [`CallbackSink`].
//!
//! Backpressure is never an error: when the sink cannot accept a message the
//! scheduler buffers it and retries the identical message on a later poll.

pub mod all_value;
pub mod config;
pub mod value;

pub use all_value::AllValueCallbackScheduler;
pub use config::CallbackConfig;
pub use value::ValueCallbackScheduler;

use crate::ac_in::AcInputs;
use crate::protocol::Callback;
use crate::traits::is_time_elapsed_ms;

/// Minimum time between two callback polls
pub const CALLBACK_TICK_WAIT_MS: u32 = 1;

/// Destination for emitted callbacks (the transport)
pub trait CallbackSink {
    /// `true` if the transport can take a message right now
    fn is_send_possible(&self) -> bool;

    /// Hand a callback to the transport
    ///
    /// Only called right after `is_send_possible()` returned `true`.
    /// Returns `false` if the transport refused the message; the scheduler
    /// keeps it buffered and retries it unchanged.
    fn send(&mut self, callback: &Callback) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Value,
    AllValue,
}

impl Handler {
    const COUNT: usize = 2;

    fn next(self) -> Self {
        match self {
            Handler::Value => Handler::AllValue,
            Handler::AllValue => Handler::Value,
        }
    }
}

/// Both callback schedulers plus the round-robin poll between them
#[derive(Debug, Clone)]
pub struct CallbackHandlers {
    pub value: ValueCallbackScheduler,
    pub all_value: AllValueCallbackScheduler,
    next_handler: Handler,
    last_tick_ms: u32,
    tick_wait_ms: u32,
}

impl CallbackHandlers {
    pub fn new(inputs: &AcInputs, tick_wait_ms: u32) -> Self {
        Self {
            value: ValueCallbackScheduler::new(inputs),
            all_value: AllValueCallbackScheduler::new(inputs),
            next_handler: Handler::Value,
            last_tick_ms: 0,
            tick_wait_ms,
        }
    }

    /// Poll the schedulers
    ///
    /// Returns `true` if a callback was handed to the sink.
    pub fn tick<S: CallbackSink>(&mut self, inputs: &AcInputs, now_ms: u32, sink: &mut S) -> bool {
        if !is_time_elapsed_ms(now_ms, self.last_tick_ms, self.tick_wait_ms) {
            return false;
        }
        self.last_tick_ms = now_ms;

        for _ in 0..Handler::COUNT {
            let handler = self.next_handler;
            self.next_handler = handler.next();
            let sent = match handler {
                Handler::Value => self.value.tick(inputs, now_ms, sink),
                Handler::AllValue => self.all_value.tick(inputs, now_ms, sink),
            };
            if sent {
                return true;
            }
        }
        false
    }
}

/// Test sink recording every callback it accepts
#[cfg(test)]
pub(crate) struct RecordingSink {
    pub accept: bool,
    /// Number of upcoming sends that fail after `is_send_possible()`
    pub fail_sends: u32,
    pub sent: heapless::Vec<Callback, 64>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            accept: true,
            fail_sends: 0,
            sent: heapless::Vec::new(),
        }
    }
}

#[cfg(test)]
impl CallbackSink for RecordingSink {
    fn is_send_possible(&self) -> bool {
        self.accept
    }

    fn send(&mut self, callback: &Callback) -> bool {
        if self.fail_sends > 0 {
            self.fail_sends -= 1;
            return false;
        }
        self.sent.push(*callback).unwrap();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ac_in::Channel;

    #[test]
    fn respects_tick_wait() {
        let inputs = AcInputs::new([true, true]);
        let mut handlers = CallbackHandlers::new(&inputs, 5);
        handlers.value.configure(Channel::Ch0, 1, false, true);
        let mut sink = RecordingSink::new();

        assert!(!handlers.tick(&inputs, 4, &mut sink));
        assert!(handlers.tick(&inputs, 5, &mut sink));
        assert!(!handlers.tick(&inputs, 9, &mut sink));
        assert!(handlers.tick(&inputs, 10, &mut sink));
        assert_eq!(sink.sent.len(), 2);
    }

    #[test]
    fn alternates_between_schedulers() {
        let inputs = AcInputs::new([true, false]);
        let mut handlers = CallbackHandlers::new(&inputs, CALLBACK_TICK_WAIT_MS);
        handlers.value.configure(Channel::Ch0, 1, false, true);
        handlers.all_value.configure(1, false, inputs.packed());
        let mut sink = RecordingSink::new();

        for now in 1..=4 {
            assert!(handlers.tick(&inputs, now, &mut sink));
        }

        let kinds: heapless::Vec<bool, 4> = sink
            .sent
            .iter()
            .map(|cb| matches!(cb, Callback::Value(_)))
            .collect();
        assert_eq!(kinds.as_slice(), &[true, false, true, false]);
    }

    #[test]
    fn falls_through_to_second_scheduler() {
        let inputs = AcInputs::new([false, false]);
        let mut handlers = CallbackHandlers::new(&inputs, CALLBACK_TICK_WAIT_MS);
        handlers.all_value.configure(2, false, 0);
        let mut sink = RecordingSink::new();

        assert!(handlers.tick(&inputs, 2, &mut sink));
        assert!(matches!(sink.sent[0], Callback::AllValue(_)));
    }
}

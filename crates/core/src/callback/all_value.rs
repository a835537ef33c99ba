//! Combined value callback scheduler
//!
//! Same scheduling rules as the per-channel scheduler, applied to the packed
//! value of all channels. `changed` is the XOR of the last emitted and the
//! current packed value, so the host sees which channels flipped.

use super::{CallbackConfig, CallbackSink};
use crate::ac_in::AcInputs;
use crate::protocol::{AllValueCallback, Callback};

/// Scheduler for `AllValueCallback` events
#[derive(Debug, Clone)]
pub struct AllValueCallbackScheduler {
    config: CallbackConfig<u8>,
    pending: Option<AllValueCallback>,
}

impl AllValueCallbackScheduler {
    /// Disabled scheduler seeded with the current packed value
    pub fn new(inputs: &AcInputs) -> Self {
        Self {
            config: CallbackConfig::new(inputs.packed()),
            pending: None,
        }
    }

    /// Apply a configuration write
    pub fn configure(&mut self, period_ms: u32, value_has_to_change: bool, current_value: u8) {
        self.config
            .configure(period_ms, value_has_to_change, current_value);
    }

    pub fn config(&self) -> &CallbackConfig<u8> {
        &self.config
    }

    /// Callback buffered because the sink refused it
    pub fn pending(&self) -> Option<&AllValueCallback> {
        self.pending.as_ref()
    }

    /// Run one scheduling round
    ///
    /// Returns `true` if a callback was handed to the sink.
    pub fn tick<S: CallbackSink>(&mut self, inputs: &AcInputs, now_ms: u32, sink: &mut S) -> bool {
        let callback = match self.pending {
            Some(callback) => callback,
            None => {
                if !self.config.is_due(now_ms) {
                    return false;
                }

                let value = inputs.packed();
                let changed = self.config.last_value() ^ value;
                if self.config.value_has_to_change() && changed == 0 {
                    return false;
                }

                self.config.mark_emitted(value, now_ms);
                AllValueCallback { changed, value }
            }
        };

        if sink.is_send_possible() && sink.send(&Callback::AllValue(callback)) {
            self.pending = None;
            true
        } else {
            self.pending = Some(callback);
            false
        }
    }
}

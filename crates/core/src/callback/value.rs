//! Per-channel value callback scheduler
//!
//! Each call gives every channel one opportunity, starting at a rotating
//! cursor, and stops at the first channel that hands a callback to the sink.
//! A callback that could not be sent is buffered per channel and retried
//! unchanged on later calls.

use super::{CallbackConfig, CallbackSink};
use crate::ac_in::{AcInputs, Channel, AC_IN_CHANNEL_NUM};
use crate::protocol::{Callback, ValueCallback};

/// Scheduler for `ValueCallback` events
#[derive(Debug, Clone)]
pub struct ValueCallbackScheduler {
    configs: [CallbackConfig<bool>; AC_IN_CHANNEL_NUM],
    pending: [Option<ValueCallback>; AC_IN_CHANNEL_NUM],
    next_channel: Channel,
}

impl ValueCallbackScheduler {
    /// Disabled scheduler seeded with the current channel values
    pub fn new(inputs: &AcInputs) -> Self {
        Self {
            configs: inputs.values().map(CallbackConfig::new),
            pending: [None; AC_IN_CHANNEL_NUM],
            next_channel: Channel::Ch0,
        }
    }

    /// Apply a configuration write for `channel`
    ///
    /// A callback already buffered for the channel is kept and still delivered.
    pub fn configure(
        &mut self,
        channel: Channel,
        period_ms: u32,
        value_has_to_change: bool,
        current_value: bool,
    ) {
        self.configs[channel.index()].configure(period_ms, value_has_to_change, current_value);
    }

    /// Configuration of `channel`
    pub fn config(&self, channel: Channel) -> &CallbackConfig<bool> {
        &self.configs[channel.index()]
    }

    /// Callback buffered for `channel` because the sink refused it
    pub fn pending(&self, channel: Channel) -> Option<&ValueCallback> {
        self.pending[channel.index()].as_ref()
    }

    /// Channel examined first on the next call
    pub fn next_channel(&self) -> Channel {
        self.next_channel
    }

    /// Run one scheduling round
    ///
    /// Returns `true` if a callback was handed to the sink.
    pub fn tick<S: CallbackSink>(&mut self, inputs: &AcInputs, now_ms: u32, sink: &mut S) -> bool {
        for _ in 0..AC_IN_CHANNEL_NUM {
            let channel = self.next_channel;
            let sent = self.handle_channel(channel, inputs.value(channel), now_ms, sink);
            self.next_channel = channel.next();
            if sent {
                return true;
            }
        }
        false
    }

    fn handle_channel<S: CallbackSink>(
        &mut self,
        channel: Channel,
        value: bool,
        now_ms: u32,
        sink: &mut S,
    ) -> bool {
        let index = channel.index();
        let callback = match self.pending[index] {
            Some(callback) => callback,
            None => {
                let config = &mut self.configs[index];
                if !config.is_due(now_ms) {
                    return false;
                }

                let changed = config.last_value() != value;
                if config.value_has_to_change() && !changed {
                    return false;
                }

                config.mark_emitted(value, now_ms);
                ValueCallback {
                    channel,
                    changed,
                    value,
                }
            }
        };

        if sink.is_send_possible() && sink.send(&Callback::Value(callback)) {
            self.pending[index] = None;
            true
        } else {
            self.pending[index] = Some(callback);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::RecordingSink;

    fn present(ch0: bool, ch1: bool) -> AcInputs {
        AcInputs::new([ch0, ch1])
    }

    #[test]
    fn disabled_channel_never_emits() {
        let inputs = present(true, true);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 0, false, true);
        let mut sink = RecordingSink::new();

        for now in 0..1_000 {
            assert!(!scheduler.tick(&inputs, now, &mut sink));
        }
        assert!(sink.sent.is_empty());
    }

    #[test]
    fn emits_at_most_once_per_period() {
        let inputs = present(true, false);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 100, false, true);
        let mut sink = RecordingSink::new();

        for now in 0..=1_000 {
            scheduler.tick(&inputs, now, &mut sink);
        }

        // Fires at 100, 200, ... 1000
        assert_eq!(sink.sent.len(), 10);
        for callback in &sink.sent {
            assert_eq!(
                *callback,
                Callback::Value(ValueCallback {
                    channel: Channel::Ch0,
                    changed: false,
                    value: true,
                })
            );
        }
    }

    #[test]
    fn has_to_change_suppresses_unchanged_value() {
        let mut inputs = present(false, false);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch1, 10, true, false);
        let mut sink = RecordingSink::new();

        for now in 0..50 {
            assert!(!scheduler.tick(&inputs, now, &mut sink));
        }

        inputs.update([false, true], 50);
        assert!(scheduler.tick(&inputs, 50, &mut sink));
        assert_eq!(
            sink.sent.as_slice(),
            &[Callback::Value(ValueCallback {
                channel: Channel::Ch1,
                changed: true,
                value: true,
            })]
        );

        for now in 51..140 {
            inputs.update([false, now % 10 == 0], now);
            scheduler.tick(&inputs, now, &mut sink);
        }
        // Value stayed true throughout, nothing further
        assert_eq!(sink.sent.len(), 1);
    }

    #[test]
    fn backpressure_retries_identical_message() {
        let mut inputs = present(false, false);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 10, false, false);
        let mut sink = RecordingSink::new();
        sink.accept = false;

        assert!(!scheduler.tick(&inputs, 10, &mut sink));
        let buffered = *scheduler.pending(Channel::Ch0).unwrap();
        assert_eq!(scheduler.config(Channel::Ch0).last_time_ms(), 10);

        // Value flips and time passes while the sink refuses
        for now in 11..60 {
            inputs.update([now % 2 == 0, false], now);
            assert!(!scheduler.tick(&inputs, now, &mut sink));
            assert_eq!(scheduler.pending(Channel::Ch0), Some(&buffered));
            assert_eq!(scheduler.config(Channel::Ch0).last_time_ms(), 10);
        }

        sink.accept = true;
        assert!(scheduler.tick(&inputs, 60, &mut sink));
        assert_eq!(sink.sent.as_slice(), &[Callback::Value(buffered)]);
        assert!(scheduler.pending(Channel::Ch0).is_none());
    }

    #[test]
    fn failed_send_keeps_change_callback() {
        let mut inputs = present(false, false);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 10, true, false);
        let mut sink = RecordingSink::new();
        sink.fail_sends = 1;

        inputs.update([true, false], 20);
        assert!(!scheduler.tick(&inputs, 20, &mut sink));
        assert!(sink.sent.is_empty());
        let buffered = *scheduler.pending(Channel::Ch0).unwrap();
        assert!(buffered.changed);
        assert!(buffered.value);

        // Value unchanged since the failed attempt, the buffer still goes out
        assert!(scheduler.tick(&inputs, 21, &mut sink));
        assert_eq!(sink.sent.as_slice(), &[Callback::Value(buffered)]);
        assert!(scheduler.pending(Channel::Ch0).is_none());
    }

    #[test]
    fn round_robin_serves_both_channels() {
        let inputs = present(true, true);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 10, false, true);
        scheduler.configure(Channel::Ch1, 10, false, true);
        let mut sink = RecordingSink::new();

        // Both due at 10; one callback per call
        assert!(scheduler.tick(&inputs, 10, &mut sink));
        assert!(scheduler.tick(&inputs, 10, &mut sink));
        assert!(!scheduler.tick(&inputs, 10, &mut sink));

        let channels: [Channel; 2] = [sent_channel(&sink.sent[0]), sent_channel(&sink.sent[1])];
        assert_eq!(channels, [Channel::Ch0, Channel::Ch1]);
    }

    #[test]
    fn cursor_advances_past_sending_channel() {
        let inputs = present(true, true);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch1, 10, false, true);
        let mut sink = RecordingSink::new();

        assert_eq!(scheduler.next_channel(), Channel::Ch0);
        assert!(scheduler.tick(&inputs, 10, &mut sink));
        // Ch0 had nothing, Ch1 sent; next round starts at Ch0 again
        assert_eq!(scheduler.next_channel(), Channel::Ch0);
        assert_eq!(sent_channel(&sink.sent[0]), Channel::Ch1);
    }

    #[test]
    fn configure_keeps_buffered_callback() {
        let inputs = present(true, false);
        let mut scheduler = ValueCallbackScheduler::new(&inputs);
        scheduler.configure(Channel::Ch0, 5, false, true);
        let mut sink = RecordingSink::new();
        sink.accept = false;
        scheduler.tick(&inputs, 5, &mut sink);
        assert!(scheduler.pending(Channel::Ch0).is_some());

        scheduler.configure(Channel::Ch0, 0, false, true);
        assert_eq!(scheduler.config(Channel::Ch0).last_time_ms(), 0);

        sink.accept = true;
        assert!(scheduler.tick(&inputs, 6, &mut sink));
        assert_eq!(sink.sent.len(), 1);
        assert!(!scheduler.tick(&inputs, 100, &mut sink));
    }

    fn sent_channel(callback: &Callback) -> Channel {
        match callback {
            Callback::Value(cb) => cb.channel,
            Callback::AllValue(_) => panic!("unexpected all-value callback"),
        }
    }
}

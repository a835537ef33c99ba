//! Message Dispatcher
//!
//! Routes incoming requests to the device and callback state and builds the
//! reply frame.
//!
//! # Reply rules
//!
//! - A getter answers with its response payload and the request's sequence
//!   number.
//! - A setter answers with an empty frame only if the request set the
//!   "response expected" option.
//! - A rejected request is always answered with a header-only frame carrying
//!   the error code.
//! - A frame whose header cannot be decoded is dropped.

use crate::core::ac_in::Channel;
use crate::core::callback::CallbackHandlers;
use crate::core::led::LedMode;
use crate::core::protocol::{
    encode_status, ErrorCode, Frame, ProtocolError, Request, Response, TfpHeader, HEADER_SIZE,
};
use crate::devices::ac_in::AcIn;
use crate::platform::traits::GpioInterface;
use crate::{log_info, log_warn};

/// Result of handling one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleMessageResponse {
    /// Reply with this payload
    NewMessage(Response),
    /// Request handled, nothing to report
    Empty,
}

/// Counters for handled frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherStats {
    /// Frames handed to the dispatcher
    pub received: u32,
    /// Requests rejected with `InvalidParameter`
    pub rejected: u32,
    /// Requests with an unknown function id
    pub unsupported: u32,
    /// Frames dropped because the header was unreadable
    pub malformed: u32,
}

/// Request dispatcher
#[derive(Debug, Default)]
pub struct MessageDispatcher {
    stats: DispatcherStats,
}

impl MessageDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &DispatcherStats {
        &self.stats
    }

    /// Handle one complete frame
    ///
    /// Returns the reply frame, or `None` if nothing has to be sent.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the reply does not fit into a frame.
    pub fn handle_frame<I, O>(
        &mut self,
        frame: &[u8],
        ac_in: &mut AcIn<I, O>,
        callbacks: &mut CallbackHandlers,
    ) -> Result<Option<Frame>, ProtocolError>
    where
        I: GpioInterface,
        O: GpioInterface,
    {
        self.stats.received = self.stats.received.wrapping_add(1);

        let header = match TfpHeader::decode(frame) {
            Ok(header) => header,
            Err(_) => {
                self.stats.malformed = self.stats.malformed.wrapping_add(1);
                log_warn!("dropping malformed frame ({} bytes)", frame.len());
                return Ok(None);
            }
        };

        let result = Request::decode(header.function_id, &frame[HEADER_SIZE..])
            .and_then(|request| self.dispatch(&request, ac_in, callbacks));

        match result {
            Ok(HandleMessageResponse::NewMessage(response)) => response.encode(&header).map(Some),
            Ok(HandleMessageResponse::Empty) if header.response_expected => {
                encode_status(&header, ErrorCode::Success).map(Some)
            }
            Ok(HandleMessageResponse::Empty) => Ok(None),
            Err(error) => {
                match error {
                    ProtocolError::NotSupported => {
                        self.stats.unsupported = self.stats.unsupported.wrapping_add(1);
                        log_warn!("function {} not supported", header.function_id);
                    }
                    ProtocolError::InvalidParameter | ProtocolError::InvalidLength => {
                        self.stats.rejected = self.stats.rejected.wrapping_add(1);
                        log_warn!(
                            "function {} rejected: error code {}",
                            header.function_id,
                            error.error_code() as u8
                        );
                    }
                }
                encode_status(&header, error.error_code()).map(Some)
            }
        }
    }

    /// Apply a decoded request
    ///
    /// Channel indices and LED modes are validated before any state changes.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidParameter` for an out-of-range channel
    /// or LED mode.
    pub fn dispatch<I, O>(
        &mut self,
        request: &Request,
        ac_in: &mut AcIn<I, O>,
        callbacks: &mut CallbackHandlers,
    ) -> Result<HandleMessageResponse, ProtocolError>
    where
        I: GpioInterface,
        O: GpioInterface,
    {
        use HandleMessageResponse::{Empty, NewMessage};

        match *request {
            Request::GetValue => Ok(NewMessage(Response::Value {
                value: ac_in.packed(),
            })),

            Request::SetValueCallbackConfiguration {
                channel,
                period_ms,
                value_has_to_change,
            } => {
                let channel = Channel::try_from(channel)?;
                callbacks.value.configure(
                    channel,
                    period_ms,
                    value_has_to_change,
                    ac_in.value(channel),
                );
                log_info!(
                    "value callback {}: period {} ms, has_to_change {}",
                    channel.index(),
                    period_ms,
                    value_has_to_change
                );
                Ok(Empty)
            }

            Request::GetValueCallbackConfiguration { channel } => {
                let config = callbacks.value.config(Channel::try_from(channel)?);
                Ok(NewMessage(Response::ValueCallbackConfiguration {
                    period_ms: config.period_ms(),
                    value_has_to_change: config.value_has_to_change(),
                }))
            }

            Request::SetAllValueCallbackConfiguration {
                period_ms,
                value_has_to_change,
            } => {
                callbacks
                    .all_value
                    .configure(period_ms, value_has_to_change, ac_in.packed());
                log_info!(
                    "all value callback: period {} ms, has_to_change {}",
                    period_ms,
                    value_has_to_change
                );
                Ok(Empty)
            }

            Request::GetAllValueCallbackConfiguration => {
                let config = callbacks.all_value.config();
                Ok(NewMessage(Response::AllValueCallbackConfiguration {
                    period_ms: config.period_ms(),
                    value_has_to_change: config.value_has_to_change(),
                }))
            }

            Request::SetChannelLedConfig { channel, config } => {
                let channel = Channel::try_from(channel)?;
                let mode = LedMode::try_from(config)?;
                ac_in.set_led_mode(channel, mode);
                Ok(Empty)
            }

            Request::GetChannelLedConfig { channel } => {
                let mode = ac_in.led_mode(Channel::try_from(channel)?);
                Ok(NewMessage(Response::ChannelLedConfig {
                    config: u8::from(mode),
                }))
            }
        }
    }
}

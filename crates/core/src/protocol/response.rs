//! Responses and callback frames

use super::{ErrorCode, FunctionId, ProtocolError, TfpHeader};
use crate::ac_in::Channel;
use heapless::Vec;

/// Largest frame the transport carries
pub const MAX_FRAME_SIZE: usize = 80;

/// Encoded frame (header + payload)
pub type Frame = Vec<u8, MAX_FRAME_SIZE>;

/// Largest response or callback payload of this device
const MAX_PAYLOAD_SIZE: usize = 5;

type Payload = Vec<u8, MAX_PAYLOAD_SIZE>;

/// Response to a getter request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Packed channel values (bit 0 = channel 0)
    Value { value: u8 },
    ValueCallbackConfiguration {
        period_ms: u32,
        value_has_to_change: bool,
    },
    AllValueCallbackConfiguration {
        period_ms: u32,
        value_has_to_change: bool,
    },
    ChannelLedConfig { config: u8 },
}

impl Response {
    fn payload(&self) -> Result<Payload, ProtocolError> {
        let mut payload = Payload::new();
        match *self {
            Response::Value { value } => push_bytes(&mut payload, &[value])?,
            Response::ValueCallbackConfiguration {
                period_ms,
                value_has_to_change,
            }
            | Response::AllValueCallbackConfiguration {
                period_ms,
                value_has_to_change,
            } => {
                push_bytes(&mut payload, &period_ms.to_le_bytes())?;
                push_bytes(&mut payload, &[value_has_to_change as u8])?;
            }
            Response::ChannelLedConfig { config } => push_bytes(&mut payload, &[config])?,
        }
        Ok(payload)
    }

    /// Encode as the answer to `request`
    pub fn encode(&self, request: &TfpHeader) -> Result<Frame, ProtocolError> {
        let payload = self.payload()?;
        encode_frame(request.reply(payload.len(), ErrorCode::Success), &payload)
    }
}

/// Header-only frame answering `request` (empty ack or error)
pub fn encode_status(request: &TfpHeader, error_code: ErrorCode) -> Result<Frame, ProtocolError> {
    encode_frame(request.reply(0, error_code), &[])
}

/// Per-channel value callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCallback {
    pub channel: Channel,
    pub changed: bool,
    pub value: bool,
}

/// Combined value callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllValueCallback {
    /// Bitmask of channels that changed since the last emission
    pub changed: u8,
    /// Packed channel values
    pub value: u8,
}

/// Unsolicited event emitted by a callback scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Value(ValueCallback),
    AllValue(AllValueCallback),
}

impl Callback {
    /// Function identifier of this callback
    pub const fn function_id(&self) -> FunctionId {
        match self {
            Callback::Value(_) => FunctionId::CallbackValue,
            Callback::AllValue(_) => FunctionId::CallbackAllValue,
        }
    }

    /// Encode as a callback frame from device `uid`
    pub fn encode(&self, uid: u32) -> Result<Frame, ProtocolError> {
        let mut payload = Payload::new();
        match self {
            Callback::Value(cb) => push_bytes(
                &mut payload,
                &[u8::from(cb.channel), cb.changed as u8, cb.value as u8],
            )?,
            Callback::AllValue(cb) => push_bytes(&mut payload, &[cb.changed, cb.value])?,
        }

        let header = TfpHeader::callback(uid, self.function_id() as u8, payload.len());
        encode_frame(header, &payload)
    }
}

fn push_bytes<const N: usize>(buf: &mut Vec<u8, N>, bytes: &[u8]) -> Result<(), ProtocolError> {
    buf.extend_from_slice(bytes)
        .map_err(|_| ProtocolError::InvalidLength)
}

fn encode_frame(header: TfpHeader, payload: &[u8]) -> Result<Frame, ProtocolError> {
    let mut frame = Frame::new();
    header.write(&mut frame)?;
    push_bytes(&mut frame, payload)?;
    Ok(frame)
}

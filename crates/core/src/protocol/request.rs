//! Request decoding
//!
//! Channel and LED mode fields are kept as raw bytes here. Range validation
//! belongs to the dispatcher so that an out-of-range value is reported as
//! `InvalidParameter` without touching any state.

use super::{FunctionId, ProtocolError};

/// Decoded request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    GetValue,
    SetValueCallbackConfiguration {
        channel: u8,
        period_ms: u32,
        value_has_to_change: bool,
    },
    GetValueCallbackConfiguration {
        channel: u8,
    },
    SetAllValueCallbackConfiguration {
        period_ms: u32,
        value_has_to_change: bool,
    },
    GetAllValueCallbackConfiguration,
    SetChannelLedConfig {
        channel: u8,
        config: u8,
    },
    GetChannelLedConfig {
        channel: u8,
    },
}

impl Request {
    /// Payload size (without header) expected for `function_id`
    pub const fn payload_len(function_id: FunctionId) -> Option<usize> {
        match function_id {
            FunctionId::GetValue | FunctionId::GetAllValueCallbackConfiguration => Some(0),
            FunctionId::SetValueCallbackConfiguration => Some(6),
            FunctionId::GetValueCallbackConfiguration | FunctionId::GetChannelLedConfig => Some(1),
            FunctionId::SetAllValueCallbackConfiguration => Some(5),
            FunctionId::SetChannelLedConfig => Some(2),
            FunctionId::CallbackValue | FunctionId::CallbackAllValue => None,
        }
    }

    /// Decode the payload following the header
    pub fn decode(function_id: u8, payload: &[u8]) -> Result<Self, ProtocolError> {
        let function_id = FunctionId::try_from(function_id)?;
        if function_id.is_callback() {
            return Err(ProtocolError::NotSupported);
        }
        let expected = Self::payload_len(function_id).ok_or(ProtocolError::NotSupported)?;
        if payload.len() != expected {
            return Err(ProtocolError::InvalidLength);
        }

        Ok(match function_id {
            FunctionId::GetValue => Request::GetValue,
            FunctionId::SetValueCallbackConfiguration => Request::SetValueCallbackConfiguration {
                channel: payload[0],
                period_ms: read_u32(&payload[1..5]),
                value_has_to_change: payload[5] != 0,
            },
            FunctionId::GetValueCallbackConfiguration => {
                Request::GetValueCallbackConfiguration {
                    channel: payload[0],
                }
            }
            FunctionId::SetAllValueCallbackConfiguration => {
                Request::SetAllValueCallbackConfiguration {
                    period_ms: read_u32(&payload[0..4]),
                    value_has_to_change: payload[4] != 0,
                }
            }
            FunctionId::GetAllValueCallbackConfiguration => {
                Request::GetAllValueCallbackConfiguration
            }
            FunctionId::SetChannelLedConfig => Request::SetChannelLedConfig {
                channel: payload[0],
                config: payload[1],
            },
            FunctionId::GetChannelLedConfig => Request::GetChannelLedConfig {
                channel: payload[0],
            },
            FunctionId::CallbackValue | FunctionId::CallbackAllValue => {
                return Err(ProtocolError::NotSupported);
            }
        })
    }

    /// Function identifier of this request
    pub const fn function_id(&self) -> FunctionId {
        match self {
            Request::GetValue => FunctionId::GetValue,
            Request::SetValueCallbackConfiguration { .. } => {
                FunctionId::SetValueCallbackConfiguration
            }
            Request::GetValueCallbackConfiguration { .. } => {
                FunctionId::GetValueCallbackConfiguration
            }
            Request::SetAllValueCallbackConfiguration { .. } => {
                FunctionId::SetAllValueCallbackConfiguration
            }
            Request::GetAllValueCallbackConfiguration => {
                FunctionId::GetAllValueCallbackConfiguration
            }
            Request::SetChannelLedConfig { .. } => FunctionId::SetChannelLedConfig,
            Request::GetChannelLedConfig { .. } => FunctionId::GetChannelLedConfig,
        }
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

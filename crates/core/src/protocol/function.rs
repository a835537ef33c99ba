//! Function identifiers

use super::ProtocolError;

/// Function identifier carried in the message header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FunctionId {
    GetValue = 1,
    SetValueCallbackConfiguration = 2,
    GetValueCallbackConfiguration = 3,
    SetAllValueCallbackConfiguration = 4,
    GetAllValueCallbackConfiguration = 5,
    SetChannelLedConfig = 6,
    GetChannelLedConfig = 7,
    CallbackValue = 8,
    CallbackAllValue = 9,
}

impl FunctionId {
    /// `true` for identifiers only ever sent by the device
    pub const fn is_callback(self) -> bool {
        matches!(self, FunctionId::CallbackValue | FunctionId::CallbackAllValue)
    }
}

impl TryFrom<u8> for FunctionId {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => FunctionId::GetValue,
            2 => FunctionId::SetValueCallbackConfiguration,
            3 => FunctionId::GetValueCallbackConfiguration,
            4 => FunctionId::SetAllValueCallbackConfiguration,
            5 => FunctionId::GetAllValueCallbackConfiguration,
            6 => FunctionId::SetChannelLedConfig,
            7 => FunctionId::GetChannelLedConfig,
            8 => FunctionId::CallbackValue,
            9 => FunctionId::CallbackAllValue,
            _ => return Err(ProtocolError::NotSupported),
        })
    }
}

impl From<FunctionId> for u8 {
    fn from(id: FunctionId) -> Self {
        id as u8
    }
}

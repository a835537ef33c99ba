//! Channel LED modes

use crate::protocol::ProtocolError;

/// What a channel LED shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LedMode {
    /// Permanently off
    Off = 0,
    /// Permanently on
    On = 1,
    /// Heartbeat blink pattern
    ShowHeartbeat = 2,
    /// On while AC is present on the channel
    #[default]
    ShowChannelStatus = 3,
}

impl TryFrom<u8> for LedMode {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LedMode::Off),
            1 => Ok(LedMode::On),
            2 => Ok(LedMode::ShowHeartbeat),
            3 => Ok(LedMode::ShowChannelStatus),
            _ => Err(ProtocolError::InvalidParameter),
        }
    }
}

impl From<LedMode> for u8 {
    fn from(mode: LedMode) -> Self {
        mode as u8
    }
}

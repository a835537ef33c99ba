//! Protocol error types
//!
//! Provides the application-level error kinds and their on-wire encoding.

/// Errors from decoding or handling a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Out-of-range channel index or LED mode value
    InvalidParameter,
    /// Unknown function identifier
    NotSupported,
    /// Frame or payload length does not match the function
    InvalidLength,
}

impl ProtocolError {
    /// Error code carried in the response header
    pub const fn error_code(self) -> ErrorCode {
        match self {
            ProtocolError::InvalidParameter | ProtocolError::InvalidLength => {
                ErrorCode::InvalidParameter
            }
            ProtocolError::NotSupported => ErrorCode::FunctionNotSupported,
        }
    }
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolError::InvalidParameter => write!(f, "invalid parameter"),
            ProtocolError::NotSupported => write!(f, "function not supported"),
            ProtocolError::InvalidLength => write!(f, "invalid message length"),
        }
    }
}

/// Two-bit error code in the message header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ErrorCode {
    #[default]
    Success = 0,
    InvalidParameter = 1,
    FunctionNotSupported = 2,
    Unknown = 3,
}

impl ErrorCode {
    /// Decode from the two low bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => ErrorCode::Success,
            1 => ErrorCode::InvalidParameter,
            2 => ErrorCode::FunctionNotSupported,
            _ => ErrorCode::Unknown,
        }
    }
}

//! Message header
//!
//! Every frame starts with an 8 byte little-endian header:
//!
//! ```text
//! byte 0..4  uid            device unique id
//! byte 4     length         whole frame length including header
//! byte 5     function_id
//! byte 6     options        bits 4..7 sequence number, bit 3 response expected
//! byte 7     flags          bits 6..7 error code
//! ```

use super::{ErrorCode, Frame, ProtocolError};

/// Header size in bytes
pub const HEADER_SIZE: usize = 8;

const SEQUENCE_SHIFT: u8 = 4;
const RESPONSE_EXPECTED_BIT: u8 = 1 << 3;
const ERROR_CODE_SHIFT: u8 = 6;

/// Decoded message header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TfpHeader {
    pub uid: u32,
    pub length: u8,
    pub function_id: u8,
    pub sequence_number: u8,
    pub response_expected: bool,
    pub error_code: ErrorCode,
}

impl TfpHeader {
    /// Header for an unsolicited callback frame (sequence number 0)
    pub fn callback(uid: u32, function_id: u8, payload_len: usize) -> Self {
        Self {
            uid,
            length: (HEADER_SIZE + payload_len) as u8,
            function_id,
            sequence_number: 0,
            response_expected: true,
            error_code: ErrorCode::Success,
        }
    }

    /// Header answering this request
    ///
    /// Keeps uid, function id, sequence number and option bits of the request.
    pub fn reply(&self, payload_len: usize, error_code: ErrorCode) -> Self {
        Self {
            length: (HEADER_SIZE + payload_len) as u8,
            error_code,
            ..*self
        }
    }

    /// Decode the header of a complete frame
    ///
    /// The frame must be exactly as long as the header's `length` field.
    pub fn decode(frame: &[u8]) -> Result<Self, ProtocolError> {
        if frame.len() < HEADER_SIZE {
            return Err(ProtocolError::InvalidLength);
        }

        let length = frame[4];
        if (length as usize) < HEADER_SIZE || length as usize != frame.len() {
            return Err(ProtocolError::InvalidLength);
        }

        let options = frame[6];
        Ok(Self {
            uid: u32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]),
            length,
            function_id: frame[5],
            sequence_number: options >> SEQUENCE_SHIFT,
            response_expected: options & RESPONSE_EXPECTED_BIT != 0,
            error_code: ErrorCode::from_bits(frame[7] >> ERROR_CODE_SHIFT),
        })
    }

    /// Append the encoded header to `frame`
    pub fn write(&self, frame: &mut Frame) -> Result<(), ProtocolError> {
        let mut options = (self.sequence_number & 0x0F) << SEQUENCE_SHIFT;
        if self.response_expected {
            options |= RESPONSE_EXPECTED_BIT;
        }
        let flags = (self.error_code as u8) << ERROR_CODE_SHIFT;

        frame
            .extend_from_slice(&self.uid.to_le_bytes())
            .and_then(|_| frame.extend_from_slice(&[self.length, self.function_id, options, flags]))
            .map_err(|_| ProtocolError::InvalidLength)
    }
}

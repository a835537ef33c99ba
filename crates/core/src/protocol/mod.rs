//! Wire protocol
//!
//! Fixed-size little-endian records prefixed by an 8 byte header. The host
//! sends requests; the device answers with a response, an empty ack or an
//! error status, and pushes value callbacks on its own.
//!
//! | Function | Id | Request payload | Response payload |
//! |---|---|---|---|
//! | GetValue | 1 | - | value:u8 |
//! | SetValueCallbackConfiguration | 2 | channel:u8, period:u32, has_to_change:bool | - |
//! | GetValueCallbackConfiguration | 3 | channel:u8 | period:u32, has_to_change:bool |
//! | SetAllValueCallbackConfiguration | 4 | period:u32, has_to_change:bool | - |
//! | GetAllValueCallbackConfiguration | 5 | - | period:u32, has_to_change:bool |
//! | SetChannelLedConfig | 6 | channel:u8, config:u8 | - |
//! | GetChannelLedConfig | 7 | channel:u8 | config:u8 |
//! | ValueCallback | 8 | - | channel:u8, changed:bool, value:bool |
//! | AllValueCallback | 9 | - | changed:u8, value:u8 |

pub mod error;
pub mod function;
pub mod header;
pub mod request;
pub mod response;

pub use error::{ErrorCode, ProtocolError};
pub use function::FunctionId;
pub use header::{TfpHeader, HEADER_SIZE};
pub use request::Request;
pub use response::{
    encode_status, AllValueCallback, Callback, Frame, Response, ValueCallback, MAX_FRAME_SIZE,
};

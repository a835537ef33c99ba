//! Peripheral configuration
//!
//! Compile-time defaults for the device identity, callback polling and board
//! wiring. Callback periods and LED modes are runtime state owned by the
//! bricklet and start at their protocol defaults.

pub mod board;

pub use board::{BoardPinConfig, ChannelPins, PinError, BOARD_PINS};

use crate::core::callback::CALLBACK_TICK_WAIT_MS;

/// UID used when `DUAL_AC_IN_UID` is not set at build time
const FALLBACK_UID: u32 = 0x0000_2A4C;

/// Device UID (from build-time environment variable)
pub const DEFAULT_UID: u32 = match parse_uid(env!("DUAL_AC_IN_UID")) {
    Some(uid) => uid,
    None => FALLBACK_UID,
};

/// Parse a decimal UID at compile time
const fn parse_uid(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        value = match value.checked_mul(10) {
            Some(v) => v,
            None => return None,
        };
        value = match value.checked_add((b - b'0') as u32) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(value)
}

/// Bricklet configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickletConfig {
    /// UID carried in every outgoing frame
    pub uid: u32,
    /// Minimum interval between two callback scheduler runs
    pub callback_tick_wait_ms: u32,
    /// Board wiring record
    ///
    /// HAL pins are typed peripherals picked at compile time, so this does not
    /// select pins. Firmware checks the pins it built against it with
    /// `BoardPinConfig::check_wiring`.
    pub pins: BoardPinConfig,
}

impl Default for BrickletConfig {
    fn default() -> Self {
        Self {
            uid: DEFAULT_UID,
            callback_tick_wait_ms: CALLBACK_TICK_WAIT_MS,
            pins: BOARD_PINS,
        }
    }
}

impl BrickletConfig {
    /// Default configuration with a provisioned UID
    pub fn with_uid(uid: u32) -> Self {
        Self {
            uid,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrickletConfig::default();
        assert_eq!(config.uid, DEFAULT_UID);
        assert_eq!(config.callback_tick_wait_ms, 1);
        assert_eq!(config.pins, BOARD_PINS);
    }

    #[test]
    fn test_parse_uid() {
        assert_eq!(parse_uid("12345"), Some(12345));
        assert_eq!(parse_uid("4294967295"), Some(u32::MAX));
        assert_eq!(parse_uid("4294967296"), None);
        assert_eq!(parse_uid(""), None);
        assert_eq!(parse_uid("0x10"), None);
    }

    #[test]
    fn test_with_uid_keeps_defaults() {
        let config = BrickletConfig::with_uid(0xDEAD_BEEF);
        assert_eq!(config.uid, 0xDEAD_BEEF);
        assert_eq!(config.callback_tick_wait_ms, CALLBACK_TICK_WAIT_MS);
    }
}

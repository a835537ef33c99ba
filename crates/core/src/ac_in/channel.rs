//! Channel identifiers
//!
//! The peripheral has a fixed number of AC inputs. Channel indices arriving
//! over the wire are validated once, at the protocol boundary, by converting
//! them into [`Channel`].

use crate::protocol::ProtocolError;

/// Number of AC input channels
pub const AC_IN_CHANNEL_NUM: usize = 2;

/// AC input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Channel 0 (bit 0 in packed values)
    Ch0 = 0,
    /// Channel 1 (bit 1 in packed values)
    Ch1 = 1,
}

impl Channel {
    /// All channels in index order
    pub const ALL: [Channel; AC_IN_CHANNEL_NUM] = [Channel::Ch0, Channel::Ch1];

    /// Array index of this channel
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit of this channel in a packed value
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Next channel in round-robin order
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Channel::Ch0 => Channel::Ch1,
            Channel::Ch1 => Channel::Ch0,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Ch0),
            1 => Ok(Channel::Ch1),
            _ => Err(ProtocolError::InvalidParameter),
        }
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel as u8
    }
}

/// Packs per-channel values into a bitmask (channel 0 = bit 0)
pub fn pack_values(values: [bool; AC_IN_CHANNEL_NUM]) -> u8 {
    Channel::ALL
        .iter()
        .filter(|channel| values[channel.index()])
        .fold(0, |packed, channel| packed | channel.bit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_from_valid_index() {
        assert_eq!(Channel::try_from(0), Ok(Channel::Ch0));
        assert_eq!(Channel::try_from(1), Ok(Channel::Ch1));
    }

    #[test]
    fn channel_from_out_of_range_index() {
        assert_eq!(Channel::try_from(2), Err(ProtocolError::InvalidParameter));
        assert_eq!(Channel::try_from(255), Err(ProtocolError::InvalidParameter));
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(Channel::Ch0.next(), Channel::Ch1);
        assert_eq!(Channel::Ch1.next(), Channel::Ch0);
    }

    #[test]
    fn pack_values_uses_channel_bits() {
        assert_eq!(pack_values([false, false]), 0b00);
        assert_eq!(pack_values([true, false]), 0b01);
        assert_eq!(pack_values([false, true]), 0b10);
        assert_eq!(pack_values([true, true]), 0b11);
    }
}

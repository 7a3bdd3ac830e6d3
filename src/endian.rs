//! Byte order reversal for the fixed width integers and the structured
//! [Guid] layout.
//!
//! [Guid] values are kept in host-native field order, the same way the
//! console host stores its `GUID`s. Hashing and the textual form both need
//! the RFC 4122 network order instead, so the conversion happens explicitly
//! at those boundaries through [EndianSwap], [to_network_order] and
//! [from_network_order].

use crate::guid::Guid;

/// Reverses the byte order of a value.
///
/// Implementations are pure and total, and applying the swap twice yields the
/// original value.
pub trait EndianSwap: Sized {
    fn endian_swap(self) -> Self;
}

impl EndianSwap for u16 {
    fn endian_swap(self) -> Self {
        swap16(self)
    }
}

impl EndianSwap for u32 {
    fn endian_swap(self) -> Self {
        swap32(self)
    }
}

/// Swaps `data1`, `data2` and `data3` individually.
///
/// The 8 byte tail is a plain byte sequence in every layout and is left
/// untouched, so this is NOT a reversal of all 16 bytes.
impl EndianSwap for Guid {
    fn endian_swap(self) -> Self {
        swap_guid(self)
    }
}

pub const fn swap16(value: u16) -> u16 {
    (value & 0xFF00) >> 8 | (value & 0x00FF) << 8
}

pub const fn swap32(value: u32) -> u32 {
    (value & 0xFF00_0000) >> 24
        | (value & 0x00FF_0000) >> 8
        | (value & 0x0000_FF00) << 8
        | (value & 0x0000_00FF) << 24
}

pub const fn swap_guid(value: Guid) -> Guid {
    Guid {
        data1: swap32(value.data1),
        data2: swap16(value.data2),
        data3: swap16(value.data3),
        data4: value.data4,
    }
}

/// Converts a [Guid] from host-native field order to network order,
/// i.e. the order in which its memory image equals the RFC 4122 byte layout.
///
/// This is a swap on little-endian hosts and the identity elsewhere.
pub const fn to_network_order(value: Guid) -> Guid {
    if cfg!(target_endian = "little") {
        swap_guid(value)
    } else {
        value
    }
}

/// Inverse of [to_network_order].
pub const fn from_network_order(value: Guid) -> Guid {
    to_network_order(value)
}

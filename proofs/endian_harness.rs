#![cfg(kani)]

use crate::endian::EndianSwap;
use crate::guid::Guid;

#[kani::proof]
fn swap16_involution() {
    let value: u16 = kani::any();
    assert_eq!(value.endian_swap().endian_swap(), value);
    assert_eq!(value.endian_swap(), value.swap_bytes());
}

#[kani::proof]
fn swap32_involution() {
    let value: u32 = kani::any();
    assert_eq!(value.endian_swap().endian_swap(), value);
    assert_eq!(value.endian_swap(), value.swap_bytes());
}

#[kani::proof]
fn guid_swap_keeps_tail() {
    let raw: [u8; 16] = kani::any();
    let guid = Guid::from_native_bytes(raw);
    let swapped = guid.endian_swap();
    assert_eq!(swapped.data4, guid.data4);
    assert_eq!(swapped.endian_swap(), guid);
}

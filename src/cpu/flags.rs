//! Bit positions within the flag register (`F`).

/// Carry (bit 0).
pub const C: u8 = 0b0000_0001;
/// Add/subtract: 0 after an add-like op, 1 after a subtract-like op (bit 1).
pub const N: u8 = 0b0000_0010;
/// Parity/overflow, dual-use (bit 2).
pub const PV: u8 = 0b0000_0100;
/// Undocumented: copy of result bit 3 (bit 3).
pub const F3: u8 = 0b0000_1000;
/// Half-carry, bit 3->4 (8-bit) or bit 11->12 (16-bit) (bit 4).
pub const H: u8 = 0b0001_0000;
/// Undocumented: copy of result bit 5 (bit 5).
pub const F5: u8 = 0b0010_0000;
/// Zero (bit 6).
pub const Z: u8 = 0b0100_0000;
/// Sign: copy of the result's top bit (bit 7).
pub const S: u8 = 0b1000_0000;

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Base-26 packing of lowercase codes
//!
//! Each letter is a digit (`a` = 0 .. `z` = 25), most significant first, so
//! every three-letter code maps to a distinct integer below 26³.

const BASE: u32 = (b'z' - b'a' + 1) as u32;

/// Number of distinct three-letter codes.
pub const PACKED3_LIMIT: u32 = BASE * BASE * BASE;

/// Packs a lowercase ASCII string. The caller guarantees every byte is in
/// `a..=z`.
pub const fn pack(s: &[u8]) -> u32 {
    let mut v = 0;
    let mut i = 0;
    while i < s.len() {
        v = v * BASE + (s[i] - b'a') as u32;
        i += 1;
    }
    v
}

pub const fn pack3(s: &[u8; 3]) -> u32 {
    pack(s)
}

/// Writes the code for `v` into `out`, filling it from the last byte backward.
/// `out.len()` must equal the length of the string that was packed.
pub fn unpack(mut v: u32, out: &mut [u8]) {
    for b in out.iter_mut().rev() {
        *b = (v % BASE) as u8 + b'a';
        v /= BASE;
    }
}

pub fn unpack3(v: u32) -> [u8; 3] {
    let mut out = [0u8; 3];
    unpack(v, &mut out);
    out
}

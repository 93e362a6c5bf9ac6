// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer helpers shared by the SIV crates.
//!
//! Comparisons of authentication tags go through [`constant_time_eq`] so that
//! timing does not depend on the position of the first differing byte.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal. The length itself is not
/// treated as secret.
///
/// # Example
///
/// ```
/// use siv_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Verifies that every byte of a slice is zero.
///
/// # Example
///
/// ```
/// use siv_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes.
///
/// ASCII whitespace is skipped, so vectors can be pasted in the grouped form
/// used by RFC appendices (`"85632d07 c6e8f37f"`).
///
/// # Panics
///
/// Panics on non-hex characters or an odd number of digits.
///
/// # Example
///
/// ```
/// use siv_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("dead beef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u8> = hex
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .chunks(2)
        .map(|pair| {
            let pair = core::str::from_utf8(pair).expect("hex digits must be ASCII");
            u8::from_str_radix(pair, 16).expect("invalid hex digit")
        })
        .collect()
}

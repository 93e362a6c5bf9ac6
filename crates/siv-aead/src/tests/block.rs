// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for block arithmetic

use crate::block::{double_block, pad, xor_block, xor_blocks};
use crate::consts::BLOCK_SIZE;

use super::helpers::{a1, a2, hex_block};

// =============================================================================
// double_block()
// =============================================================================

#[test]
fn test_double_block_without_carry_is_plain_shift() {
    // RFC 4493 Section 2.4: L -> K1
    let l = hex_block("7df76b0c 1ab899b3 3e42f047 b91b546f");
    let k1 = hex_block("fbeed618 35713366 7c85e08f 7236a8de");

    assert_eq!(double_block(&l), k1);
}

#[test]
fn test_double_block_with_carry_applies_reduction() {
    // RFC 4493 Section 2.4: K1 -> K2
    let k1 = hex_block("fbeed618 35713366 7c85e08f 7236a8de");
    let k2 = hex_block("f7ddac30 6ae266cc f90bc11e e46d513b");

    assert_eq!(double_block(&k1), k2);
}

#[test]
fn test_double_block_rfc5297_a1_intermediate() {
    let d = hex_block(a1::CMAC_ZERO);
    let expected = hex_block("1c09bf5f 83df7e08 0280b050 b37e0e74");

    assert_eq!(double_block(&d), expected);
}

#[test]
fn test_double_block_rfc5297_a2_intermediate() {
    let d = hex_block(a2::CMAC_ZERO);
    let expected = hex_block("916876b2 e92c1cf9 cd4bbb0a 463cb2b3");

    assert_eq!(double_block(&d), expected);
}

#[test]
fn test_double_block_edge_values() {
    let zero = [0u8; BLOCK_SIZE];
    assert_eq!(double_block(&zero), zero);

    let mut top_bit = [0u8; BLOCK_SIZE];
    top_bit[0] = 0x80;
    let mut reduced = [0u8; BLOCK_SIZE];
    reduced[BLOCK_SIZE - 1] = 0x87;
    assert_eq!(double_block(&top_bit), reduced);

    let mut low_bit = [0u8; BLOCK_SIZE];
    low_bit[BLOCK_SIZE - 1] = 0x01;
    let mut shifted = [0u8; BLOCK_SIZE];
    shifted[BLOCK_SIZE - 1] = 0x02;
    assert_eq!(double_block(&low_bit), shifted);
}

#[test]
fn test_double_block_carries_across_bytes() {
    let mut block = [0u8; BLOCK_SIZE];
    block[7] = 0x80;

    let mut expected = [0u8; BLOCK_SIZE];
    expected[6] = 0x01;

    assert_eq!(double_block(&block), expected);
}

// =============================================================================
// pad()
// =============================================================================

#[test]
fn test_pad_empty() {
    let mut expected = [0u8; BLOCK_SIZE];
    expected[0] = 0x80;

    assert_eq!(pad(&[]), expected);
}

#[test]
fn test_pad_partial() {
    let padded = pad(&[0xaa, 0xbb, 0xcc]);

    assert_eq!(&padded[..3], &[0xaa, 0xbb, 0xcc]);
    assert_eq!(padded[3], 0x80);
    assert!(padded[4..].iter().all(|&b| b == 0));
}

#[test]
fn test_pad_fifteen_bytes() {
    let input = [0x11u8; BLOCK_SIZE - 1];
    let padded = pad(&input);

    assert_eq!(&padded[..BLOCK_SIZE - 1], &input);
    assert_eq!(padded[BLOCK_SIZE - 1], 0x80);
}

#[test]
#[should_panic(expected = "pad() takes fewer than")]
fn test_pad_full_block_panics() {
    let _ = pad(&[0u8; BLOCK_SIZE]);
}

// =============================================================================
// xor_block() / xor_blocks()
// =============================================================================

#[test]
fn test_xor_blocks() {
    let a = [0xf0u8; BLOCK_SIZE];
    let b = [0x0fu8; BLOCK_SIZE];

    assert_eq!(xor_blocks(&a, &b), [0xffu8; BLOCK_SIZE]);
    assert_eq!(xor_blocks(&a, &a), [0u8; BLOCK_SIZE]);
}

#[test]
fn test_xor_block_in_place() {
    let mut dst = hex_block(a1::CMAC_ZERO);
    let src = dst;
    xor_block(&mut dst, &src);

    assert_eq!(dst, [0u8; BLOCK_SIZE]);
}

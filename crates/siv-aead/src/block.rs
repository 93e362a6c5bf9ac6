// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 128-bit block arithmetic shared by CMAC and S2V.

use crate::consts::BLOCK_SIZE;
use crate::types::Block;

/// Reduction constant for x^128 + x^7 + x^2 + x + 1
const R128: u128 = 0x87;

/// XOR `src` into `dst`.
#[inline(always)]
pub fn xor_block(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// XOR two blocks, returning a new block.
#[inline(always)]
pub fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    xor_block(&mut out, b);
    out
}

/// Multiplication by x in GF(2^128), big-endian (RFC 5297 `dbl`).
///
/// The reduction is selected with a mask rather than a branch, so timing does
/// not depend on the top bit of the input.
#[inline]
pub fn double_block(block: &Block) -> Block {
    let value = u128::from_be_bytes(*block);
    let mask = 0u128.wrapping_sub(value >> 127);

    ((value << 1) ^ (mask & R128)).to_be_bytes()
}

/// Pads a partial block: `partial || 0x80 || 0x00...`.
///
/// # Panics
///
/// Panics if `partial` is a full block or longer.
#[inline]
pub fn pad(partial: &[u8]) -> Block {
    assert!(
        partial.len() < BLOCK_SIZE,
        "pad() takes fewer than {BLOCK_SIZE} bytes, got {}",
        partial.len()
    );

    let mut out = [0u8; BLOCK_SIZE];
    out[..partial.len()].copy_from_slice(partial);
    out[partial.len()] = 0x80;
    out
}

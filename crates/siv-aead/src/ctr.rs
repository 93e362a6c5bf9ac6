// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CTR keystream for SIV.
//!
//! The counter is the whole 128-bit block, big-endian, incremented modulo
//! 2^128. SIV clears bits 63 and 31 of the starting value, which keeps the low
//! 32-bit words from carrying for any message shorter than 2^32 blocks.

use zeroize::Zeroize;

use crate::cipher::BlockCipher;
use crate::consts::BLOCK_SIZE;
use crate::types::{Block, Siv};

/// Turns a synthetic IV into the CTR starting block (`Q = V & 1^64 0^1 1^31 0^1 1^31`).
#[inline]
pub fn siv_to_counter(siv: &Siv) -> Block {
    let mut counter = *siv;
    counter[8] &= 0x7f;
    counter[12] &= 0x7f;
    counter
}

/// XORs the CTR keystream starting at `initial_counter` into `data`.
///
/// Encryption and decryption are the same operation. A trailing partial block
/// uses only the leading keystream bytes; empty `data` is left untouched.
pub fn apply_keystream<C: BlockCipher>(cipher: &C, initial_counter: &Block, data: &mut [u8]) {
    let mut counter = u128::from_be_bytes(*initial_counter);
    let mut keystream = [0u8; BLOCK_SIZE];

    for chunk in data.chunks_mut(BLOCK_SIZE) {
        keystream = counter.to_be_bytes();
        cipher.encrypt_block(&mut keystream);

        for (byte, key) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= key;
        }

        counter = counter.wrapping_add(1);
    }

    keystream.zeroize();
    counter.zeroize();
}

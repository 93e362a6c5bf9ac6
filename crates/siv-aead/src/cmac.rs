// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CMAC (RFC 4493 / NIST SP 800-38B).
//!
//! [`Cmac`] holds a keyed cipher plus the two derived subkeys. Subkeys are
//! zeroized on drop; the key schedule is zeroized by the `aes` crate itself.
//!
//! Messages can be fed in one call ([`Cmac::mac`]) or incrementally through a
//! [`CmacState`], which S2V uses to MAC `prefix || (tail ^ D)` without
//! concatenating the payload into a new buffer.

use core::fmt;

use aes::Aes128;
use zeroize::Zeroize;

use crate::block::{double_block, pad, xor_block, xor_blocks};
use crate::cipher::BlockCipher;
use crate::consts::BLOCK_SIZE;
use crate::error::SivError;
use crate::types::Block;

/// Keyed CMAC instance.
pub struct Cmac<C: BlockCipher> {
    cipher: C,
    k1: Block,
    k2: Block,
}

impl<C: BlockCipher> Cmac<C> {
    /// Keys a new CMAC instance.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::InvalidKeySize`] if `key.len() != C::KEY_SIZE`.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        Ok(Self::from_cipher(C::new(key)?))
    }

    /// Derives the subkeys from an already keyed cipher.
    ///
    /// `K1 = dbl(E(K, 0^128))`, `K2 = dbl(K1)`.
    pub fn from_cipher(cipher: C) -> Self {
        let mut l = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut l);

        let k1 = double_block(&l);
        let k2 = double_block(&k1);
        l.zeroize();

        Self { cipher, k1, k2 }
    }

    /// Starts an incremental computation.
    pub fn start(&self) -> CmacState<'_, C> {
        CmacState {
            cmac: self,
            x: [0u8; BLOCK_SIZE],
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// Computes the tag of `message` in one call.
    pub fn mac(&self, message: &[u8]) -> Block {
        let mut state = self.start();
        state.update(message);
        state.finalize()
    }
}

impl<C: BlockCipher> Drop for Cmac<C> {
    fn drop(&mut self) {
        self.k1.zeroize();
        self.k2.zeroize();
    }
}

impl<C: BlockCipher> fmt::Debug for Cmac<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cmac")
            .field("cipher", &C::NAME)
            .field("subkeys", &"[protected]")
            .finish()
    }
}

/// In-progress CMAC computation.
///
/// The last block seen is always held back in `buffer`: CMAC treats the final
/// block differently (K1 if complete, padding plus K2 otherwise), and whether a
/// block is final is only known at [`CmacState::finalize`].
pub struct CmacState<'a, C: BlockCipher> {
    cmac: &'a Cmac<C>,
    x: Block,
    buffer: Block,
    buffered: usize,
}

impl<C: BlockCipher> CmacState<'_, C> {
    /// Absorbs `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.buffered == BLOCK_SIZE {
                xor_block(&mut self.x, &self.buffer);
                self.cmac.cipher.encrypt_block(&mut self.x);
                self.buffered = 0;
            }

            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
        }
    }

    /// Processes the held-back block and returns the tag.
    pub fn finalize(mut self) -> Block {
        let mut last = if self.buffered == BLOCK_SIZE {
            xor_blocks(&self.buffer, &self.cmac.k1)
        } else {
            let mut padded = pad(&self.buffer[..self.buffered]);
            xor_block(&mut padded, &self.cmac.k2);
            padded
        };

        xor_block(&mut self.x, &last);
        self.cmac.cipher.encrypt_block(&mut self.x);
        last.zeroize();

        self.x
    }
}

impl<C: BlockCipher> Drop for CmacState<'_, C> {
    fn drop(&mut self) {
        self.x.zeroize();
        self.buffer.zeroize();
    }
}

/// AES-128-CMAC of `message` under `key`.
pub fn cmac(key: &[u8; 16], message: &[u8]) -> Block {
    let cipher = <Aes128 as BlockCipher>::new(key).expect("infallible: key is exactly 16 bytes");

    Cmac::from_cipher(cipher).mac(message)
}

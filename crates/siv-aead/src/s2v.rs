// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! S2V: CMAC over a vector of strings (RFC 5297 Section 2.4).
//!
//! ```text
//! D = CMAC(K, 0^128)
//! for each component Si:   D = dbl(D) ^ CMAC(K, Si)
//! if len(P) >= 16:         T = P xorend D
//! else:                    T = dbl(D) ^ pad(P)
//! return CMAC(K, T)
//! ```
//!
//! Component order is significant: swapping two associated-data strings
//! changes the output.

use core::fmt;

use aes::Aes128;
use zeroize::Zeroize;

use crate::block::{double_block, pad, xor_block};
use crate::cipher::BlockCipher;
use crate::cmac::Cmac;
use crate::consts::BLOCK_SIZE;
use crate::error::SivError;
use crate::types::Block;

const ZERO_BLOCK: Block = [0u8; BLOCK_SIZE];

/// Keyed S2V instance.
pub struct S2v<C: BlockCipher> {
    cmac: Cmac<C>,
}

impl<C: BlockCipher> S2v<C> {
    /// Keys S2V with the MAC half of an AES-SIV key.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::InvalidKeySize`] if `key.len() != C::KEY_SIZE`.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        Ok(Self {
            cmac: Cmac::new(key)?,
        })
    }

    /// S2V over `components` followed by `payload`.
    ///
    /// No limit is enforced on the number of components here; the AES-SIV
    /// facade rejects anything beyond [`MAX_ASSOCIATED_DATA`](crate::MAX_ASSOCIATED_DATA).
    pub fn compute(&self, components: &[&[u8]], payload: &[u8]) -> Block {
        self.chain(components.iter().copied(), payload)
    }

    pub(crate) fn chain<'c, I>(&self, components: I, payload: &[u8]) -> Block
    where
        I: IntoIterator<Item = &'c [u8]>,
    {
        let mut d = self.cmac.mac(&ZERO_BLOCK);

        for component in components {
            let mut mac = self.cmac.mac(component);
            d = double_block(&d);
            xor_block(&mut d, &mac);
            mac.zeroize();
        }

        let tag = if payload.len() >= BLOCK_SIZE {
            let (head, tail) = payload.split_at(payload.len() - BLOCK_SIZE);

            let mut last = [0u8; BLOCK_SIZE];
            last.copy_from_slice(tail);
            xor_block(&mut last, &d);

            let mut state = self.cmac.start();
            state.update(head);
            state.update(&last);
            last.zeroize();

            state.finalize()
        } else {
            let mut t = double_block(&d);
            xor_block(&mut t, &pad(payload));
            let tag = self.cmac.mac(&t);
            t.zeroize();

            tag
        };

        d.zeroize();

        tag
    }
}

impl<C: BlockCipher> fmt::Debug for S2v<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S2v")
            .field("cipher", &C::NAME)
            .field("key", &"[protected]")
            .finish()
    }
}

/// AES-128 S2V of `associated` followed by `payload` under `key1`.
pub fn s2v(key1: &[u8; 16], associated: &[&[u8]], payload: &[u8]) -> Block {
    let s2v = S2v::<Aes128>::new(key1).expect("infallible: key is exactly 16 bytes");

    s2v.compute(associated, payload)
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher seam.
//!
//! CMAC, S2V and CTR only ever need the forward direction of a 128-bit block
//! cipher. A keyed instance is immutable: encryption takes `&self`, so one
//! instance can serve concurrent callers without synchronization.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256};

use crate::error::SivError;
use crate::types::Block;

/// Forward direction of a 128-bit block cipher.
pub trait BlockCipher: Sized {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Human-readable algorithm name (used by `Debug` impls instead of key material)
    const NAME: &'static str;

    /// Runs the key schedule.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::InvalidKeySize`] if `key.len() != Self::KEY_SIZE`.
    fn new(key: &[u8]) -> Result<Self, SivError>;

    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut Block);
}

macro_rules! impl_block_cipher {
    ($cipher:ty, $key_size:expr, $name:expr) => {
        impl BlockCipher for $cipher {
            const KEY_SIZE: usize = $key_size;
            const NAME: &'static str = $name;

            fn new(key: &[u8]) -> Result<Self, SivError> {
                <$cipher as KeyInit>::new_from_slice(key)
                    .map_err(|_| SivError::InvalidKeySize { actual: key.len() })
            }

            #[inline(always)]
            fn encrypt_block(&self, block: &mut Block) {
                BlockEncrypt::encrypt_block(self, GenericArray::from_mut_slice(block));
            }
        }
    };
}

impl_block_cipher!(Aes128, 16, "AES-128");
impl_block_cipher!(Aes256, 32, "AES-256");

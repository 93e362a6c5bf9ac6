// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-SIV with the variant picked at runtime from the key length.

use alloc::vec::Vec;

use crate::error::SivError;
use crate::siv::{Aes128Siv, Aes256Siv};
use crate::types::Siv;

/// AES-SIV instance whose variant follows the key length.
///
/// | key length | variant       |
/// |------------|---------------|
/// | 32 bytes   | [`Aes128Siv`] |
/// | 64 bytes   | [`Aes256Siv`] |
#[derive(Debug)]
pub enum SivKey {
    /// AES-SIV-CMAC-256
    Aes128(Aes128Siv),
    /// AES-SIV-CMAC-512
    Aes256(Aes256Siv),
}

impl SivKey {
    /// Keys the variant matching `key.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::InvalidKeySize`] for any length other than 32 or 64.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        if key.len() == Aes128Siv::KEY_SIZE {
            Ok(Self::Aes128(Aes128Siv::new(key)?))
        } else if key.len() == Aes256Siv::KEY_SIZE {
            Ok(Self::Aes256(Aes256Siv::new(key)?))
        } else {
            Err(SivError::InvalidKeySize { actual: key.len() })
        }
    }

    /// Key length in bytes of the selected variant.
    pub fn key_size(&self) -> usize {
        match self {
            Self::Aes128(_) => Aes128Siv::KEY_SIZE,
            Self::Aes256(_) => Aes256Siv::KEY_SIZE,
        }
    }

    /// See [`AesSiv::encrypt`](crate::AesSiv::encrypt).
    pub fn encrypt(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        match self {
            Self::Aes128(siv) => siv.encrypt(associated, nonce, plaintext),
            Self::Aes256(siv) => siv.encrypt(associated, nonce, plaintext),
        }
    }

    /// See [`AesSiv::decrypt`](crate::AesSiv::decrypt).
    pub fn decrypt(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        input: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        match self {
            Self::Aes128(siv) => siv.decrypt(associated, nonce, input),
            Self::Aes256(siv) => siv.decrypt(associated, nonce, input),
        }
    }

    /// See [`AesSiv::encrypt_in_place`](crate::AesSiv::encrypt_in_place).
    pub fn encrypt_in_place(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        data: &mut [u8],
    ) -> Result<Siv, SivError> {
        match self {
            Self::Aes128(siv) => siv.encrypt_in_place(associated, nonce, data),
            Self::Aes256(siv) => siv.encrypt_in_place(associated, nonce, data),
        }
    }

    /// See [`AesSiv::decrypt_in_place`](crate::AesSiv::decrypt_in_place).
    pub fn decrypt_in_place(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        siv: &Siv,
        data: &mut [u8],
    ) -> Result<(), SivError> {
        match self {
            Self::Aes128(inner) => inner.decrypt_in_place(associated, nonce, siv, data),
            Self::Aes256(inner) => inner.decrypt_in_place(associated, nonce, siv, data),
        }
    }
}

/// One-shot AES-SIV encryption; the variant follows `key.len()` (32 or 64).
///
/// Returns `SIV || ciphertext`.
///
/// # Errors
///
/// - [`SivError::InvalidKeySize`]: key is neither 32 nor 64 bytes
/// - [`SivError::TooManyComponents`]: too many associated-data components
pub fn aes_siv_encrypt(
    key: &[u8],
    associated: &[&[u8]],
    nonce: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, SivError> {
    SivKey::new(key)?.encrypt(associated, nonce, plaintext)
}

/// One-shot AES-SIV decryption of `SIV || ciphertext`.
///
/// # Errors
///
/// - [`SivError::InvalidKeySize`]: key is neither 32 nor 64 bytes
/// - [`SivError::InputTooShort`]: input shorter than one block
/// - [`SivError::TooManyComponents`]: too many associated-data components
/// - [`SivError::AuthenticationFailed`]: the synthetic IV does not verify
pub fn aes_siv_decrypt(
    key: &[u8],
    associated: &[&[u8]],
    nonce: &[u8],
    input: &[u8],
) -> Result<Vec<u8>, SivError> {
    SivKey::new(key)?.decrypt(associated, nonce, input)
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-SIV authenticated encryption (RFC 5297 Section 2.6 / 2.7).
//!
//! The key is split in two halves: the first keys S2V (authentication), the
//! second keys CTR (confidentiality). Output is `SIV || C` where the SIV is
//! both the tag and the CTR starting state.
//!
//! Nonce-based use: a non-empty nonce is appended as the last associated-data
//! component. An empty nonce selects deterministic mode.

use alloc::vec::Vec;
use core::fmt;

use aes::{Aes128, Aes256};
use zeroize::Zeroize;

use siv_util::constant_time_eq;

use crate::cipher::BlockCipher;
use crate::consts::{MAX_ASSOCIATED_DATA, SIV_SIZE};
use crate::ctr::{apply_keystream, siv_to_counter};
use crate::error::SivError;
use crate::s2v::S2v;
use crate::types::Siv;

/// AES-SIV with a 256-bit key (two AES-128 halves).
pub type Aes128Siv = AesSiv<Aes128>;

/// AES-SIV with a 512-bit key (two AES-256 halves).
pub type Aes256Siv = AesSiv<Aes256>;

/// Keyed AES-SIV instance.
///
/// Immutable once constructed; every operation takes `&self`.
pub struct AesSiv<C: BlockCipher> {
    s2v: S2v<C>,
    ctr: C,
}

impl<C: BlockCipher> AesSiv<C> {
    /// Full key size in bytes (MAC half plus encryption half)
    pub const KEY_SIZE: usize = 2 * C::KEY_SIZE;

    /// Keys AES-SIV.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::InvalidKeySize`] if `key.len() != Self::KEY_SIZE`.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        if key.len() != Self::KEY_SIZE {
            return Err(SivError::InvalidKeySize { actual: key.len() });
        }

        let (mac_key, enc_key) = key.split_at(C::KEY_SIZE);

        Ok(Self {
            s2v: S2v::new(mac_key)?,
            ctr: C::new(enc_key)?,
        })
    }

    /// Encrypts `data` in place and returns the synthetic IV.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::TooManyComponents`] if `associated` plus the nonce
    /// exceed [`MAX_ASSOCIATED_DATA`]. `data` is untouched in that case.
    pub fn encrypt_in_place(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        data: &mut [u8],
    ) -> Result<Siv, SivError> {
        check_components(associated, nonce)?;

        Ok(self.seal(associated, nonce, data))
    }

    /// Decrypts `data` in place and verifies it against `siv`.
    ///
    /// # Errors
    ///
    /// - [`SivError::TooManyComponents`]: `data` is untouched
    /// - [`SivError::AuthenticationFailed`]: `data` is zeroized
    pub fn decrypt_in_place(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        siv: &Siv,
        data: &mut [u8],
    ) -> Result<(), SivError> {
        check_components(associated, nonce)?;

        self.open(associated, nonce, siv, data)
    }

    /// Encrypts `plaintext`, returning `SIV || ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns [`SivError::TooManyComponents`] if `associated` plus the nonce
    /// exceed [`MAX_ASSOCIATED_DATA`].
    pub fn encrypt(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        check_components(associated, nonce)?;

        let mut output = Vec::with_capacity(SIV_SIZE + plaintext.len());
        output.extend_from_slice(&[0u8; SIV_SIZE]);
        output.extend_from_slice(plaintext);

        let (siv_out, data) = output.split_at_mut(SIV_SIZE);
        let siv = self.seal(associated, nonce, data);
        siv_out.copy_from_slice(&siv);

        Ok(output)
    }

    /// Decrypts `SIV || ciphertext`, returning the plaintext.
    ///
    /// Nothing is returned unless the synthetic IV verifies.
    ///
    /// # Errors
    ///
    /// - [`SivError::InputTooShort`]: `input` is shorter than [`SIV_SIZE`]
    /// - [`SivError::TooManyComponents`]: too many associated-data components
    /// - [`SivError::AuthenticationFailed`]: tampered input, wrong key, wrong
    ///   associated data or wrong nonce
    pub fn decrypt(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        input: &[u8],
    ) -> Result<Vec<u8>, SivError> {
        if input.len() < SIV_SIZE {
            return Err(SivError::InputTooShort {
                actual: input.len(),
            });
        }

        check_components(associated, nonce)?;

        let (siv_in, ciphertext) = input.split_at(SIV_SIZE);
        let mut siv = [0u8; SIV_SIZE];
        siv.copy_from_slice(siv_in);

        let mut plaintext = ciphertext.to_vec();
        self.open(associated, nonce, &siv, &mut plaintext)?;

        Ok(plaintext)
    }

    fn synthetic_iv(&self, associated: &[&[u8]], nonce: &[u8], plaintext: &[u8]) -> Siv {
        let nonce = (!nonce.is_empty()).then_some(nonce);

        self.s2v
            .chain(associated.iter().copied().chain(nonce), plaintext)
    }

    fn seal(&self, associated: &[&[u8]], nonce: &[u8], data: &mut [u8]) -> Siv {
        let siv = self.synthetic_iv(associated, nonce, data);

        let mut counter = siv_to_counter(&siv);
        apply_keystream(&self.ctr, &counter, data);
        counter.zeroize();

        siv
    }

    fn open(
        &self,
        associated: &[&[u8]],
        nonce: &[u8],
        siv: &Siv,
        data: &mut [u8],
    ) -> Result<(), SivError> {
        let mut counter = siv_to_counter(siv);
        apply_keystream(&self.ctr, &counter, data);
        counter.zeroize();

        let mut expected = self.synthetic_iv(associated, nonce, data);
        let is_authentic = constant_time_eq(&expected, siv);
        expected.zeroize();

        if !is_authentic {
            data.zeroize();
            return Err(SivError::AuthenticationFailed);
        }

        Ok(())
    }
}

impl<C: BlockCipher> fmt::Debug for AesSiv<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesSiv")
            .field("cipher", &C::NAME)
            .field("key", &"[protected]")
            .finish()
    }
}

fn check_components(associated: &[&[u8]], nonce: &[u8]) -> Result<(), SivError> {
    let count = associated.len() + usize::from(!nonce.is_empty());

    if count > MAX_ASSOCIATED_DATA {
        return Err(SivError::TooManyComponents { count });
    }

    Ok(())
}

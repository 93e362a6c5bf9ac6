// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Nonce-based AES-SIV as NTS uses it.
//!
//! Each sealed message gets a fresh 16-byte nonce. The associated data is the
//! NTP header plus every extension field preceding the NTS Authenticator, so
//! it is always passed as a single component.

use alloc::vec::Vec;
use core::fmt;

use siv_rand::{EntropySource, NonceGenerator, NonceSessionGenerator};

use crate::algorithm::AeadAlgorithm;
use crate::error::NtsError;
use crate::key::NtsKey;

/// Nonce size drawn for every sealed message
pub const NONCE_SIZE: usize = 16;

/// Output of [`NtsAead::seal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Nonce the message was sealed with
    pub nonce: [u8; NONCE_SIZE],
    /// `SIV || ciphertext`
    pub ciphertext: Vec<u8>,
}

/// AEAD operations an NTS client or server needs.
pub trait NtsAead {
    /// Algorithm in use.
    fn algorithm(&self) -> AeadAlgorithm;

    /// Seals `plaintext` under a fresh nonce.
    ///
    /// # Errors
    ///
    /// - [`NtsError::Entropy`]: no nonce could be drawn
    /// - [`NtsError::Siv`]: AES-SIV rejected the input
    fn seal(&mut self, associated: &[u8], plaintext: &[u8]) -> Result<Sealed, NtsError>;

    /// Opens `SIV || ciphertext` sealed with `nonce`.
    ///
    /// # Errors
    ///
    /// Returns `NtsError::Siv(SivError::AuthenticationFailed)` for any
    /// tampered packet, wrong key or wrong associated data.
    fn open(&self, associated: &[u8], nonce: &[u8], ciphertext: &[u8])
    -> Result<Vec<u8>, NtsError>;
}

/// [`NtsAead`] backed by this workspace's AES-SIV.
pub struct NtsCipher<E: EntropySource> {
    key: NtsKey,
    nonces: NonceSessionGenerator<E, NONCE_SIZE>,
}

impl<E: EntropySource> NtsCipher<E> {
    /// Creates a cipher drawing nonces from `entropy`.
    pub fn new(key: NtsKey, entropy: E) -> Self {
        Self {
            key,
            nonces: NonceSessionGenerator::new(entropy),
        }
    }

    /// Key this cipher was created with.
    pub fn key(&self) -> &NtsKey {
        &self.key
    }
}

impl<E: EntropySource> NtsAead for NtsCipher<E> {
    fn algorithm(&self) -> AeadAlgorithm {
        self.key.algorithm()
    }

    fn seal(&mut self, associated: &[u8], plaintext: &[u8]) -> Result<Sealed, NtsError> {
        let nonce = self.nonces.generate_nonce()?;
        let ciphertext = self.key.siv().encrypt(&[associated], &nonce, plaintext)?;

        log::trace!(
            "sealed {} bytes ({} bytes associated) with {}",
            plaintext.len(),
            associated.len(),
            self.key.algorithm()
        );

        Ok(Sealed { nonce, ciphertext })
    }

    fn open(
        &self,
        associated: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, NtsError> {
        self.key
            .siv()
            .decrypt(&[associated], nonce, ciphertext)
            .map_err(|err| {
                log::debug!(
                    "rejected {} byte ciphertext ({} bytes associated) with {}: {}",
                    ciphertext.len(),
                    associated.len(),
                    self.key.algorithm(),
                    err
                );
                NtsError::from(err)
            })
    }
}

impl<E: EntropySource> fmt::Debug for NtsCipher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NtsCipher")
            .field("algorithm", &self.key.algorithm())
            .field("key", &"[protected]")
            .finish()
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use siv_aead::SivKey;

use crate::algorithm::AeadAlgorithm;
use crate::error::NtsError;

/// AES-SIV key bound to the algorithm it was negotiated for.
///
/// Typically one of the C2S / S2C keys exported from the NTS-KE TLS session.
#[derive(Debug)]
pub struct NtsKey {
    algorithm: AeadAlgorithm,
    siv: SivKey,
}

impl NtsKey {
    /// Keys AES-SIV for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`NtsError::KeyLengthMismatch`] if `key.len()` differs from
    /// [`AeadAlgorithm::key_length`].
    pub fn new(algorithm: AeadAlgorithm, key: &[u8]) -> Result<Self, NtsError> {
        if key.len() != algorithm.key_length() {
            return Err(NtsError::KeyLengthMismatch {
                algorithm: algorithm.name(),
                expected: algorithm.key_length(),
                actual: key.len(),
            });
        }

        Ok(Self {
            algorithm,
            siv: SivKey::new(key)?,
        })
    }

    /// Keys AES-SIV for a raw IANA algorithm id.
    ///
    /// # Errors
    ///
    /// - [`NtsError::UnsupportedAlgorithm`]: unknown or unsupported id
    /// - [`NtsError::KeyLengthMismatch`]: wrong key length for the algorithm
    pub fn from_id(id: u16, key: &[u8]) -> Result<Self, NtsError> {
        Self::new(AeadAlgorithm::from_id(id)?, key)
    }

    /// Negotiated algorithm.
    pub fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }

    pub(crate) fn siv(&self) -> &SivKey {
        &self.siv
    }
}

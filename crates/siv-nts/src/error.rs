// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use siv_aead::SivError;
use siv_rand::EntropyError;

/// NTS AEAD error
///
/// `Siv(SivError::AuthenticationFailed)` means the packet must be dropped; it
/// is never worth retrying with the same input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NtsError {
    /// AEAD algorithm id not implemented here
    #[error("unsupported AEAD algorithm: {id}")]
    UnsupportedAlgorithm {
        /// IANA AEAD algorithm identifier
        id: u16,
    },

    /// Key length does not match the negotiated algorithm
    #[error("key length mismatch: {algorithm} expects {expected} bytes, got {actual}")]
    KeyLengthMismatch {
        /// Negotiated algorithm name
        algorithm: &'static str,
        /// Required key length
        expected: usize,
        /// Supplied key length
        actual: usize,
    },

    /// Underlying AES-SIV failure
    #[error(transparent)]
    Siv(#[from] SivError),

    /// Nonce generation failed
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// NTS Authenticator and Encrypted Extension Fields could not be parsed or built
    #[error("malformed NTS authenticator: {detail}")]
    MalformedAuthenticator {
        /// What was wrong with the field
        detail: &'static str,
    },
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::consts::{MAX_ASSOCIATED_DATA, SIV_SIZE};

/// AES-SIV error
///
/// [`SivError::AuthenticationFailed`] deliberately carries no detail: a
/// tampered ciphertext, a wrong key and reordered associated data all look the
/// same to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SivError {
    /// Key length is not twice a supported AES key size
    #[error("invalid key size: got {actual} bytes")]
    InvalidKeySize {
        /// Length of the rejected key
        actual: usize,
    },

    /// Input to decryption cannot even hold a synthetic IV
    #[error("input too short: expected at least {SIV_SIZE} bytes, got {actual}")]
    InputTooShort {
        /// Length of the rejected input
        actual: usize,
    },

    /// More associated-data components than S2V accepts
    #[error("too many associated data components: {count} (maximum {MAX_ASSOCIATED_DATA})")]
    TooManyComponents {
        /// Number of components, nonce included
        count: usize,
    },

    /// Recomputed synthetic IV does not match the received one
    #[error("authentication failed: synthetic IV mismatch")]
    AuthenticationFailed,
}

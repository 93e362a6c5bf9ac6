// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NTS Authenticator and Encrypted Extension Fields (RFC 8915 Section 5.6).
//!
//! ```text
//!  0                   1                   2                   3
//! +-------------------------------+-------------------------------+
//! |       Field Type (0x0404)     |        Length (octets)        |
//! +-------------------------------+-------------------------------+
//! |          Nonce Length         |       Ciphertext Length       |
//! +-------------------------------+-------------------------------+
//! |                 Nonce (padded to 4 octets)                    |
//! +---------------------------------------------------------------+
//! |              Ciphertext (padded to 4 octets)                  |
//! +---------------------------------------------------------------+
//! |                  Additional Padding (optional)                |
//! +---------------------------------------------------------------+
//! ```
//!
//! The length covers the whole field, header included.

use alloc::vec::Vec;

use siv_aead::SIV_SIZE;

use crate::cipher::{NtsAead, Sealed};
use crate::error::NtsError;

/// Extension field type of the NTS Authenticator
pub const NTS_AUTHENTICATOR: u16 = 0x0404;

const FIELD_HEADER_SIZE: usize = 4;
const LENGTHS_SIZE: usize = 4;

#[inline(always)]
fn padded_to_word(len: usize) -> usize {
    (len + 3) & !3
}

#[inline(always)]
fn read_be_u16(data: &[u8], offset: usize) -> usize {
    usize::from(u16::from_be_bytes([data[offset], data[offset + 1]]))
}

/// Parsed NTS Authenticator extension field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NtsAuthenticator {
    /// AEAD nonce
    pub nonce: Vec<u8>,
    /// `SIV || encrypted extension fields`
    pub ciphertext: Vec<u8>,
}

impl NtsAuthenticator {
    /// Creates an authenticator from its parts.
    pub fn new(nonce: Vec<u8>, ciphertext: Vec<u8>) -> Self {
        Self { nonce, ciphertext }
    }

    /// Serializes the complete extension field.
    ///
    /// # Errors
    ///
    /// Returns [`NtsError::MalformedAuthenticator`] if the nonce is empty, the
    /// ciphertext cannot hold a SIV, or the field would not fit a 16-bit length.
    pub fn encode(&self) -> Result<Vec<u8>, NtsError> {
        if self.nonce.is_empty() {
            return Err(NtsError::MalformedAuthenticator {
                detail: "empty nonce",
            });
        }

        if self.ciphertext.len() < SIV_SIZE {
            return Err(NtsError::MalformedAuthenticator {
                detail: "ciphertext shorter than SIV",
            });
        }

        let total = FIELD_HEADER_SIZE
            + LENGTHS_SIZE
            + padded_to_word(self.nonce.len())
            + padded_to_word(self.ciphertext.len());

        let field_len = u16::try_from(total).map_err(|_| NtsError::MalformedAuthenticator {
            detail: "field exceeds 65535 octets",
        })?;

        // Both lengths are below `total`, which fits.
        let nonce_len = self.nonce.len() as u16;
        let ciphertext_len = self.ciphertext.len() as u16;

        let mut field = Vec::with_capacity(total);
        field.extend_from_slice(&NTS_AUTHENTICATOR.to_be_bytes());
        field.extend_from_slice(&field_len.to_be_bytes());
        field.extend_from_slice(&nonce_len.to_be_bytes());
        field.extend_from_slice(&ciphertext_len.to_be_bytes());

        field.extend_from_slice(&self.nonce);
        field.resize(field.len() + padded_to_word(self.nonce.len()) - self.nonce.len(), 0);

        field.extend_from_slice(&self.ciphertext);
        field.resize(total, 0);

        Ok(field)
    }

    /// Parses a complete extension field.
    ///
    /// Trailing bytes after the declared length are ignored; additional
    /// padding inside it is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`NtsError::MalformedAuthenticator`] on a wrong field type, a
    /// length that is truncated or not a multiple of 4, an empty nonce, a
    /// ciphertext shorter than a SIV, or lengths overrunning the field.
    pub fn decode(field: &[u8]) -> Result<Self, NtsError> {
        let reject = |detail: &'static str| {
            log::debug!(
                "rejected NTS authenticator ({} bytes): {}",
                field.len(),
                detail
            );
            Err(NtsError::MalformedAuthenticator { detail })
        };

        if field.len() < FIELD_HEADER_SIZE + LENGTHS_SIZE {
            return reject("truncated header");
        }

        if read_be_u16(field, 0) != usize::from(NTS_AUTHENTICATOR) {
            return reject("unexpected field type");
        }

        let declared = read_be_u16(field, 2);
        if declared % 4 != 0 {
            return reject("length not a multiple of 4");
        }

        if declared < FIELD_HEADER_SIZE + LENGTHS_SIZE || declared > field.len() {
            return reject("length exceeds available data");
        }

        let nonce_len = read_be_u16(field, 4);
        let ciphertext_len = read_be_u16(field, 6);

        if nonce_len == 0 {
            return reject("empty nonce");
        }

        if ciphertext_len < SIV_SIZE {
            return reject("ciphertext shorter than SIV");
        }

        let nonce_start = FIELD_HEADER_SIZE + LENGTHS_SIZE;
        let ciphertext_start = nonce_start + padded_to_word(nonce_len);
        let end = ciphertext_start + padded_to_word(ciphertext_len);

        if end > declared {
            return reject("nonce and ciphertext overrun field");
        }

        Ok(Self {
            nonce: field[nonce_start..nonce_start + nonce_len].to_vec(),
            ciphertext: field[ciphertext_start..ciphertext_start + ciphertext_len].to_vec(),
        })
    }
}

impl From<Sealed> for NtsAuthenticator {
    fn from(sealed: Sealed) -> Self {
        Self {
            nonce: sealed.nonce.to_vec(),
            ciphertext: sealed.ciphertext,
        }
    }
}

/// Seals `plaintext` (the encrypted extension fields) and returns the encoded
/// authenticator field to append to the packet.
///
/// `associated` is the packet up to, not including, the authenticator.
///
/// # Errors
///
/// Propagates [`NtsAead::seal`] and [`NtsAuthenticator::encode`] failures.
pub fn seal_authenticator<A: NtsAead>(
    aead: &mut A,
    associated: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, NtsError> {
    NtsAuthenticator::from(aead.seal(associated, plaintext)?).encode()
}

/// Decodes an authenticator field and opens its ciphertext.
///
/// # Errors
///
/// Propagates [`NtsAuthenticator::decode`] and [`NtsAead::open`] failures.
pub fn open_authenticator<A: NtsAead>(
    aead: &A,
    associated: &[u8],
    field: &[u8],
) -> Result<Vec<u8>, NtsError> {
    let authenticator = NtsAuthenticator::decode(field)?;

    aead.open(associated, &authenticator.nonce, &authenticator.ciphertext)
}

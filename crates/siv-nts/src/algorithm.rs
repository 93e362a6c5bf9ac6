// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! IANA AEAD algorithm registry, as negotiated during NTS-KE.

use core::fmt;

use siv_aead::{Aes128Siv, Aes256Siv};

use crate::error::NtsError;

/// `AEAD_AES_SIV_CMAC_256` (RFC 5297)
pub const AEAD_AES_SIV_CMAC_256: u16 = 15;

/// `AEAD_AES_SIV_CMAC_384`, recognised but not supported (needs AES-192)
pub const AEAD_AES_SIV_CMAC_384: u16 = 16;

/// `AEAD_AES_SIV_CMAC_512` (RFC 5297)
pub const AEAD_AES_SIV_CMAC_512: u16 = 17;

/// AES-SIV variants usable for NTS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeadAlgorithm {
    /// 32-byte key, two AES-128 halves
    AesSivCmac256,
    /// 64-byte key, two AES-256 halves
    AesSivCmac512,
}

impl AeadAlgorithm {
    /// Looks up a negotiated algorithm id.
    ///
    /// # Errors
    ///
    /// Returns [`NtsError::UnsupportedAlgorithm`] for any id other than 15 or 17.
    pub fn from_id(id: u16) -> Result<Self, NtsError> {
        match id {
            AEAD_AES_SIV_CMAC_256 => Ok(Self::AesSivCmac256),
            AEAD_AES_SIV_CMAC_512 => Ok(Self::AesSivCmac512),
            _ => Err(NtsError::UnsupportedAlgorithm { id }),
        }
    }

    /// IANA identifier.
    pub const fn id(self) -> u16 {
        match self {
            Self::AesSivCmac256 => AEAD_AES_SIV_CMAC_256,
            Self::AesSivCmac512 => AEAD_AES_SIV_CMAC_512,
        }
    }

    /// Required key length in bytes.
    pub const fn key_length(self) -> usize {
        match self {
            Self::AesSivCmac256 => Aes128Siv::KEY_SIZE,
            Self::AesSivCmac512 => Aes256Siv::KEY_SIZE,
        }
    }

    /// IANA name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AesSivCmac256 => "AEAD_AES_SIV_CMAC_256",
            Self::AesSivCmac512 => "AEAD_AES_SIV_CMAC_512",
        }
    }
}

impl TryFrom<u16> for AeadAlgorithm {
    type Error = NtsError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # siv_nts
//!
//! Network Time Security (RFC 8915) protection of NTP packets with AES-SIV.
//!
//! - [`AeadAlgorithm`]: negotiated algorithm (IANA ids 15 and 17)
//! - [`NtsKey`]: AES-SIV key bound to its algorithm
//! - [`NtsAead`] / [`NtsCipher`]: seal with a fresh nonce, open with the
//!   received one
//! - [`NtsAuthenticator`]: the `0x0404` extension field carrying nonce and
//!   ciphertext
//!
//! Packet parsing and NTS-KE are left to the caller: this crate consumes and
//! produces byte buffers only.
//!
//! ## Example
//!
//! ```rust
//! use siv_nts::{AeadAlgorithm, NtsCipher, NtsKey, open_authenticator, seal_authenticator};
//! use siv_rand::SystemEntropySource;
//!
//! let c2s = [0x11u8; 32];
//! let key = NtsKey::new(AeadAlgorithm::AesSivCmac256, &c2s).expect("Failed to create NtsKey");
//! let mut client = NtsCipher::new(key, SystemEntropySource {});
//!
//! let header = [0x23u8; 48];
//! let field = seal_authenticator(&mut client, &header, b"").expect("Failed to seal");
//!
//! let key = NtsKey::new(AeadAlgorithm::AesSivCmac256, &c2s).expect("Failed to create NtsKey");
//! let server = NtsCipher::new(key, SystemEntropySource {});
//! let plaintext = open_authenticator(&server, &header, &field).expect("Failed to open");
//! assert!(plaintext.is_empty());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod authenticator;
mod cipher;
mod error;
mod key;

pub use algorithm::{
    AEAD_AES_SIV_CMAC_256, AEAD_AES_SIV_CMAC_384, AEAD_AES_SIV_CMAC_512, AeadAlgorithm,
};
pub use authenticator::{
    NTS_AUTHENTICATOR, NtsAuthenticator, open_authenticator, seal_authenticator,
};
pub use cipher::{NONCE_SIZE, NtsAead, NtsCipher, Sealed};
pub use error::NtsError;
pub use key::NtsKey;

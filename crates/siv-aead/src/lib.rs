// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # siv_aead
//!
//! AES-SIV (RFC 5297): deterministic and nonce-based authenticated encryption,
//! as used by Network Time Security (RFC 8915).
//!
//! ## Building Blocks
//!
//! - [`double_block`], [`pad`], [`xor_blocks`]: 128-bit block arithmetic
//! - [`Cmac`] / [`cmac`]: AES-CMAC (RFC 4493)
//! - [`S2v`] / [`s2v`]: pseudorandom function over a vector of strings
//! - [`apply_keystream`], [`siv_to_counter`]: AES-CTR as SIV uses it
//!
//! ## Facade
//!
//! - [`AesSiv`] with [`Aes128Siv`] (32-byte key) and [`Aes256Siv`] (64-byte key)
//! - [`SivKey`] and [`aes_siv_encrypt`] / [`aes_siv_decrypt`] pick the
//!   variant from the key length
//!
//! ## Security
//!
//! - The synthetic IV is compared in constant time
//! - On authentication failure the in-place buffer is zeroized and no
//!   plaintext is returned
//! - Subkeys, intermediates and keystream are zeroized after use
//!
//! ## Example
//!
//! ```rust
//! use siv_aead::{Aes128Siv, SivError};
//!
//! let key = [0x42u8; 32];
//! let siv = Aes128Siv::new(&key).expect("Failed to create AES-SIV");
//!
//! let header: &[u8] = b"header";
//! let sealed = siv
//!     .encrypt(&[header], b"", b"plaintext")
//!     .expect("Failed to encrypt");
//! assert_eq!(sealed.len(), 16 + 9);
//!
//! let opened = siv.decrypt(&[header], b"", &sealed).expect("Failed to decrypt");
//! assert_eq!(opened, b"plaintext");
//!
//! let other: &[u8] = b"other";
//! let result = siv.decrypt(&[other], b"", &sealed);
//! assert!(matches!(result, Err(SivError::AuthenticationFailed)));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod block;
mod cipher;
mod cmac;
mod consts;
mod ctr;
mod error;
mod key;
mod s2v;
mod siv;
mod types;

pub use aes::{Aes128, Aes256};

pub use block::{double_block, pad, xor_block, xor_blocks};
pub use cipher::BlockCipher;
pub use cmac::{Cmac, CmacState, cmac};
pub use consts::{BLOCK_SIZE, MAX_ASSOCIATED_DATA, SIV_SIZE};
pub use ctr::{apply_keystream, siv_to_counter};
pub use error::SivError;
pub use key::{SivKey, aes_siv_decrypt, aes_siv_encrypt};
pub use s2v::{S2v, s2v};
pub use siv::{Aes128Siv, Aes256Siv, AesSiv};
pub use types::{Block, Siv};

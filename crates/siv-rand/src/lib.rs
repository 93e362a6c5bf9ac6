// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # siv_rand
//!
//! Randomness for the nonce-based mode of AES-SIV.
//!
//! Deterministic AES-SIV needs no randomness at all. Protocols such as NTS run
//! it in nonce-based mode, where every sealed message carries a fresh nonce as
//! the last associated-data component. This crate supplies those nonces.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`NonceSessionGenerator`]: counter-prefixed random nonces of any size
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//! - [`NonceGenerator`]: Interface for nonce generation
//!
//! ## Example
//!
//! ```rust
//! use siv_rand::{EntropySource, NonceGenerator, NonceSessionGenerator, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut key = [0u8; 32];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//!
//! let mut nonce_gen = NonceSessionGenerator::<SystemEntropySource, 16>::new(SystemEntropySource {});
//! let nonce = nonce_gen.generate_nonce().expect("Failed to generate nonce");
//! assert_eq!(nonce.len(), 16);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod session;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use session::NonceSessionGenerator;
pub use system::SystemEntropySource;
pub use traits::{EntropySource, NonceGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::size_of;

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::{EntropySource, NonceGenerator};

pub(crate) type Counter = u32;

/// Session-based nonce generator with configurable nonce size.
///
/// Each nonce is built from two parts:
/// - **Counter prefix**: big-endian session counter (type `Counter`), wrapping
/// - **Random suffix**: remaining bytes from the entropy source
///
/// # Collision resistance
///
/// A repeated nonce needs the counter to wrap (2^32 nonces) *and* the random
/// suffix to repeat. For the 16-byte nonces used with NTS that leaves 96 random
/// bits, about 1/2^96 per nonce pair after wrapping.
///
/// # Example
///
/// ```ignore
/// use siv_rand::{SystemEntropySource, NonceSessionGenerator, NonceGenerator};
///
/// let mut generator = NonceSessionGenerator::<_, 16>::new(SystemEntropySource {});
/// let nonce = generator.generate_nonce()?;
/// ```
pub struct NonceSessionGenerator<E: EntropySource, const NONCE_SIZE: usize> {
    entropy: E,
    counter: Counter,
    initialized: bool,
}

impl<E: EntropySource, const NONCE_SIZE: usize> NonceSessionGenerator<E, NONCE_SIZE> {
    /// Creates a new nonce session generator.
    ///
    /// The counter starts from a random value, drawn lazily on the first
    /// nonce, so two sessions under the same key do not walk the same prefixes.
    ///
    /// # Arguments
    ///
    /// * `entropy` - Entropy source for the counter seed and the nonce suffixes
    pub fn new(entropy: E) -> Self {
        const {
            assert!(
                NONCE_SIZE > size_of::<Counter>(),
                "nonce must leave room for a random suffix"
            );
        }

        Self {
            entropy,
            counter: 0,
            initialized: false,
        }
    }

    fn maybe_initialize(&mut self) -> Result<(), EntropyError> {
        if !self.initialized {
            let mut counter_bytes = [0u8; size_of::<Counter>()];

            self.entropy.fill_bytes(&mut counter_bytes)?;
            self.counter = Counter::from_be_bytes(counter_bytes);
            counter_bytes.zeroize();

            self.initialized = true;
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_counter_for_test(&mut self, counter: Counter) {
        self.counter = counter;
        self.initialized = true;
    }
}

impl<E: EntropySource, const NONCE_SIZE: usize> NonceGenerator<NONCE_SIZE>
    for NonceSessionGenerator<E, NONCE_SIZE>
{
    fn generate_nonce(&mut self) -> Result<[u8; NONCE_SIZE], EntropyError> {
        self.maybe_initialize()?;

        let mut nonce = [0u8; NONCE_SIZE];
        nonce[..size_of::<Counter>()].copy_from_slice(&self.counter.to_be_bytes());

        self.entropy
            .fill_bytes(&mut nonce[size_of::<Counter>()..])?;

        self.counter = self.counter.wrapping_add(1);

        Ok(nonce)
    }
}

impl<E: EntropySource, const NONCE_SIZE: usize> Drop for NonceSessionGenerator<E, NONCE_SIZE> {
    fn drop(&mut self) {
        self.counter.zeroize();
    }
}

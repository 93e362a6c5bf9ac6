// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_system_entropy_fills_buffer() {
    let entropy = SystemEntropySource {};
    let mut buf = [0u8; 64];

    entropy
        .fill_bytes(&mut buf)
        .expect("Failed to fill_bytes(..)");

    // 64 zero bytes from a CSPRNG is a 2^-512 event.
    assert!(buf.iter().any(|&b| b != 0));
}

#[test]
fn test_system_entropy_consecutive_calls_differ() {
    let entropy = SystemEntropySource {};
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    entropy.fill_bytes(&mut a).expect("Failed to fill_bytes(a)");
    entropy.fill_bytes(&mut b).expect("Failed to fill_bytes(b)");

    assert_ne!(a, b);
}

#[test]
fn test_system_entropy_empty_buffer() {
    let entropy = SystemEntropySource {};
    let mut buf: [u8; 0] = [];

    assert!(entropy.fill_bytes(&mut buf).is_ok());
}

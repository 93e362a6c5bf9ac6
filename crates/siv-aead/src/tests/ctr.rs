// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-CTR tests

use aes::Aes128;

use crate::cipher::BlockCipher;
use crate::ctr::{apply_keystream, siv_to_counter};

use super::helpers::{a1, a2, hex, hex_block};

// =============================================================================
// siv_to_counter()
// =============================================================================

#[test]
fn test_siv_to_counter_rfc5297_a1() {
    assert_eq!(siv_to_counter(&hex_block(a1::SIV)), hex_block(a1::COUNTER));
}

#[test]
fn test_siv_to_counter_rfc5297_a2() {
    assert_eq!(siv_to_counter(&hex_block(a2::SIV)), hex_block(a2::COUNTER));
}

#[test]
fn test_siv_to_counter_clears_only_two_bits() {
    let counter = siv_to_counter(&[0xffu8; 16]);

    for (i, byte) in counter.iter().enumerate() {
        let expected = if i == 8 || i == 12 { 0x7f } else { 0xff };
        assert_eq!(*byte, expected, "byte {i}");
    }
}

// =============================================================================
// apply_keystream()
// =============================================================================

#[test]
fn test_ctr_rfc3686_test_vector_2() {
    let cipher = Aes128::new(&hex("7e240678 17fae0d7 43d6ce1f 32539163")).expect("Failed to key AES");
    let counter = hex_block("006cb6db c0543b59 da48d90b 00000001");

    let mut data: Vec<u8> = (0u8..32).collect();
    apply_keystream(&cipher, &counter, &mut data);

    assert_eq!(
        data,
        hex("5104a106 168a72d9 790d41ee 8edad388 eb2e1efc 46da57c8 fce630df 9141be28")
    );
}

#[test]
fn test_ctr_is_an_involution() {
    let cipher = Aes128::new(&[0x24u8; 16]).expect("Failed to key AES");
    let counter = [0x5au8; 16];
    let original: Vec<u8> = (0u8..=100).collect();

    let mut data = original.clone();
    apply_keystream(&cipher, &counter, &mut data);
    assert_ne!(data, original);

    apply_keystream(&cipher, &counter, &mut data);
    assert_eq!(data, original);
}

#[test]
fn test_ctr_partial_block_uses_leading_keystream() {
    let cipher = Aes128::new(&[0x01u8; 16]).expect("Failed to key AES");
    let counter = [0x10u8; 16];

    let mut keystream = counter;
    cipher.encrypt_block(&mut keystream);

    let mut data = [0u8; 5];
    apply_keystream(&cipher, &counter, &mut data);

    assert_eq!(data, keystream[..5]);
}

#[test]
fn test_ctr_empty_data_is_noop() {
    let cipher = Aes128::new(&[0x01u8; 16]).expect("Failed to key AES");
    let mut data: [u8; 0] = [];

    apply_keystream(&cipher, &[0u8; 16], &mut data);
}

#[test]
fn test_ctr_counter_wraps_modulo_2_128() {
    let cipher = Aes128::new(&[0x77u8; 16]).expect("Failed to key AES");

    let mut first = [0xffu8; 16];
    cipher.encrypt_block(&mut first);
    let mut second = [0u8; 16];
    cipher.encrypt_block(&mut second);

    let mut data = [0u8; 32];
    apply_keystream(&cipher, &[0xffu8; 16], &mut data);

    assert_eq!(data[..16], first);
    assert_eq!(data[16..], second);
}

#[test]
fn test_ctr_increment_carries_into_upper_words() {
    let cipher = Aes128::new(&[0x33u8; 16]).expect("Failed to key AES");
    let start = hex_block("00000000 00000000 00000000 ffffffff");

    let mut next = hex_block("00000000 00000000 00000001 00000000");
    cipher.encrypt_block(&mut next);

    let mut data = [0u8; 32];
    apply_keystream(&cipher, &start, &mut data);

    assert_eq!(data[16..], next);
}

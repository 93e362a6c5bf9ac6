// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Synthetic IV size in bytes (one block)
pub const SIV_SIZE: usize = BLOCK_SIZE;

/// Maximum number of associated-data components, nonce included.
///
/// S2V takes at most 127 strings (RFC 5297 Section 7) and the plaintext is
/// always the last one.
pub const MAX_ASSOCIATED_DATA: usize = 126;

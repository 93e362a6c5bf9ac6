// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for AES-SIV.

use super::consts::{BLOCK_SIZE, SIV_SIZE};

/// One AES block
pub type Block = [u8; BLOCK_SIZE];

/// Synthetic IV: authentication tag and CTR starting state
pub type Siv = [u8; SIV_SIZE];

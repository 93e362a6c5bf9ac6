// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use siv_util::hex_to_bytes;

use crate::types::Block;

pub(crate) fn hex(s: &str) -> Vec<u8> {
    hex_to_bytes(s)
}

pub(crate) fn hex_block(s: &str) -> Block {
    hex_to_bytes(s)
        .try_into()
        .expect("Failed to convert hex to Block")
}

/// RFC 5297 Appendix A.1 (deterministic)
pub(crate) mod a1 {
    pub(crate) const KEY: &str =
        "fffefdfc fbfaf9f8 f7f6f5f4 f3f2f1f0 f0f1f2f3 f4f5f6f7 f8f9fafb fcfdfeff";
    pub(crate) const AD: &str = "10111213 14151617 18191a1b 1c1d1e1f 20212223 24252627";
    pub(crate) const PLAINTEXT: &str = "11223344 55667788 99aabbcc ddee";
    pub(crate) const CMAC_ZERO: &str = "0e04dfaf c1efbf04 01405828 59bf073a";
    pub(crate) const SIV: &str = "85632d07 c6e8f37f 950acd32 0a2ecc93";
    pub(crate) const COUNTER: &str = "85632d07 c6e8f37f 150acd32 0a2ecc93";
    pub(crate) const OUTPUT: &str =
        "85632d07 c6e8f37f 950acd32 0a2ecc93 40c02b96 90c4dc04 daef7f6a fe5c";
}

/// RFC 5297 Appendix A.2 (nonce-based)
pub(crate) mod a2 {
    pub(crate) const KEY: &str =
        "7f7e7d7c 7b7a7978 77767574 73727170 40414243 44454647 48494a4b 4c4d4e4f";
    pub(crate) const AD1: &str = "00112233 44556677 8899aabb ccddeeff
                                  deaddada deaddada ffeeddcc bbaa9988
                                  77665544 33221100";
    pub(crate) const AD2: &str = "10203040 50607080 90a0";
    pub(crate) const NONCE: &str = "09f91102 9d74e35b d84156c5 635688c0";
    pub(crate) const PLAINTEXT: &[u8] = b"this is some plaintext to encrypt using SIV-AES";
    pub(crate) const CMAC_ZERO: &str = "c8b43b59 74960e7c e6a5dd85 231e591a";
    pub(crate) const SIV: &str = "7bdb6e3b 432667eb 06f4d14b ff2fbd0f";
    pub(crate) const COUNTER: &str = "7bdb6e3b 432667eb 06f4d14b 7f2fbd0f";
    pub(crate) const OUTPUT: &str = "7bdb6e3b 432667eb 06f4d14b ff2fbd0f
                                     cb900f2f ddbe4043 26601965 c889bf17
                                     dba77ceb 094fa663 b7a3f748 ba8af829
                                     ea64ad54 4a272e9c 485b62a3 fd5c0d";
}

use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::{ENCODED_KEY_LEN, KEY_LEN};

/// 256-bit secret key material. Wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LEN]);

/// Standard (padded) base64 rendering of a [`Key`].
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncodedKey(String);

impl Key {
    pub(crate) fn zeroed() -> Self {
        Self([0u8; KEY_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; KEY_LEN] {
        &mut self.0
    }

    pub fn encode(&self) -> EncodedKey {
        let encoded = general_purpose::STANDARD.encode(self.as_bytes());
        debug_assert_eq!(encoded.len(), ENCODED_KEY_LEN);
        EncodedKey(encoded)
    }
}

impl EncodedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

impl fmt::Debug for EncodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncodedKey([REDACTED])")
    }
}

impl fmt::Display for EncodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

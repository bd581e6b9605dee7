use aes_gcm::aead::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{
    config::KEY_LEN,
    error::Result,
    models::{EncodedKey, Key},
};

pub struct KeyGenerator;

impl KeyGenerator {
    /// Generate a fresh key from the OS secure random source and encode it
    /// as standard base64.
    pub fn generate_key() -> Result<EncodedKey> {
        let key = Self::generate_key_with(&mut OsRng)?;
        Ok(key.encode())
    }

    /// Fill a new key from `rng`. Errors from the source are returned as-is,
    /// never retried or replaced by a weaker generator.
    pub fn generate_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Key> {
        let mut key = Key::zeroed();
        rng.try_fill_bytes(key.as_mut_bytes()).map_err(|e| {
            tracing::error!("Secure random source failed: {}", e);
            e
        })?;

        tracing::debug!("Generated {}-byte key", KEY_LEN);
        Ok(key)
    }
}

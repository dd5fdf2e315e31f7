pub mod cipher_context;
pub mod cipher_types;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod utils;

use crate::crypto::cipher_types::CipherParams;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

impl KeyExpansion for Arc<dyn KeyExpansion + Send + Sync> {
    fn generate_round_keys(&self, key: u128, params: &CipherParams) -> Vec<u64> {
        (**self).generate_round_keys(key, params)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation + Send + Sync> {
    fn transform(&self, half_block: u64, round_key: u64) -> u64 {
        (**self).transform(half_block, round_key)
    }
}

use crate::crypto::cipher_types::CipherParams;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::check_width;
use log::trace;
use std::sync::Arc;

/// Keyed permutation over one fixed-width block, built from an injected
/// key schedule and round function.
#[derive(Clone)]
pub struct FeistelNetwork {
    params: CipherParams,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        params: CipherParams,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Result<Self, CipherError> {
        params.validate()?;
        Ok(Self {
            params,
            key_expansion,
            transformation,
        })
    }

    pub fn params(&self) -> &CipherParams {
        &self.params
    }

    /// Derives the subkey schedule once; mode loops reuse it per block.
    pub fn round_keys(&self, key: u128) -> Result<Vec<u64>, CipherError> {
        check_width(key, self.params.block_bits)?;
        Ok(self.key_expansion.generate_round_keys(key, &self.params))
    }

    pub fn encrypt_block(&self, block: u128, key: u128) -> Result<u128, CipherError> {
        let round_keys = self.round_keys(key)?;
        check_width(block, self.params.block_bits)?;
        Ok(self.encrypt_with_round_keys(block, &round_keys))
    }

    pub fn decrypt_block(&self, block: u128, key: u128) -> Result<u128, CipherError> {
        let round_keys = self.round_keys(key)?;
        check_width(block, self.params.block_bits)?;
        Ok(self.decrypt_with_round_keys(block, &round_keys))
    }

    /// Forward pass. Callers must have validated `block` against the
    /// configured width.
    pub(crate) fn encrypt_with_round_keys(&self, block: u128, round_keys: &[u64]) -> u128 {
        let half_bits = self.params.half_bits();
        let half_mask = self.params.half_mask();

        let mut left = (block >> half_bits) as u64 & half_mask;
        let mut right = block as u64 & half_mask;

        for (index, &round_key) in round_keys.iter().enumerate() {
            let feistel_out = self.transformation.transform(right, round_key) & half_mask;
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
            trace!(
                "round {index}: left={left:016x} right={right:016x}"
            );
        }

        ((left as u128) << half_bits) | right as u128
    }

    /// Inverse pass: reversed schedule, mirrored update. Exact inverse of
    /// the forward pass because the round output only enters via XOR.
    pub(crate) fn decrypt_with_round_keys(&self, block: u128, round_keys: &[u64]) -> u128 {
        let half_bits = self.params.half_bits();
        let half_mask = self.params.half_mask();

        let mut left = (block >> half_bits) as u64 & half_mask;
        let mut right = block as u64 & half_mask;

        for (index, &round_key) in round_keys.iter().enumerate().rev() {
            let feistel_out = self.transformation.transform(left, round_key) & half_mask;
            let new_left = right ^ feistel_out;
            right = left;
            left = new_left;
            trace!(
                "round {index}: left={left:016x} right={right:016x}"
            );
        }

        ((left as u128) << half_bits) | right as u128
    }
}

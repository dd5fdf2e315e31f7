use crate::crypto::f_function::Blake2sTransformation;
use crate::crypto::key_schedule::Blake2sKeyExpansion;
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_types::{CipherMode, CipherParams};
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

/// 128-bit Feistel block cipher with a BLAKE2s key schedule and round
/// function, plus CBC/CFB sequence transforms.
///
/// Teaching-scale construction; the permutation is sound but the design
/// is not vetted for production use.
#[derive(Clone)]
pub struct Hfc128Cipher {
    network: FeistelNetwork,
}

impl Hfc128Cipher {
    /// Reference instance: 128-bit blocks, 8 rounds, demo flip bit 17.
    pub fn new() -> Self {
        Self::with_params(CipherParams::default()).expect("default params are valid")
    }

    pub fn with_params(params: CipherParams) -> Result<Self, CipherError> {
        let network = FeistelNetwork::new(
            params,
            Arc::new(Blake2sKeyExpansion),
            Arc::new(Blake2sTransformation::new(params.half_bits())),
        )?;
        Ok(Self { network })
    }

    pub fn params(&self) -> &CipherParams {
        self.network.params()
    }

    pub fn encrypt_block(&self, block: u128, key: u128) -> Result<u128, CipherError> {
        self.network.encrypt_block(block, key)
    }

    pub fn decrypt_block(&self, block: u128, key: u128) -> Result<u128, CipherError> {
        self.network.decrypt_block(block, key)
    }

    pub fn encrypt_sequence(
        &self,
        mode: CipherMode,
        blocks: &[u128],
        key: u128,
        iv: u128,
    ) -> Result<Vec<u128>, CipherError> {
        self.context(mode, iv)?.encrypt(blocks, key)
    }

    pub fn decrypt_sequence(
        &self,
        mode: CipherMode,
        blocks: &[u128],
        key: u128,
        iv: u128,
    ) -> Result<Vec<u128>, CipherError> {
        self.context(mode, iv)?.decrypt(blocks, key)
    }

    pub fn cbc_encrypt(&self, blocks: &[u128], key: u128, iv: u128) -> Result<Vec<u128>, CipherError> {
        self.encrypt_sequence(CipherMode::CBC, blocks, key, iv)
    }

    pub fn cbc_decrypt(&self, blocks: &[u128], key: u128, iv: u128) -> Result<Vec<u128>, CipherError> {
        self.decrypt_sequence(CipherMode::CBC, blocks, key, iv)
    }

    pub fn cfb_encrypt(&self, blocks: &[u128], key: u128, iv: u128) -> Result<Vec<u128>, CipherError> {
        self.encrypt_sequence(CipherMode::CFB, blocks, key, iv)
    }

    pub fn cfb_decrypt(&self, blocks: &[u128], key: u128, iv: u128) -> Result<Vec<u128>, CipherError> {
        self.decrypt_sequence(CipherMode::CFB, blocks, key, iv)
    }

    fn context(&self, mode: CipherMode, iv: u128) -> Result<CipherContext, CipherError> {
        CipherContext::new(self.network.clone(), mode, iv)
    }
}

impl Default for Hfc128Cipher {
    fn default() -> Self {
        Self::new()
    }
}

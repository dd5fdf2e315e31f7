use blake2::digest::{Update, VariableOutput};
use blake2::Blake2sVar;
use feistel_cipher::crypto::encryption_transformation::EncryptionTransformation;

/// Non-linear mixing used inside the Feistel structure: BLAKE2s over the
/// big-endian encodings of the half-block and the subkey, truncated to the
/// half-block width.
pub fn round_function(half_block: u64, round_key: u64, width_bits: u32) -> u64 {
    let width_bytes = (width_bits / 8) as usize;
    let half_bytes = half_block.to_be_bytes();
    let key_bytes = round_key.to_be_bytes();

    let mut hasher = Blake2sVar::new(width_bytes).expect("half width exceeds BLAKE2s output");
    hasher.update(&half_bytes[8 - width_bytes..]);
    hasher.update(&key_bytes[8 - width_bytes..]);

    let mut digest = [0u8; 8];
    hasher
        .finalize_variable(&mut digest[..width_bytes])
        .expect("digest buffer sized to half width");
    digest[..width_bytes]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

pub struct Blake2sTransformation {
    width_bits: u32,
}

impl Blake2sTransformation {
    pub fn new(width_bits: u32) -> Self {
        Self { width_bits }
    }
}

impl EncryptionTransformation for Blake2sTransformation {
    fn transform(&self, half_block: u64, round_key: u64) -> u64 {
        round_function(half_block, round_key, self.width_bits)
    }
}

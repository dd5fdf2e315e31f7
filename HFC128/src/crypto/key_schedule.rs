use blake2::digest::{Update, VariableOutput};
use blake2::Blake2sVar;
use feistel_cipher::crypto::cipher_types::CipherParams;
use feistel_cipher::crypto::key_expansion::KeyExpansion;

/// Expands the master key into per-round subkeys via BLAKE2s.
///
/// subkey[i] = BLAKE2s(key_be_bytes || i_be16, half_bytes), read big-endian.
pub fn expand_key(key: u128, params: &CipherParams) -> Vec<u64> {
    let key_bytes = params.block_bytes();
    let subkey_bytes = params.half_bytes();
    let seed = key.to_be_bytes();
    let seed = &seed[16 - key_bytes..];

    (0..params.rounds)
        .map(|round| {
            let mut hasher =
                Blake2sVar::new(subkey_bytes).expect("subkey width exceeds BLAKE2s output");
            hasher.update(seed);
            hasher.update(&(round as u16).to_be_bytes());

            let mut digest = [0u8; 8];
            hasher
                .finalize_variable(&mut digest[..subkey_bytes])
                .expect("digest buffer sized to subkey width");
            digest[..subkey_bytes]
                .iter()
                .fold(0u64, |acc, &b| (acc << 8) | b as u64)
        })
        .collect()
}

pub struct Blake2sKeyExpansion;

impl KeyExpansion for Blake2sKeyExpansion {
    fn generate_round_keys(&self, key: u128, params: &CipherParams) -> Vec<u64> {
        expand_key(key, params)
    }
}

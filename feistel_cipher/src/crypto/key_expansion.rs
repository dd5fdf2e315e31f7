use crate::crypto::cipher_types::CipherParams;

/// Derives the per-round subkey schedule from a master key.
///
/// Implementations must be deterministic: the same key and params always
/// produce the identical schedule. Subkeys are `params.half_bits()` wide.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: u128, params: &CipherParams) -> Vec<u64>;
}

use crate::crypto::cipher_types::CipherParams;
use crate::crypto::error::CipherError;

/// Rejects values that do not fit into `bits`. Out-of-range inputs are an
/// error, never silently masked.
pub fn check_width(value: u128, bits: u32) -> Result<(), CipherError> {
    let fits = bits >= 128 || value >> bits == 0;
    if fits {
        Ok(())
    } else {
        Err(CipherError::InvalidBlockWidth { value, bits })
    }
}

pub fn flip_bit(value: u128, bit_index: u32) -> u128 {
    value ^ (1u128 << bit_index)
}

/// Hamming distance between two equal-width values.
pub fn bit_diff(a: u128, b: u128) -> u32 {
    (a ^ b).count_ones()
}

/// Packs UTF-8 text into a single block: bytes in big-endian order,
/// zero-padded on the right up to the block width.
pub fn block_from_text(text: &str, params: &CipherParams) -> Result<u128, CipherError> {
    let data = text.as_bytes();
    let block_bytes = params.block_bytes();
    if data.len() > block_bytes {
        return Err(CipherError::InvalidBlockWidth {
            value: data.len() as u128,
            bits: params.block_bits,
        });
    }
    let mut padded = vec![0u8; block_bytes];
    padded[..data.len()].copy_from_slice(data);
    Ok(padded.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128))
}

pub fn block_to_hex(block: u128, params: &CipherParams) -> String {
    format!("0x{:0width$x}", block, width = params.block_bytes() * 2)
}

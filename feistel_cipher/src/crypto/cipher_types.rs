use std::fmt;

use crate::crypto::error::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    CBC,
    CFB,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::CBC => write!(f, "CBC"),
            CipherMode::CFB => write!(f, "CFB"),
        }
    }
}

/// Cipher geometry plus the bit index used by corruption demos.
///
/// The defaults (128-bit blocks, 8 rounds, bit 17) are the reference
/// instance; other widths are allowed as long as the halves stay on
/// byte boundaries, since the round function hashes byte encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    pub block_bits: u32,
    pub rounds: usize,
    pub flip_bit: u32,
}

impl Default for CipherParams {
    fn default() -> Self {
        CipherParams {
            block_bits: 128,
            rounds: 8,
            flip_bit: 17,
        }
    }
}

impl CipherParams {
    pub fn half_bits(&self) -> u32 {
        self.block_bits / 2
    }

    pub fn block_bytes(&self) -> usize {
        (self.block_bits / 8) as usize
    }

    pub fn half_bytes(&self) -> usize {
        (self.half_bits() / 8) as usize
    }

    pub fn block_mask(&self) -> u128 {
        if self.block_bits == 128 {
            u128::MAX
        } else {
            (1u128 << self.block_bits) - 1
        }
    }

    pub fn half_mask(&self) -> u64 {
        if self.half_bits() == 64 {
            u64::MAX
        } else {
            (1u64 << self.half_bits()) - 1
        }
    }

    pub fn validate(&self) -> Result<(), CipherError> {
        if self.rounds == 0 {
            return Err(CipherError::EmptyKeySchedule);
        }
        if self.block_bits < 16 || self.block_bits > 128 || self.block_bits % 16 != 0 {
            return Err(CipherError::InvalidBlockWidth {
                value: 0,
                bits: self.block_bits,
            });
        }
        if self.flip_bit >= self.block_bits {
            return Err(CipherError::InvalidBlockWidth {
                value: self.flip_bit as u128,
                bits: self.block_bits,
            });
        }
        Ok(())
    }
}

use crate::crypto::hfc128::Hfc128Cipher;
use feistel_cipher::crypto::cipher_types::CipherMode;
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::utils::{bit_diff, block_to_hex, flip_bit};
use log::debug;

/// How one decrypted block reacted to the single-bit corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockImpact {
    pub index: usize,
    pub changed_bits: u32,
    pub cause: &'static str,
}

/// Result of one error-propagation run. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeReport {
    pub mode: CipherMode,
    pub bit_flip_index: u32,
    pub block_bits: u32,
    pub impacts: Vec<BlockImpact>,
}

impl ModeReport {
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} mode (bit flip at position {}):\n",
            self.mode, self.bit_flip_index
        );
        for impact in &self.impacts {
            out.push_str(&format!(
                "  P{}' differs in {}/{} bits - {}\n",
                impact.index + 1,
                impact.changed_bits,
                self.block_bits,
                impact.cause
            ));
        }
        out
    }
}

const CBC_CAUSES: [&str; 2] = [
    "flip sits inside Dk(C1), so diffusion destroys essentially the whole block.",
    "only the XOR with C1 handles P2, so a single bit error leaks straight through.",
];

const CFB_CAUSES: [&str; 2] = [
    "C1 feeds P1' via XOR only, so the corruption remains confined to that bit.",
    "C1 is the feedback input to Ek for block 2, so the keystream changes everywhere.",
];

/// Flips one bit of the first ciphertext block and reports, per decrypted
/// block, the Hamming distance to the clean decryption.
///
/// CBC destroys the corrupted block and leaks exactly one bit into the
/// next; CFB does the opposite. Both are consequences of where the block
/// primitive sits in the chaining, and the causes in the report spell
/// that out.
pub fn analyze(
    cipher: &Hfc128Cipher,
    mode: CipherMode,
    key: u128,
    iv: u128,
    blocks: &[u128],
) -> Result<ModeReport, CipherError> {
    if blocks.len() != 2 {
        return Err(CipherError::SequenceLengthMismatch {
            expected: 2,
            actual: blocks.len(),
        });
    }

    let params = *cipher.params();

    let ciphertext = cipher.encrypt_sequence(mode, blocks, key, iv)?;
    let clean_plain = cipher.decrypt_sequence(mode, &ciphertext, key, iv)?;
    debug_assert_eq!(clean_plain, blocks, "clean ciphertext must round-trip");

    let corrupted_first = flip_bit(ciphertext[0], params.flip_bit);
    let corrupted_plain =
        cipher.decrypt_sequence(mode, &[corrupted_first, ciphertext[1]], key, iv)?;

    debug!(
        "{mode}: C1={} C1'={}",
        block_to_hex(ciphertext[0], &params),
        block_to_hex(corrupted_first, &params)
    );

    let causes = match mode {
        CipherMode::CBC => &CBC_CAUSES,
        CipherMode::CFB => &CFB_CAUSES,
    };

    let impacts = clean_plain
        .iter()
        .zip(corrupted_plain.iter())
        .enumerate()
        .map(|(index, (&clean, &corrupted))| BlockImpact {
            index,
            changed_bits: bit_diff(clean, corrupted),
            cause: causes[index],
        })
        .collect();

    Ok(ModeReport {
        mode,
        bit_flip_index: params.flip_bit,
        block_bits: params.block_bits,
        impacts,
    })
}

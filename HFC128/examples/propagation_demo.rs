use feistel_cipher::crypto::cipher_types::CipherMode;
use feistel_cipher::crypto::utils::{block_from_text, block_to_hex};
use hfc128::crypto::hfc128::Hfc128Cipher;
use hfc128::crypto::propagation::analyze;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cipher = Hfc128Cipher::new();
    let params = *cipher.params();

    let key = block_from_text("task3_demo_key!!", &params)?;
    let iv = block_from_text("task3_demo_iv__", &params)?;
    let p1 = block_from_text("Plaintext block1", &params)?;
    let p2 = block_from_text("Plaintext block2", &params)?;

    println!("Original blocks:");
    println!("  P1 = {}", block_to_hex(p1, &params));
    println!("  P2 = {}", block_to_hex(p2, &params));

    println!("\nError propagation summary:");
    for mode in [CipherMode::CBC, CipherMode::CFB] {
        let report = analyze(&cipher, mode, key, iv, &[p1, p2])?;
        println!("{}", report.render());
    }

    println!("Interpretation:");
    println!("- CBC: P1' is unusable, but only one bit leaks into P2'.");
    println!("- CFB: P1' keeps the error local, but P2' becomes garbage because the keystream changed.");

    Ok(())
}

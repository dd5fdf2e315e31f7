pub mod crypto;

pub use crypto::hfc128::Hfc128Cipher;
pub use crypto::propagation::{analyze, BlockImpact, ModeReport};

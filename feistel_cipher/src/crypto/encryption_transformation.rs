/// The keyed, non-linear mixing step applied once per Feistel round.
///
/// The output is only ever combined by XOR, so it does not have to be
/// invertible. Values wider than the configured half width are masked by
/// the network.
pub trait EncryptionTransformation {
    fn transform(&self, half_block: u64, round_key: u64) -> u64;
}

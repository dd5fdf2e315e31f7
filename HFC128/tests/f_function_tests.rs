use feistel_cipher::crypto::encryption_transformation::EncryptionTransformation;
use feistel_cipher::crypto::utils::bit_diff;
use hfc128::crypto::f_function::{round_function, Blake2sTransformation};

#[test]
fn test_round_function_is_deterministic() {
    assert_eq!(
        round_function(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 64),
        round_function(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 64)
    );
}

#[test]
fn test_round_function_depends_on_both_inputs() {
    let base = round_function(1, 2, 64);
    assert_ne!(base, round_function(3, 2, 64));
    assert_ne!(base, round_function(1, 4, 64));
}

#[test]
fn test_round_function_output_fits_width() {
    for width in [16u32, 32, 48] {
        let out = round_function(0xffff_ffff_ffff_ffff, 0xaaaa_bbbb_cccc_dddd, width);
        assert!(out >> width == 0, "output 0x{out:x} exceeds {width} bits");
    }
}

#[test]
fn test_single_bit_change_avalanches() {
    let a = round_function(0x1000, 7, 64);
    let b = round_function(0x1001, 7, 64);
    // BLAKE2s should flip roughly half of the 64 output bits; anything in
    // double digits shows the non-linearity is doing its job.
    assert!(
        bit_diff(a as u128, b as u128) >= 10,
        "weak avalanche: only {} bits changed",
        bit_diff(a as u128, b as u128)
    );
}

#[test]
fn test_transformation_wraps_round_function() {
    let transformation = Blake2sTransformation::new(64);
    assert_eq!(
        transformation.transform(11, 22),
        round_function(11, 22, 64)
    );
}

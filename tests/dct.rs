//! Test intent: pins the DCT-II/III kernel pair, the DC-halving rule and
//! the shared normalization contract, including exact round-trips.

use specwin::dct::DirectDct;
use specwin::fft::{FftError, TransformNorm};

/// Deterministic real-valued test vector.
fn probe_signal(n: usize) -> Vec<f32> {
    (0..n).map(|i| ((i * i + 3) % 7) as f32 - 2.5).collect()
}

#[test]
fn construction_rejects_degenerate_sizes() {
    assert_eq!(DirectDct::new(0).unwrap_err(), FftError::SizeTooSmall);
    assert_eq!(DirectDct::new(1).unwrap_err(), FftError::SizeTooSmall);
    assert_eq!(DirectDct::new(2).unwrap().size(), 2);
    // No power-of-two constraint.
    assert_eq!(DirectDct::new(5).unwrap().size(), 5);
    assert_eq!(DirectDct::new(6).unwrap().size(), 6);
}

#[test]
fn forward_rejects_mismatched_lengths() {
    let dct = DirectDct::new(8).unwrap();
    let short = vec![0.0f32; 4];
    let mut out = vec![0.0f32; 8];
    assert_eq!(
        dct.forward(&short, &mut out),
        Err(FftError::MismatchedLengths)
    );
    let input = vec![0.0f32; 8];
    let mut long = vec![0.0f32; 9];
    assert_eq!(
        dct.reverse(&input, &mut long),
        Err(FftError::MismatchedLengths)
    );
}

/// Unit impulse at position 0, size 8, no normalization: the DC bin shows
/// the halving rule (1 instead of 2), every other bin is `2·cos(πk/16)`.
#[test]
fn forward_impulse_fixture() {
    let dct = DirectDct::new(8).unwrap();
    let mut input = [0.0f32; 8];
    input[0] = 1.0;
    let mut out = [0.0f32; 8];
    dct.forward(&input, &mut out).unwrap();
    let expect = [
        1.0, 1.961_570_5, 1.847_759_0, 1.662_939_2, 1.414_213_6, 1.111_140_5, 0.765_366_9,
        0.390_180_6,
    ];
    for (k, (a, e)) in out.iter().zip(expect.iter()).enumerate() {
        assert!((a - e).abs() < 1e-5, "bin {}: {} vs {}", k, a, e);
    }
}

#[test]
fn forward_constant_concentrates_in_dc() {
    let dct = DirectDct::new(8).unwrap();
    let input = [1.0f32; 8];
    let mut out = [0.0f32; 8];
    dct.forward(&input, &mut out).unwrap();
    assert!((out[0] - 8.0).abs() < 1e-4);
    for &v in &out[1..] {
        assert!(v.abs() < 1e-4);
    }
}

#[test]
fn roundtrip_is_exact_under_sqrt_normalization() {
    for n in [4usize, 5, 8, 16] {
        let mut dct = DirectDct::new(n).unwrap();
        dct.set_normalization(TransformNorm::OneOverSqrtN);
        let input = probe_signal(n);
        let mut spectrum = vec![0.0f32; n];
        let mut back = vec![0.0f32; n];
        dct.forward(&input, &mut spectrum).unwrap();
        dct.reverse(&spectrum, &mut back).unwrap();
        for (a, b) in back.iter().zip(input.iter()) {
            assert!((a - b).abs() < 1e-3, "n {}: {} vs {}", n, a, b);
        }
    }
}

#[test]
fn roundtrip_scales_by_n_without_normalization() {
    let n = 8;
    let dct = DirectDct::new(n).unwrap();
    let input = probe_signal(n);
    let mut spectrum = vec![0.0f32; n];
    let mut back = vec![0.0f32; n];
    dct.forward(&input, &mut spectrum).unwrap();
    dct.reverse(&spectrum, &mut back).unwrap();
    for (a, b) in back.iter().zip(input.iter()) {
        assert!((a - n as f32 * b).abs() < 1e-2, "{} vs {}", a, n as f32 * b);
    }
}

#[test]
fn roundtrip_divides_by_n_under_one_over_n() {
    let n = 8;
    let mut dct = DirectDct::new(n).unwrap();
    dct.set_normalization(TransformNorm::OneOverN);
    let input = probe_signal(n);
    let mut spectrum = vec![0.0f32; n];
    let mut back = vec![0.0f32; n];
    dct.forward(&input, &mut spectrum).unwrap();
    dct.reverse(&spectrum, &mut back).unwrap();
    for (a, b) in back.iter().zip(input.iter()) {
        assert!((a - b / n as f32).abs() < 1e-4, "{} vs {}", a, b / n as f32);
    }
}

#[test]
fn normalization_mode_is_mutable() {
    let mut dct = DirectDct::new(4).unwrap();
    assert_eq!(dct.normalization(), TransformNorm::None);
    dct.set_normalization(TransformNorm::OneOverSqrtN);
    assert_eq!(dct.normalization(), TransformNorm::OneOverSqrtN);

    // The same input under OneOverN is the None output divided by N.
    let input = probe_signal(4);
    let mut a = vec![0.0f32; 4];
    let mut b = vec![0.0f32; 4];
    dct.set_normalization(TransformNorm::None);
    dct.forward(&input, &mut a).unwrap();
    dct.set_normalization(TransformNorm::OneOverN);
    dct.forward(&input, &mut b).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x / 4.0 - y).abs() < 1e-5);
    }
}

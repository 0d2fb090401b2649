//! Radix-2 Fast Fourier Transform engine.
//!
//! An iterative [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! decimation-in-time transform for power-of-two sizes. A [`Radix2Fft`]
//! engine is built once per size and precomputes its twiddle factors; a
//! [`FftPlanner`] caches twiddle tables so many engines of the same size
//! share one table. The engine exposes a single twiddle sign convention
//! (`exp(-2πik/N)`); an inverse transform is obtained by conjugating the
//! input and the output around a forward call.

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

/// Errors reported by the transform engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Transform size below the minimum of 2.
    SizeTooSmall,
    /// FFT size is not a power of two.
    NonPowerOfTwo,
    /// An input or output slice does not match the engine size.
    MismatchedLengths,
}

/// Spectral-energy scaling applied by the transform engines.
///
/// A forward/inverse pair must run under the same mode or the combined
/// scale is wrong; the engines do not detect a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformNorm {
    /// Unscaled.
    #[default]
    None,
    /// Divide by the transform size.
    OneOverN,
    /// Divide by the square root of the transform size.
    OneOverSqrtN,
}

/// Reverse the lowest `bits` bits of `i`.
#[inline(always)]
pub fn bit_reverse(i: usize, bits: u32) -> usize {
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Builds the twiddle table for size `n`: `n/2` entries `exp(-2πik/n)`,
/// generated by a phase recurrence so only one `sin_cos` is evaluated.
fn twiddle_table<T: Float>(n: usize) -> Arc<[Complex<T>]> {
    let half = n / 2;
    let angle = -T::from_f32(2.0) * T::pi() / T::from_f32(n as f32);
    let (sin_step, cos_step) = angle.sin_cos();

    let mut table: Vec<Complex<T>> = Vec::with_capacity(half);
    let mut w_re = T::one();
    let mut w_im = T::zero();
    for _ in 0..half {
        table.push(Complex::new(w_re, w_im));
        let tmp = w_re;
        w_re = w_re.mul_add(cos_step, -(w_im * sin_step));
        w_im = w_im.mul_add(cos_step, tmp * sin_step);
    }
    Arc::from(table)
}

fn validate_size(n: usize) -> Result<(), FftError> {
    if n < 2 {
        return Err(FftError::SizeTooSmall);
    }
    if !n.is_power_of_two() {
        return Err(FftError::NonPowerOfTwo);
    }
    Ok(())
}

/// Caches twiddle tables per transform size so repeated plans of the same
/// size share a single table.
#[derive(Debug)]
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve the twiddle table for size `n`, computing it on first use.
    /// The returned slice has length `n/2` and contains `exp(-2πi * k / n)`
    /// for `k = 0..n/2`.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if !self.cache.contains_key(&n) {
            #[cfg(feature = "verbose-logging")]
            log::debug!("computing {} twiddle factors for size {}", n / 2, n);
            self.cache.insert(n, twiddle_table(n));
        }
        Arc::clone(self.cache.get(&n).unwrap())
    }

    /// Plan a [`Radix2Fft`] engine of size `n`, sharing the cached twiddle
    /// table with every other engine planned at that size.
    pub fn plan(&mut self, n: usize) -> Result<Radix2Fft<T>, FftError> {
        validate_size(n)?;
        Ok(Radix2Fft {
            size: n,
            bits: n.trailing_zeros(),
            norm: TransformNorm::default(),
            twiddles: self.get_twiddles(n),
        })
    }
}

/// In-place iterative radix-2 DIT transform engine for one fixed
/// power-of-two size.
///
/// The size and twiddle table are fixed at construction; only the
/// normalization mode is mutable. A constructed engine may be shared
/// read-only across threads, provided each call supplies its own buffers.
#[derive(Debug)]
pub struct Radix2Fft<T: Float> {
    size: usize,
    bits: u32,
    norm: TransformNorm,
    twiddles: Arc<[Complex<T>]>,
}

impl<T: Float> Radix2Fft<T> {
    /// Create an engine for `size` points. `size` must be a power of two
    /// and at least 2; the twiddle table is computed here, once.
    pub fn new(size: usize) -> Result<Self, FftError> {
        validate_size(size)?;
        #[cfg(feature = "verbose-logging")]
        log::debug!("new radix-2 engine: size={}, stages={}", size, size.trailing_zeros());
        Ok(Self {
            size,
            bits: size.trailing_zeros(),
            norm: TransformNorm::default(),
            twiddles: twiddle_table(size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn normalization(&self) -> TransformNorm {
        self.norm
    }

    pub fn set_normalization(&mut self, norm: TransformNorm) {
        self.norm = norm;
    }

    fn scale_factor(&self) -> T {
        let n = T::from_f32(self.size as f32);
        match self.norm {
            TransformNorm::None => T::one(),
            TransformNorm::OneOverN => T::one() / n,
            TransformNorm::OneOverSqrtN => T::one() / n.sqrt(),
        }
    }

    /// Transform `input` into `output`. Both slices must be exactly
    /// [`size`](Self::size) long.
    ///
    /// The bit-reversal pass copies `input[i]` to `output[bit_reverse(i)]`
    /// while applying the normalization scale, so the mode is locked in
    /// before the butterfly stages run.
    pub fn transform(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        let n = self.size;
        if input.len() != n || output.len() != n {
            return Err(FftError::MismatchedLengths);
        }

        let scale = self.scale_factor();
        match self.norm {
            TransformNorm::None => {
                for (i, &c) in input.iter().enumerate() {
                    output[bit_reverse(i, self.bits)] = c;
                }
            }
            _ => {
                for (i, &c) in input.iter().enumerate() {
                    output[bit_reverse(i, self.bits)] = c.scale(scale);
                }
            }
        }

        // groups * half == n/2 at every stage; the twiddle stride is the
        // live group count.
        let mut groups = n >> 1;
        let mut half = 1usize;
        while groups > 0 {
            let span = half << 1;
            for g in 0..groups {
                let base = g * span;
                for b in 0..half {
                    let w = self.twiddles[b * groups];
                    let lo = base + b;
                    let hi = lo + half;
                    let even = output[lo];
                    let odd = output[hi].mul(w);
                    output[lo] = even.add(odd);
                    output[hi] = even.sub(odd);
                }
            }
            groups >>= 1;
            half <<= 1;
        }
        Ok(())
    }

    /// Convenience wrapper that allocates the output buffer.
    pub fn transform_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = alloc::vec![Complex::zero(); self.size];
        self.transform(input, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(Radix2Fft::<f32>::new(0).unwrap_err(), FftError::SizeTooSmall);
        assert_eq!(Radix2Fft::<f32>::new(1).unwrap_err(), FftError::SizeTooSmall);
        assert_eq!(Radix2Fft::<f32>::new(6).unwrap_err(), FftError::NonPowerOfTwo);
        assert!(Radix2Fft::<f32>::new(2).is_ok());
    }

    #[test]
    fn impulse_at_one_size_four() {
        let fft = Radix2Fft::<f64>::new(4).unwrap();
        let input = [
            Complex64::zero(),
            Complex64::new(1.0, 0.0),
            Complex64::zero(),
            Complex64::zero(),
        ];
        let mut out = vec![Complex64::zero(); 4];
        fft.transform(&input, &mut out).unwrap();
        // exp(-2πik/4) for k = 0..4
        let expect = [(1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)];
        for (c, (re, im)) in out.iter().zip(expect.iter()) {
            assert!((c.re - re).abs() < 1e-12, "re {} vs {}", c.re, re);
            assert!((c.im - im).abs() < 1e-12, "im {} vs {}", c.im, im);
        }
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec::Vec;
    use proptest::prop_assert;
    use proptest::proptest;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn random_signal_preserves_energy() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 256;
        let x: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let fft = Radix2Fft::<f64>::new(n).unwrap();
        let out = fft.transform_vec(&x).unwrap();
        let time_energy: f64 = x.iter().map(|c| c.norm_sqr()).sum();
        let freq_energy: f64 = out.iter().map(|c| c.norm_sqr()).sum();
        assert!((freq_energy - n as f64 * time_energy).abs() < 1e-6 * freq_energy);
    }

    proptest! {
        #[test]
        fn prop_conjugate_roundtrip(
            exp in 1u32..8,
            ref signal in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 128)
        ) {
            let n = 1usize << exp;
            let x: Vec<Complex64> = signal
                .iter()
                .take(n)
                .map(|&(re, im)| Complex64::new(re, im))
                .collect();
            let mut fft = Radix2Fft::<f64>::new(n).unwrap();
            fft.set_normalization(TransformNorm::OneOverSqrtN);
            let spectrum = fft.transform_vec(&x).unwrap();
            let conj: Vec<Complex64> = spectrum.iter().map(|c| c.conj()).collect();
            let back = fft.transform_vec(&conj).unwrap();
            for (a, b) in back.iter().map(|c| c.conj()).zip(x.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-9);
                prop_assert!((a.im - b.im).abs() < 1e-9);
            }
        }
    }
}

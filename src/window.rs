//! Window functions for spectral analysis.
//!
//! A window is produced by a fixed pipeline: map each index to a normalized
//! position in `[0, 1)` ([`Sampling`]), evaluate a pure [`Shape`] at that
//! position, then apply one global [`WindowNorm`] divisor. The generalized
//! pipeline in [`window_more`](crate::window_more) inserts extra warping
//! stages between those steps.
//!
//! Shapes form a closed set, so they are a plain enum dispatched by
//! [`Shape::amplitude`] rather than trait objects; the cosine-series
//! families carry their fixed coefficient tables as consts.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::Float;

/// Hann cosine coefficients.
const HANN: [f32; 2] = [0.5, 0.5];
/// Hamming cosine coefficients.
const HAMMING: [f32; 2] = [0.54, 0.46];
/// Blackman cosine coefficients.
const BLACKMAN: [f32; 3] = [0.42, 0.5, 0.08];
/// Nuttall cosine coefficients.
const NUTTALL: [f32; 4] = [0.355_768, 0.487_396, 0.144_232, 0.012_604];
/// Blackman-Harris cosine coefficients.
const BLACKMAN_HARRIS: [f32; 4] = [0.358_75, 0.488_29, 0.141_28, 0.011_68];
/// Blackman-Nuttall cosine coefficients.
const BLACKMAN_NUTTALL: [f32; 4] = [0.363_581_9, 0.489_177_5, 0.136_599_5, 0.010_641_1];
/// Flat-top cosine coefficients (peak-normalized five-term variant).
const FLAT_TOP: [f32; 5] = [
    0.215_578_95,
    0.416_631_58,
    0.277_263_16,
    0.083_578_947,
    0.006_947_368,
];

/// Errors reported by the window pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Window length below the minimum of 2.
    LengthTooSmall,
    /// Taper fraction outside `[0, 1]`.
    TaperOutOfRange,
    /// Power or inverse power outside `(0, 1]`.
    PowerOutOfRange,
    /// Power-blend factor outside `[0, 1]`.
    BlendOutOfRange,
    /// Top-scale factor not strictly positive.
    TopScaleOutOfRange,
    /// A caller-supplied buffer is shorter than the configured length.
    BufferTooShort,
}

/// How indices map to normalized positions in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// `x = i / N`: one full period, right endpoint excluded. The DFT
    /// convention for spectral analysis.
    #[default]
    Periodic,
    /// `x = i / (N - 1)`: endpoint inclusive, for filter design.
    Symmetric,
}

/// Amplitude-reference scaling applied after shape evaluation.
///
/// Distinct from [`TransformNorm`](crate::fft::TransformNorm): this picks
/// the sample statistic forced to 1.0, not a spectral-energy divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowNorm {
    /// Leave samples as the shape produced them.
    #[default]
    None,
    /// Divide by the maximum sample.
    Peak,
    /// Divide by the sample at index `N/2`.
    Center,
    /// Divide by the arithmetic mean.
    Area,
}

/// The closed set of window shapes. Each variant is a pure function of the
/// normalized position, peaking at the domain midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangular,
    Triangular,
    /// Welch window, `1 - (2x - 1)²`.
    Parabolic,
    /// Lanczos-style `sinc(degree · (2x - 1))`.
    Sinc { degree: u32 },
    Hann,
    Hamming,
    Blackman,
    Nuttall,
    BlackmanHarris,
    BlackmanNuttall,
    FlatTop,
}

/// `Σ (-1)^k · a_k · cos(2πkx)` over the fixed coefficient table.
fn cosine_series<T: Float>(coeffs: &[f32], x: T) -> T {
    let tau = T::from_f32(2.0) * T::pi();
    let mut sum = T::zero();
    for (k, &a) in coeffs.iter().enumerate() {
        let term = T::from_f32(a) * (tau * T::from_f32(k as f32) * x).cos();
        sum = if k % 2 == 0 { sum + term } else { sum - term };
    }
    sum
}

/// Normalized sinc, `sin(πt)/(πt)` with `sinc(0) = 1`.
fn sinc<T: Float>(t: T) -> T {
    if t == T::zero() {
        T::one()
    } else {
        let pt = T::pi() * t;
        pt.sin() / pt
    }
}

impl Shape {
    /// Raw amplitude at normalized position `x`.
    pub fn amplitude<T: Float>(self, x: T) -> T {
        let one = T::one();
        let two = T::from_f32(2.0);
        match self {
            Shape::Rectangular => one,
            Shape::Triangular => one - (two * x - one).abs(),
            Shape::Parabolic => {
                let t = two * x - one;
                one - t * t
            }
            Shape::Sinc { degree } => sinc(T::from_f32(degree as f32) * (two * x - one)),
            Shape::Hann => cosine_series(&HANN, x),
            Shape::Hamming => cosine_series(&HAMMING, x),
            Shape::Blackman => cosine_series(&BLACKMAN, x),
            Shape::Nuttall => cosine_series(&NUTTALL, x),
            Shape::BlackmanHarris => cosine_series(&BLACKMAN_HARRIS, x),
            Shape::BlackmanNuttall => cosine_series(&BLACKMAN_NUTTALL, x),
            Shape::FlatTop => cosine_series(&FLAT_TOP, x),
        }
    }
}

fn usize_to<T: Float>(x: usize) -> T {
    T::from_usize(x).unwrap_or_else(|| T::from_f32(x as f32))
}

/// Base window generator: sample, shape, normalize.
///
/// Setters validate eagerly; once configured, generation cannot fail except
/// for a too-short caller-supplied buffer.
#[derive(Debug, Clone)]
pub struct WindowGen {
    len: usize,
    shape: Shape,
    sampling: Sampling,
    norm: WindowNorm,
}

impl WindowGen {
    /// Create a generator for `len` samples of `shape`. `len` must be at
    /// least 2.
    pub fn new(shape: Shape, len: usize) -> Result<Self, WindowError> {
        if len < 2 {
            return Err(WindowError::LengthTooSmall);
        }
        Ok(Self {
            len,
            shape,
            sampling: Sampling::default(),
            norm: WindowNorm::default(),
        })
    }

    pub fn length(&self) -> usize {
        self.len
    }

    pub fn set_length(&mut self, len: usize) -> Result<(), WindowError> {
        if len < 2 {
            return Err(WindowError::LengthTooSmall);
        }
        self.len = len;
        Ok(())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    pub fn normalization(&self) -> WindowNorm {
        self.norm
    }

    pub fn set_normalization(&mut self, norm: WindowNorm) {
        self.norm = norm;
    }

    /// Normalized position of index `i` under the configured sampling.
    pub(crate) fn position<T: Float>(&self, i: usize) -> T {
        let divisor = match self.sampling {
            Sampling::Periodic => self.len,
            Sampling::Symmetric => self.len - 1,
        };
        usize_to::<T>(i) / usize_to::<T>(divisor)
    }

    /// Apply the configured normalization divisor over `out`. A zero
    /// reference statistic leaves the samples unscaled.
    pub(crate) fn apply_norm<T: Float>(&self, out: &mut [T]) {
        let divisor = match self.norm {
            WindowNorm::None => return,
            WindowNorm::Peak => {
                let mut max = out[0];
                for &v in &out[1..] {
                    if v > max {
                        max = v;
                    }
                }
                max
            }
            WindowNorm::Center => out[out.len() / 2],
            WindowNorm::Area => {
                let mut sum = T::zero();
                for &v in out.iter() {
                    sum = sum + v;
                }
                sum / usize_to::<T>(out.len())
            }
        };
        if divisor == T::zero() {
            return;
        }
        for v in out.iter_mut() {
            *v = *v / divisor;
        }
    }

    fn fill<T: Float>(&self, out: &mut [T]) {
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.shape.amplitude(self.position::<T>(i));
        }
        self.apply_norm(out);
    }

    /// Generate the window into a fresh buffer.
    pub fn generate<T: Float>(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.len];
        self.fill(&mut out);
        out
    }

    /// Generate the window into a reusable buffer, writing exactly
    /// [`length`](Self::length) samples. Fails before any write if the
    /// buffer is shorter than the configured length.
    pub fn generate_into<T: Float>(&self, out: &mut [T]) -> Result<(), WindowError> {
        if out.len() < self.len {
            return Err(WindowError::BufferTooShort);
        }
        self.fill(&mut out[..self.len]);
        Ok(())
    }
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prop_assert;
    use proptest::proptest;

    proptest! {
        #[test]
        fn prop_peak_norm_reaches_one(len in 2usize..256) {
            let mut gen = WindowGen::new(Shape::Blackman, len).unwrap();
            gen.set_normalization(WindowNorm::Peak);
            let w: Vec<f64> = gen.generate();
            let max = w.iter().copied().fold(f64::MIN, f64::max);
            prop_assert!((max - 1.0).abs() < 1e-9);
        }
    }
}

//! Direct Discrete Cosine Transform (DCT) engine.
//!
//! A reference O(N²) DCT-II (forward) / DCT-III (reverse) pair for
//! arbitrary sizes. The two cosine kernel tables are computed once at
//! construction and never mutated, so an engine is reusable and shareable
//! read-only across threads. The forward transform halves its DC term so
//! the reverse sum consumes it directly; under matching normalization the
//! pair round-trips (exactly so at `OneOverSqrtN`).
//!
//! Deliberately not fast: this engine is the simplest carrier of the
//! [`TransformNorm`](crate::fft::TransformNorm) contract shared with the
//! FFT engine.

use alloc::vec;
use alloc::vec::Vec;
use core::f32::consts::PI;
use libm::{cosf, sqrtf};

use crate::fft::{FftError, TransformNorm};

/// Fills a `k`-major `n × n` kernel table.
fn kernel_table(n: usize, f: impl Fn(usize, usize) -> f32) -> Vec<f32> {
    let mut table = vec![0.0; n * n];
    for k in 0..n {
        for i in 0..n {
            table[k * n + i] = f(k, i);
        }
    }
    table
}

/// Direct DCT-II/III transform engine for one fixed size.
#[derive(Debug)]
pub struct DirectDct {
    size: usize,
    norm: TransformNorm,
    /// Forward kernel: `cos(π/N · (i + 0.5) · k)`.
    fwd: Vec<f32>,
    /// Reverse kernel: `cos(π/N · i · (k + 0.5))`.
    rev: Vec<f32>,
}

impl DirectDct {
    /// Create an engine for `size` points. Any `size >= 2` is accepted;
    /// there is no power-of-two constraint.
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size < 2 {
            return Err(FftError::SizeTooSmall);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("new direct dct engine: size={}", size);
        let factor = PI / size as f32;
        Ok(Self {
            size,
            norm: TransformNorm::default(),
            fwd: kernel_table(size, |k, i| cosf(factor * (i as f32 + 0.5) * k as f32)),
            rev: kernel_table(size, |k, i| cosf(factor * i as f32 * (k as f32 + 0.5))),
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

    fn check_lengths(&self, input: &[f32], output: &[f32]) -> Result<(), FftError> {
        if input.len() != self.size || output.len() != self.size {
            return Err(FftError::MismatchedLengths);
        }
        Ok(())
    }

    /// Forward (type-II) transform. The DC term is halved before the
    /// uniform normalization scale (2, 2/N or 2/√N) is applied.
    pub fn forward(&self, input: &[f32], output: &mut [f32]) -> Result<(), FftError> {
        self.check_lengths(input, output)?;
        let n = self.size;
        for (k, out) in output.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, &x) in input.iter().enumerate() {
                sum += x * self.fwd[k * n + i];
            }
            *out = sum;
        }
        output[0] *= 0.5;
        let scale = match self.norm {
            TransformNorm::None => 2.0,
            TransformNorm::OneOverN => 2.0 / n as f32,
            TransformNorm::OneOverSqrtN => 2.0 / sqrtf(n as f32),
        };
        for out in output.iter_mut() {
            *out *= scale;
        }
        Ok(())
    }

    /// Reverse (type-III) transform, scaled by 1, 1/N or 1/√N.
    ///
    /// `reverse(forward(v))` yields `N·v` at [`TransformNorm::None`], `v`
    /// at [`TransformNorm::OneOverSqrtN`] and `v/N` at
    /// [`TransformNorm::OneOverN`].
    pub fn reverse(&self, input: &[f32], output: &mut [f32]) -> Result<(), FftError> {
        self.check_lengths(input, output)?;
        let n = self.size;
        for (k, out) in output.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, &x) in input.iter().enumerate() {
                sum += x * self.rev[k * n + i];
            }
            *out = sum;
        }
        let scale = match self.norm {
            TransformNorm::None => 1.0,
            TransformNorm::OneOverN => 1.0 / n as f32,
            TransformNorm::OneOverSqrtN => 1.0 / sqrtf(n as f32),
        };
        if scale != 1.0 {
            for out in output.iter_mut() {
                *out *= scale;
            }
        }
        Ok(())
    }
}

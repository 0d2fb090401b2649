//! Generalized window pipeline with taper, power-warp and top-scale stages.
//!
//! [`TaperedWindowGen`] wraps the base [`WindowGen`](crate::window::WindowGen)
//! pipeline and runs the fixed stage order sample → taper → shape →
//! power-warp → top-scale → normalize. Every extra stage defaults to the
//! identity, so a freshly built generator reproduces the base pipeline
//! exactly.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::Float;
use crate::window::{Sampling, Shape, WindowError, WindowGen, WindowNorm};

/// Position remapping applied between sampling and shape evaluation.
///
/// Both non-trivial tapers fix the midpoint: `remap(0.5, frac) = 0.5` for
/// every fraction in `[0, 1]`, and each half of the domain stays continuous
/// and monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Taper {
    /// Positions pass through unchanged.
    #[default]
    None,
    /// Linear edges: the rising and falling transitions are compressed into
    /// the first and last `frac/2` of the domain, with a flat 0.5 between.
    /// Degenerates to the constant 0.5 when `frac <= 0` and to the identity
    /// at `frac = 1`.
    Trapezium,
    /// Symmetric power sigmoid `0.5·(2x)^frac` below the midpoint, mirrored
    /// above it. Identity at `frac = 1`, flattens toward 0.5 as
    /// `frac -> 0`.
    Smooth,
}

impl Taper {
    /// Remap a normalized position through this taper.
    pub fn remap<T: Float>(self, x: T, frac: T) -> T {
        let one = T::one();
        let half = T::from_f32(0.5);
        match self {
            Taper::None => x,
            Taper::Trapezium => {
                if frac <= T::zero() {
                    return half;
                }
                let edge = half * frac;
                if x < edge {
                    x / frac
                } else if x > one - edge {
                    one - (one - x) / frac
                } else {
                    half
                }
            }
            Taper::Smooth => {
                if frac <= T::zero() {
                    return half;
                }
                let two = T::from_f32(2.0);
                if x <= half {
                    half * (two * x).powf(frac)
                } else {
                    one - half * (two * (one - x)).powf(frac)
                }
            }
        }
    }
}

/// Generalized window generator.
///
/// Adds a position taper, a nested-power amplitude warp and a top-scale
/// compression around the base pipeline. All range checks happen in the
/// setters; `generate` cannot fail once configured.
#[derive(Debug, Clone)]
pub struct TaperedWindowGen<T: Float> {
    base: WindowGen,
    taper: Taper,
    taper_frac: T,
    power: T,
    inverse_power: T,
    power_blend: T,
    top_scale: T,
}

impl<T: Float> TaperedWindowGen<T> {
    /// Create a generator for `len` samples of `shape`, with every warping
    /// stage at its identity setting.
    pub fn new(shape: Shape, len: usize) -> Result<Self, WindowError> {
        Ok(Self {
            base: WindowGen::new(shape, len)?,
            taper: Taper::default(),
            taper_frac: T::from_f32(0.5),
            power: T::one(),
            inverse_power: T::one(),
            power_blend: T::zero(),
            top_scale: T::one(),
        })
    }

    pub fn length(&self) -> usize {
        self.base.length()
    }

    pub fn set_length(&mut self, len: usize) -> Result<(), WindowError> {
        self.base.set_length(len)
    }

    pub fn shape(&self) -> Shape {
        self.base.shape()
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.base.set_shape(shape);
    }

    pub fn sampling(&self) -> Sampling {
        self.base.sampling()
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.base.set_sampling(sampling);
    }

    pub fn normalization(&self) -> WindowNorm {
        self.base.normalization()
    }

    pub fn set_normalization(&mut self, norm: WindowNorm) {
        self.base.set_normalization(norm);
    }

    pub fn taper(&self) -> Taper {
        self.taper
    }

    pub fn set_taper(&mut self, taper: Taper) {
        self.taper = taper;
    }

    pub fn taper_fraction(&self) -> T {
        self.taper_frac
    }

    /// Set the taper fraction. Must lie in `[0, 1]`.
    pub fn set_taper_fraction(&mut self, frac: T) -> Result<(), WindowError> {
        if !(frac >= T::zero() && frac <= T::one()) {
            return Err(WindowError::TaperOutOfRange);
        }
        self.taper_frac = frac;
        Ok(())
    }

    pub fn power(&self) -> T {
        self.power
    }

    /// Set the warp power. Must lie in `(0, 1]`.
    pub fn set_power(&mut self, power: T) -> Result<(), WindowError> {
        if !(power > T::zero() && power <= T::one()) {
            return Err(WindowError::PowerOutOfRange);
        }
        self.power = power;
        Ok(())
    }

    pub fn inverse_power(&self) -> T {
        self.inverse_power
    }

    /// Set the warp inverse power. Must lie in `(0, 1]`.
    pub fn set_inverse_power(&mut self, power: T) -> Result<(), WindowError> {
        if !(power > T::zero() && power <= T::one()) {
            return Err(WindowError::PowerOutOfRange);
        }
        self.inverse_power = power;
        Ok(())
    }

    pub fn power_blend(&self) -> T {
        self.power_blend
    }

    /// Set the blend between the two warp curves. Must lie in `[0, 1]`.
    pub fn set_power_blend(&mut self, blend: T) -> Result<(), WindowError> {
        if !(blend >= T::zero() && blend <= T::one()) {
            return Err(WindowError::BlendOutOfRange);
        }
        self.power_blend = blend;
        Ok(())
    }

    pub fn top_scale(&self) -> T {
        self.top_scale
    }

    /// Set the top-scale factor. Must be strictly positive.
    pub fn set_top_scale(&mut self, scale: T) -> Result<(), WindowError> {
        if !(scale > T::zero()) {
            return Err(WindowError::TopScaleOutOfRange);
        }
        self.top_scale = scale;
        Ok(())
    }

    /// Blend of the two complementary nested-power curves
    /// `1-(1-w^p)^q` and `(1-(1-w)^p)^q`. Defined at `w = 0` and `w = 1`
    /// for every valid exponent pair.
    fn power_warp(&self, w: T) -> T {
        let one = T::one();
        if self.power == one && self.inverse_power == one {
            return w;
        }
        let p = self.power;
        let q = self.inverse_power;
        let a = one - (one - w.powf(p)).powf(q);
        let b = (one - (one - w).powf(p)).powf(q);
        a + (b - a) * self.power_blend
    }

    fn fill(&self, out: &mut [T]) {
        let one = T::one();
        for (i, v) in out.iter_mut().enumerate() {
            let x = self.base.position::<T>(i);
            let x = self.taper.remap(x, self.taper_frac);
            let mut w = self.base.shape().amplitude(x);
            w = self.power_warp(w);
            if self.top_scale != one {
                w = one - (one - w) * self.top_scale;
            }
            *v = w;
        }
        self.base.apply_norm(out);
    }

    /// Generate the window into a fresh buffer.
    pub fn generate(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.length()];
        self.fill(&mut out);
        out
    }

    /// Generate the window into a reusable buffer, writing exactly
    /// [`length`](Self::length) samples. Fails before any write if the
    /// buffer is shorter than the configured length.
    pub fn generate_into(&self, out: &mut [T]) -> Result<(), WindowError> {
        if out.len() < self.length() {
            return Err(WindowError::BufferTooShort);
        }
        self.fill(&mut out[..self.length()]);
        Ok(())
    }
}

//! # specwin - frequency-domain transform core
//!
//! A compact spectral-analysis core: a radix-2 FFT engine with precomputed
//! twiddle factors, a direct DCT-II/III reference transform, and a
//! composable window-function pipeline. Optimized for predictability over
//! raw speed, and usable from embedded targets up.
//!
//! ## Features
//!
//! - **Radix-2 Cooley–Tukey FFT** with an engine-owned twiddle table and a
//!   planner that shares tables across engines of the same size
//! - **Direct DCT-II/III** forward/reverse pair for arbitrary sizes
//! - **Window pipeline**: rectangular, triangular, parabolic, sinc and
//!   cosine-series shapes (Hann, Hamming, Blackman, Nuttall,
//!   Blackman-Harris, Blackman-Nuttall, flat-top), plus a generalized
//!   variant with taper, power-warp and top-scale stages
//! - **no_std + alloc** throughout; `f32` and `f64` sample types
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library support
//! - `internal-tests`: property-test modules (pulls `proptest`/`rand`)
//! - `verbose-logging`: debug events through the `log` facade
//!
//! ## Normalization
//!
//! The transform engines and the window pipeline carry *distinct*
//! normalization enums: [`fft::TransformNorm`] divides spectral energy by
//! 1, N or √N, while [`window::WindowNorm`] rescales so a chosen sample
//! statistic (peak, center, mean) equals one. A forward/inverse transform
//! pair must use the same [`fft::TransformNorm`] value on both calls.
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;

/// Scalar float abstraction and complex samples.
pub mod num;

/// Radix-2 Fast Fourier Transform engine and planner.
pub mod fft;

/// Direct Discrete Cosine Transform (DCT-II/III) engine.
pub mod dct;

/// Window shapes and the base generation pipeline.
pub mod window;

/// Generalized window pipeline with taper and warp stages.
pub mod window_more;

pub use dct::DirectDct;
pub use fft::{bit_reverse, FftError, FftPlanner, Radix2Fft, TransformNorm};
pub use num::{Complex, Complex32, Complex64, Float};
pub use window::{Sampling, Shape, WindowError, WindowGen, WindowNorm};
pub use window_more::{Taper, TaperedWindowGen};

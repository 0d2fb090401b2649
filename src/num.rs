//! Scalar float abstraction and the complex sample type shared by the
//! transform engines.

use core::f32::consts::PI as PI32;

/// Minimal float trait so the transforms work for both `f32` and `f64`
/// without pulling in an external numeric tower. All transcendental
/// functions route through `libm` to stay `no_std`-clean.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn powf(self, e: Self) -> Self;
    fn abs(self) -> Self;
    fn pi() -> Self;
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn powf(self, e: Self) -> Self {
        libm::powf(self, e)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn pi() -> Self {
        PI32
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fmaf(self, a, b)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn powf(self, e: Self) -> Self {
        libm::pow(self, e)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fma(self, a, b)
    }
}

/// A complex sample. Arrays of these are caller-owned; the FFT engine never
/// retains them beyond a single call.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Unit complex exponential `exp(i*theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    /// Overwrite both components in place.
    #[inline(always)]
    pub fn set(&mut self, re: T, im: T) {
        self.re = re;
        self.im = im;
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    /// Complex division by the conjugate formula.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn div(self, other: Self) -> Self {
        let d = other.re * other.re + other.im * other.im;
        Self {
            re: (self.re * other.re + self.im * other.im) / d,
            im: (self.im * other.re - self.re * other.im) / d,
        }
    }
    /// Multiply both components by a real factor.
    #[inline(always)]
    pub fn scale(self, s: T) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Squared magnitude `re² + im²`.
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> core::ops::Div for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, other: Self) -> Self {
        Complex::<T>::div(self, other)
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        *self = Complex::<T>::add(*self, other);
    }
}

impl<T: Float> core::ops::SubAssign for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        *self = Complex::<T>::sub(*self, other);
    }
}

impl<T: Float> core::ops::MulAssign for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        *self = Complex::<T>::mul(*self, other);
    }
}

impl<T: Float> core::ops::DivAssign for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, other: Self) {
        *self = Complex::<T>::div(*self, other);
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

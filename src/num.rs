//! Scalar and complex number types shared by every transform.
//!
//! The crate only needs a handful of operations from its element types, so
//! instead of pulling in a numeric tower we keep a minimal [`Float`] trait
//! implemented for `f32` and `f64`. Transcendental functions go through
//! `libm` so the library stays usable without `std`.

// Minimal float trait for generic transforms (no_std friendly)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Default
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn from_f64(x: f64) -> Self;
    fn sqrt(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
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
    fn from_f64(x: f64) -> Self {
        x
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fma(self, a, b)
    }
}

/// Interleaved complex number.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

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
    /// Embed a real value on the real axis.
    #[inline(always)]
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }
    /// `exp(i * theta)`
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    #[inline(always)]
    pub fn scale(self, s: T) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }
    /// Multiply by `-i`.
    #[inline(always)]
    pub fn mul_neg_i(self) -> Self {
        Self {
            re: self.im,
            im: -self.re,
        }
    }
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re.mul_add(self.re, self.im * self.im)
    }
    pub fn abs(self) -> T {
        self.norm_sqr().sqrt()
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
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re.mul_add(other.re, -(self.im * other.im)),
            im: self.re.mul_add(other.im, self.im * other.re),
        }
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re = self.re + other.re;
        self.im = self.im + other.im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expi_quarter_turn() {
        let c = Complex64::expi(core::f64::consts::FRAC_PI_2);
        assert!(c.re.abs() < 1e-15);
        assert!((c.im - 1.0).abs() < 1e-15);
    }

    #[test]
    fn mul_matches_textbook_formula() {
        let a = Complex32::new(1.5, -2.0);
        let b = Complex32::new(-0.5, 3.0);
        let p = a * b;
        assert!((p.re - (1.5 * -0.5 - (-2.0 * 3.0))).abs() < 1e-6);
        assert!((p.im - (1.5 * 3.0 + (-2.0 * -0.5))).abs() < 1e-6);
    }

    #[test]
    fn mul_neg_i_rotates_clockwise() {
        let c = Complex64::new(2.0, 3.0).mul_neg_i();
        assert_eq!(c, Complex64::new(3.0, -2.0));
    }

    #[test]
    fn abs_of_three_four() {
        assert!((Complex64::new(3.0, 4.0).abs() - 5.0).abs() < 1e-12);
    }

    fn float_ops_agree<T: Float + Into<f64>>(tol: f64) {
        assert_eq!(T::zero().into(), 0.0);
        assert!((T::from_f64(2.25).sqrt().into() - 1.5).abs() < tol);
        let (s, c) = T::from_f64(core::f64::consts::FRAC_PI_6).sin_cos();
        assert!((s.into() - 0.5).abs() < tol);
        assert!((c.into() - 0.866_025_403_784_438_6).abs() < tol);
        let fused = T::from_f64(3.0).mul_add(T::from_f64(4.0), T::from_f64(-2.0));
        assert!((fused.into() - 10.0).abs() < tol);
    }

    #[test]
    fn float_ops_for_both_precisions() {
        float_ops_agree::<f32>(1e-6);
        float_ops_agree::<f64>(1e-14);
    }
}

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point component type for spacetime vectors.
///
/// Implemented for `f32` and `f64`. With the `std` feature the transcendental
/// functions use the inherent float methods, otherwise they go through `libm`.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const PI: Self;
    const TAU: Self;

    /// `(sin, cos)` of one angle, computed together.
    fn sin_cos(self) -> (Self, Self);
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// `sqrt(self² + other²)` without intermediate overflow or underflow.
    fn hypot(self, other: Self) -> Self;
    fn clamp(self, lo: Self, hi: Self) -> Self;
    fn is_finite(self) -> bool;

    fn to_f64(self) -> f64;
}

#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        x.acos()
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        x.acos()
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn hypot_f32(x: f32, y: f32) -> f32 {
        x.hypot(y)
    }
    #[inline(always)]
    pub fn hypot_f64(x: f64, y: f64) -> f64 {
        x.hypot(y)
    }
}

#[cfg(not(feature = "std"))]
mod float_ops {
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        libm::acos(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn hypot_f32(x: f32, y: f32) -> f32 {
        libm::hypotf(x, y)
    }
    #[inline(always)]
    pub fn hypot_f64(x: f64, y: f64) -> f64 {
        libm::hypot(x, y)
    }
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $pi:expr, $tau:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const PI: Self = $pi;
            const TAU: Self = $tau;

            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $suffix>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $suffix>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $suffix>](self, other) }
            #[inline] fn hypot(self, other: Self) -> Self { float_ops::[<hypot_ $suffix>](self, other) }

            #[inline] fn clamp(self, lo: Self, hi: Self) -> Self {
                if self < lo { lo } else if self > hi { hi } else { self }
            }
            #[inline] fn is_finite(self) -> bool { <$t>::is_finite(self) }

            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(
    f32,
    f32,
    core::f32::consts::PI,
    core::f32::consts::TAU
);
impl_scalar_float!(
    f64,
    f64,
    core::f64::consts::PI,
    core::f64::consts::TAU
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_basics() {
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f64::ONE, 1.0);
        assert_eq!(f64::PI, core::f64::consts::PI);
        assert_eq!(f64::TAU, 2.0 * core::f64::consts::PI);
        assert_eq!(Scalar::to_f64(0.5_f64), 0.5);
    }

    #[test]
    fn f32_basics() {
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f32::PI, core::f32::consts::PI);
        assert_eq!(Scalar::to_f64(0.5_f32), 0.5);
    }

    #[test]
    fn sin_cos_matches_separate_calls() {
        for &a in &[0.0_f64, 0.3, 1.0, 2.5, -4.0] {
            let (s, c) = Scalar::sin_cos(a);
            assert!((s - libm::sin(a)).abs() < 1e-15);
            assert!((c - libm::cos(a)).abs() < 1e-15);
        }
    }

    #[test]
    fn hypot_survives_extremes() {
        assert_eq!(Scalar::hypot(3.0_f64, 4.0), 5.0);
        let big = Scalar::hypot(1e200_f64, 1e200);
        assert!((big / 1e200 - core::f64::consts::SQRT_2).abs() < 1e-14);
        assert_eq!(Scalar::hypot(0.0_f64, -1e-200), 1e-200);
        assert_eq!(Scalar::hypot(0.0_f32, 1e20), 1e20);
    }

    #[test]
    fn clamp_and_finiteness() {
        assert_eq!(Scalar::clamp(1.5_f64, -1.0, 1.0), 1.0);
        assert_eq!(Scalar::clamp(-1.5_f64, -1.0, 1.0), -1.0);
        assert!(Scalar::is_finite(2.0_f64));
        assert!(!Scalar::is_finite(f64::NAN));
        assert!(!Scalar::is_finite(f32::INFINITY));
    }
}

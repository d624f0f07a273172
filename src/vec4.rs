use crate::Scalar;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A point in spacetime stored as four positional components.
///
/// The components carry no coordinate tag: the same value may hold Cartesian
/// `(x, y, z, t)` or Schwarzschild `(r, phi, theta, t)`, and the caller tracks
/// which. Prefer [`Cartesian`](crate::Cartesian) and
/// [`Schwarzschild`](crate::Schwarzschild) where the system is known.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub t: S,
}

impl<S: Scalar> Vec4<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, t: S) -> Self { Self { x, y, z, t } }

    #[inline]
    pub fn zero() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v, v) }

    /// Cartesian vector for the Schwarzschild point `(r, phi, theta, t)`.
    ///
    /// `phi` is azimuthal, `theta` is measured from the +z axis. Nothing is
    /// range-checked; NaN and infinities propagate.
    #[inline]
    pub fn from_schwarzschild(r: S, phi: S, theta: S, t: S) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();

        Self::new(
            r * sin_theta * cos_phi,
            r * sin_theta * sin_phi,
            r * cos_theta,
            t,
        )
    }

    /// Reads `self` as `(r, phi, theta, t)` and returns the Cartesian vector.
    #[inline]
    pub fn schwarzschild_to_rect(self) -> Self {
        Self::from_schwarzschild(self.x, self.y, self.z, self.t)
    }

    /// In-place form of [`schwarzschild_to_rect`](Self::schwarzschild_to_rect).
    ///
    /// Only the first three slots are written; `t` is left untouched.
    #[inline]
    pub fn convert_schwarzschild_to_rect(&mut self) {
        // Slot 0 holds r and is about to become x.
        let r = self.x;
        let (sin_phi, cos_phi) = self.y.sin_cos();
        let (sin_theta, cos_theta) = self.z.sin_cos();

        self.x = r * sin_theta * cos_phi;
        self.y = r * sin_theta * sin_phi;
        self.z = r * cos_theta;
    }

    /// Reads `self` as Cartesian `(x, y, z, t)` and returns `(r, phi, theta, t)`.
    ///
    /// `phi` lands in `[0, 2π)` and `theta` in `[0, π]`. The origin maps to
    /// `r = phi = theta = 0`.
    #[inline]
    pub fn rect_to_schwarzschild(self) -> Self {
        let r = self.spatial_norm();
        let theta = if r > S::ZERO {
            (self.z / r).clamp(-S::ONE, S::ONE).acos()
        } else {
            S::ZERO
        };
        let mut phi = self.y.atan2(self.x);
        if phi < S::ZERO {
            phi += S::TAU;
        }
        // atan2 of a tiny negative angle can round up to exactly TAU
        if phi >= S::TAU {
            phi = S::ZERO;
        }
        Self::new(r, phi, theta, self.t)
    }

    /// `x² + y² + z²`, ignoring `t`.
    #[inline]
    pub fn spatial_norm_sq(self) -> S {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of the spatial part, accurate for components whose squares
    /// would overflow or underflow.
    #[inline]
    pub fn spatial_norm(self) -> S { self.x.hypot(self.y).hypot(self.z) }

    #[inline]
    pub fn as_array(&self) -> [S; 4] {
        [self.x, self.y, self.z, self.t]
    }
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self { Self::zero() }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl<S: Scalar> From<Vec4<S>> for [S; 4] {
    fn from(v: Vec4<S>) -> Self { [v.x, v.y, v.z, v.t] }
}

impl<S> Index<usize> for Vec4<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.t,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl<S> IndexMut<usize> for Vec4<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.t,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.t + rhs.t)
    }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.t - rhs.t)
    }
}

impl<S: Scalar> Neg for Vec4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.t) }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.t * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.t / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec4<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z; self.t += rhs.t;
    }
}

impl<S: Scalar> SubAssign for Vec4<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z; self.t -= rhs.t;
    }
}

impl<S: Scalar> MulAssign<S> for Vec4<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs; self.t *= rhs;
    }
}

impl<S: Scalar> core::fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.t)
    }
}

use crate::{Scalar, Schwarzschild, Vec4};

/// A spacetime point in rectangular coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cartesian<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub t: S,
}

impl<S: Scalar> Cartesian<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, t: S) -> Self { Self { x, y, z, t } }

    /// Spatial origin at time `t`.
    #[inline]
    pub fn origin(t: S) -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO, t) }

    /// Inverse of [`Schwarzschild::to_cartesian`].
    ///
    /// `phi` is wrapped into `[0, 2π)`. On the z axis `phi` is 0, and at the
    /// origin `theta` is 0 as well.
    #[inline]
    pub fn to_schwarzschild(self) -> Schwarzschild<S> {
        Schwarzschild::from_vec4(self.to_vec4().rect_to_schwarzschild())
    }

    /// Distance from the spatial origin.
    #[inline]
    pub fn radius(self) -> S { self.to_vec4().spatial_norm() }

    #[inline]
    pub fn to_vec4(self) -> Vec4<S> { Vec4::new(self.x, self.y, self.z, self.t) }

    #[inline]
    pub fn from_vec4(v: Vec4<S>) -> Self { Self::new(v.x, v.y, v.z, v.t) }
}

impl<S: Scalar> From<Cartesian<S>> for Schwarzschild<S> {
    #[inline]
    fn from(p: Cartesian<S>) -> Self { p.to_schwarzschild() }
}

impl<S: Scalar> From<Cartesian<S>> for Vec4<S> {
    #[inline]
    fn from(p: Cartesian<S>) -> Self { p.to_vec4() }
}

impl<S: Scalar> core::fmt::Display for Cartesian<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "(x={}, y={}, z={}, t={})", self.x, self.y, self.z, self.t)
    }
}

//! schwarzschild — spacetime points for black-hole visualization
//!
//! Four-component spacetime vectors and conversion between Schwarzschild
//! `(r, phi, theta, t)` and rectangular `(x, y, z, t)` coordinates. Generic
//! over `f32` and `f64`.
//!
//! # Layout
//! - [`Vec4`] is untagged: the caller decides which system its slots hold.
//! - [`Schwarzschild`] and [`Cartesian`] name their system in the type, and
//!   convert into each other with `From`.
//! - The free functions mirror the untagged API for callers that prefer them.
//!
//! ```
//! use schwarzschild::{Schwarzschild, Cartesian};
//!
//! let p = Schwarzschild::new(1.0, 0.0, core::f64::consts::FRAC_PI_2, 5.0);
//! let c: Cartesian<f64> = p.into();
//! assert!((c.x - 1.0).abs() < 1e-9);
//! assert_eq!(c.t, 5.0);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod scalar;
mod vec4;
mod schwarzschild;
mod cartesian;
mod error;

pub use scalar::Scalar;
pub use vec4::Vec4;
pub use schwarzschild::Schwarzschild;
pub use cartesian::Cartesian;
pub use error::CoordError;

/// Builds a vector from its four components, in order.
#[inline]
pub fn make_vector<S: Scalar>(x: S, y: S, z: S, t: S) -> Vec4<S> {
    Vec4::new(x, y, z, t)
}

/// Rectangular vector for the Schwarzschild point `(r, phi, theta, t)`.
#[inline]
pub fn from_schwarzschild<S: Scalar>(r: S, phi: S, theta: S, t: S) -> Vec4<S> {
    Vec4::from_schwarzschild(r, phi, theta, t)
}

/// Reads `v` as `(r, phi, theta, t)` and returns the rectangular vector.
#[inline]
pub fn vector_from_schwarzschild<S: Scalar>(v: Vec4<S>) -> Vec4<S> {
    v.schwarzschild_to_rect()
}

/// Overwrites the spatial slots of `v` with rectangular coordinates. The
/// time slot is never written.
#[inline]
pub fn convert_schwarzschild_to_rect_in_place<S: Scalar>(v: &mut Vec4<S>) {
    v.convert_schwarzschild_to_rect()
}

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: four fields of one float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec4<f32>);
    impl_pod!(Vec4<f64>);
    impl_pod!(Schwarzschild<f32>);
    impl_pod!(Schwarzschild<f64>);
    impl_pod!(Cartesian<f32>);
    impl_pod!(Cartesian<f64>);
}

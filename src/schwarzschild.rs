use crate::{Cartesian, CoordError, Scalar, Vec4};

/// A spacetime point in Schwarzschild coordinates.
///
/// The spatial part is ordinary spherical coordinates: `phi` is the azimuth
/// in the xy-plane, `theta` is the angle from the +z axis. `t` is shared with
/// the Cartesian form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schwarzschild<S> {
    pub r: S,
    pub phi: S,
    pub theta: S,
    pub t: S,
}

impl<S: Scalar> Schwarzschild<S> {
    /// Unchecked: any values are accepted, including negative `r`.
    #[inline]
    pub fn new(r: S, phi: S, theta: S, t: S) -> Self { Self { r, phi, theta, t } }

    /// Validating constructor.
    ///
    /// Requires every component finite, `r >= 0` and `theta` in `[0, π]`.
    /// `phi` may be any finite angle.
    pub fn try_new(r: S, phi: S, theta: S, t: S) -> Result<Self, CoordError> {
        let err = if !r.is_finite() {
            Some(CoordError::NonFinite { component: "r" })
        } else if !phi.is_finite() {
            Some(CoordError::NonFinite { component: "phi" })
        } else if !theta.is_finite() {
            Some(CoordError::NonFinite { component: "theta" })
        } else if !t.is_finite() {
            Some(CoordError::NonFinite { component: "t" })
        } else if r < S::ZERO {
            Some(CoordError::NegativeRadius(r.to_f64()))
        } else if theta < S::ZERO || theta > S::PI {
            Some(CoordError::PolarAngleOutOfRange(theta.to_f64()))
        } else {
            None
        };

        match err {
            None => Ok(Self::new(r, phi, theta, t)),
            Some(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "rejected schwarzschild point");
                Err(e)
            }
        }
    }

    /// The Cartesian point at the same location and time.
    #[inline]
    pub fn to_cartesian(self) -> Cartesian<S> {
        let v = Vec4::from_schwarzschild(self.r, self.phi, self.theta, self.t);
        Cartesian::new(v.x, v.y, v.z, v.t)
    }

    /// Untagged view as `(r, phi, theta, t)`.
    #[inline]
    pub fn to_vec4(self) -> Vec4<S> { Vec4::new(self.r, self.phi, self.theta, self.t) }

    /// Reinterprets an untagged vector as `(r, phi, theta, t)`.
    #[inline]
    pub fn from_vec4(v: Vec4<S>) -> Self { Self::new(v.x, v.y, v.z, v.t) }
}

impl<S: Scalar> From<Schwarzschild<S>> for Cartesian<S> {
    #[inline]
    fn from(p: Schwarzschild<S>) -> Self { p.to_cartesian() }
}

impl<S: Scalar> core::fmt::Display for Schwarzschild<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "(r={}, phi={}, theta={}, t={})", self.r, self.phi, self.theta, self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn to_cartesian_matches_untagged() {
        let p = Schwarzschild::new(3.0, 0.7, 1.9, 11.0);
        let c = p.to_cartesian();
        assert_eq!(c.to_vec4(), p.to_vec4().schwarzschild_to_rect());
    }

    #[test]
    fn from_impl_delegates() {
        let p = Schwarzschild::new(2.0, FRAC_PI_2, FRAC_PI_2, 0.0);
        let c: Cartesian<f64> = p.into();
        assert!(c.x.abs() < 1e-9);
        assert!((c.y - 2.0).abs() < 1e-9);
        assert!(c.z.abs() < 1e-9);
    }

    #[test]
    fn try_new_accepts_boundaries() {
        assert!(Schwarzschild::try_new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Schwarzschild::try_new(1.0, -10.0, PI, -3.0).is_ok());
    }

    #[test]
    fn try_new_rejects_negative_radius() {
        assert_eq!(
            Schwarzschild::try_new(-1.0, 0.0, 1.0, 0.0),
            Err(CoordError::NegativeRadius(-1.0))
        );
    }

    #[test]
    fn try_new_rejects_polar_angle() {
        assert_eq!(
            Schwarzschild::try_new(1.0, 0.0, -0.1, 0.0),
            Err(CoordError::PolarAngleOutOfRange(-0.1))
        );
        assert!(matches!(
            Schwarzschild::try_new(1.0, 0.0, 3.5, 0.0),
            Err(CoordError::PolarAngleOutOfRange(_))
        ));
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert_eq!(
            Schwarzschild::try_new(1.0, f64::NAN, 1.0, 0.0),
            Err(CoordError::NonFinite { component: "phi" })
        );
        assert_eq!(
            Schwarzschild::try_new(1.0, 0.0, 1.0, f64::INFINITY),
            Err(CoordError::NonFinite { component: "t" })
        );
    }

    #[test]
    fn vec4_roundtrip_is_positional() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let p = Schwarzschild::from_vec4(v);
        assert_eq!((p.r, p.phi, p.theta, p.t), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(p.to_vec4(), v);
    }
}

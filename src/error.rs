//! Error types for checked coordinate construction.

use core::fmt;

/// Reasons a Schwarzschild point was rejected by
/// [`Schwarzschild::try_new`](crate::Schwarzschild::try_new).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoordError {
    /// A component was NaN or infinite.
    NonFinite { component: &'static str },
    /// Radius below zero.
    NegativeRadius(f64),
    /// Polar angle outside `[0, π]`.
    PolarAngleOutOfRange(f64),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { component } => write!(f, "component {component} is not finite"),
            Self::NegativeRadius(r) => write!(f, "negative radius: {r}"),
            Self::PolarAngleOutOfRange(theta) => {
                write!(f, "polar angle {theta} outside [0, pi]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

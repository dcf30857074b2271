//! Geometry construction errors.

use std::fmt;

/// Errors arising from malformed geometric inputs.
///
/// Mirrors the `InvalidGeometry` error kind: negative box dimensions, or a
/// [`Streak`](crate::Streak) whose `end_x` does not exceed its start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A `CoordBox` was constructed with a negative dimension.
    NegativeDimension {
        /// Axis index of the offending dimension.
        axis: usize,
        /// The negative value supplied.
        value: i32,
    },
    /// A `Streak` was constructed with `end_x <= start.x`.
    EmptyStreak {
        /// The starting x coordinate.
        start_x: i32,
        /// The (invalid) end x coordinate.
        end_x: i32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDimension { axis, value } => {
                write!(f, "dimension on axis {axis} must be nonnegative, got {value}")
            }
            Self::EmptyStreak { start_x, end_x } => {
                write!(f, "streak end_x ({end_x}) must exceed start.x ({start_x})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

//! Errors reported by the integrators and operators.
use thiserror::Error;

/// Shorthand for results carrying a [`CalculusError`].
pub type Result<T> = std::result::Result<T, CalculusError>;

/// Everything that can go wrong before a computation starts. All variants describe a programming
/// error of the caller; none of them is transient.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalculusError {
    /// A step size was zero where it is used as a divisor or as the increment of a progression.
    /// For multi-dimensional integrals `dimension` names the offending axis.
    #[error("infinitesimal is zero{}", axis(.dimension))]
    InvalidStep {
        /// Index of the dimension whose step is zero, if there is more than one.
        dimension: Option<usize>,
    },

    /// The number of limits or steps does not agree with the declared domain of the field.
    #[error("incorrect dimensions: field has domain {domain}, got {limits} limits and {steps} steps")]
    DimensionMismatch {
        /// Declared domain dimension of the field.
        domain: usize,
        /// Number of integration intervals supplied.
        limits: usize,
        /// Number of step sizes supplied.
        steps: usize,
    },
}

fn axis(dimension: &Option<usize>) -> String {
    dimension.map_or_else(String::new, |d| format!(" in dimension {}", d))
}

//! Integration domains: intervals and regions made out of them.
use crate::core::error::{CalculusError, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The bounds of one dimension. A `lower` bound larger than `upper` is not an error, it flips the
/// orientation of the interval.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

impl<T: Float> Interval<T> {
    /// Constructor.
    pub const fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower bound as given.
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound as given.
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns $-1$ if the lower bound exceeds the upper one, and $+1$ otherwise.
    pub fn orientation(&self) -> T {
        if self.lower > self.upper {
            -T::one()
        } else {
            T::one()
        }
    }

    /// Returns the bounds in ascending order together with the orientation.
    pub fn ordered(&self) -> (T, T, T) {
        if self.lower > self.upper {
            (self.upper, self.lower, -T::one())
        } else {
            (self.lower, self.upper, T::one())
        }
    }

    /// Signed width `upper - lower`.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }
}

impl<T: Float> From<(T, T)> for Interval<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Self::new(lower, upper)
    }
}

/// A hyper-rectangle together with the grid used to sample it: one [`Interval`] and one step size
/// per dimension. Regions are plain data and can be stored as JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Region<T> {
    limits: Vec<Interval<T>>,
    steps: Vec<T>,
}

impl<T: Float> Region<T> {
    /// Constructor. The lengths are not checked until the region is used, see
    /// [`Region::validate`].
    pub fn new(limits: Vec<Interval<T>>, steps: Vec<T>) -> Self {
        Self { limits, steps }
    }

    /// A region where every dimension is sampled with the same `step`.
    pub fn uniform(limits: Vec<Interval<T>>, step: T) -> Self {
        let steps = vec![step; limits.len()];
        Self { limits, steps }
    }

    /// Returns the intervals, outermost dimension first.
    pub fn limits(&self) -> &[Interval<T>] {
        &self.limits
    }

    /// Returns the step sizes, outermost dimension first.
    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    /// Number of intervals in this region.
    pub fn dim(&self) -> usize {
        self.limits.len()
    }

    /// The volume of one grid cell, $\prod_i \Delta x_i$. The empty product is one.
    pub fn jacobian(&self) -> T {
        self.steps.iter().fold(T::one(), |jac, &d| jac * d)
    }

    /// Checks that this region can be integrated against a field with `domain` input dimensions:
    /// the number of limits and the number of steps must both equal `domain`, and no step may be
    /// zero.
    pub fn validate(&self, domain: usize) -> Result<()> {
        if self.limits.len() != domain || self.steps.len() != domain {
            return Err(CalculusError::DimensionMismatch {
                domain,
                limits: self.limits.len(),
                steps: self.steps.len(),
            });
        }

        if let Some(dimension) = self.steps.iter().position(|d| d.is_zero()) {
            return Err(CalculusError::InvalidStep {
                dimension: Some(dimension),
            });
        }

        Ok(())
    }
}

//! Fixed-step definite integration of scalar fields.
use crate::core::*;

use num_traits::Float;
use std::ops::AddAssign;

/// Sums `f(x)` for `x = lower, lower + d, lower + 2d, ...` as long as `x < upper`. The abscissa is
/// advanced by repeated addition, so whether a sample lands on `upper` depends on rounding.
pub(crate) fn left_sum<T, F>(lower: T, upper: T, f: &F, d: T) -> T
where
    T: AddAssign + Float,
    F: ScalarField<T> + ?Sized,
{
    let mut sum = T::zero();
    let mut x = lower;

    while x < upper {
        sum += f.call(x);
        x += d;
    }

    sum
}

/// Approximates $\int_a^b \mathrm{d}x \, f(x)$ with a left-endpoint Riemann sum of step `d`:
///
/// $$ \int_a^b \mathrm{d}x \, f(x) \approx \sigma \, d \sum_{j} f(\min(a,b) + j d) $$
///
/// where the sum runs over all samples strictly below $\max(a,b)$ and $\sigma = -1$ if $a > b$,
/// $\sigma = +1$ otherwise.
///
/// # Errors
///
/// Returns [`CalculusError::InvalidStep`] if `d` is zero. A negative `d` never reaches the upper
/// bound and is the caller's responsibility.
pub fn def_integrate<T, F>(a: T, b: T, f: &F, d: T) -> Result<T>
where
    T: AddAssign + Float,
    F: ScalarField<T> + ?Sized,
{
    if d.is_zero() {
        return Err(CalculusError::InvalidStep { dimension: None });
    }

    let (lower, upper, orientation) = Interval::new(a, b).ordered();

    Ok(orientation * left_sum(lower, upper, f, d) * d)
}

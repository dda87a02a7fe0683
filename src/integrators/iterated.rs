//! Iterated integration of vector fields over hyper-rectangles.
use crate::core::*;

use num_traits::Float;
use std::ops::AddAssign;

/// Adds `src` to `dst` component-wise.
fn add<T: AddAssign + Copy>(dst: &mut [T], src: &[T]) {
    dst.iter_mut().zip(src).for_each(|(d, &s)| *d += s);
}

/// Approximates the iterated integral
///
/// $$ \int_{a_1}^{b_1} \mathrm{d} x_1 \cdots \int_{a_n}^{b_n} \mathrm{d} x_n \,
/// \vec{f}(x_1, \ldots, x_n) $$
///
/// of the field over the hyper-rectangle spanned by `limits`, using the grid with spacing
/// `steps`. `limits[0]` and `steps[0]` belong to the outermost integral.
///
/// The grid is walked like an odometer: the innermost coordinate starts at its lower bound and
/// advances by its step while it is below its upper bound, the field being evaluated and summed
/// at every point. Afterwards it is reset to its lower bound and the next outer coordinate
/// advances by one step. An outer coordinate that ends up above its upper bound is reset as well
/// and carries further out, and the walk ends once the outermost coordinate is no longer below
/// its upper bound. The sum is scaled by the cell volume $\prod_i \Delta x_i$ once at the end.
///
/// A field with a zero-dimensional domain is evaluated once at the empty point.
///
/// # Errors
///
/// Returns [`CalculusError::DimensionMismatch`] if the number of limits or steps differs from
/// `field.domain_dim()`, and [`CalculusError::InvalidStep`] if a step is zero. In both cases the
/// field is never called.
pub fn iterated_integral<T, V>(limits: &[Interval<T>], field: &V, steps: &[T]) -> Result<Vec<T>>
where
    T: AddAssign + Float,
    V: VectorField<T> + ?Sized,
{
    let domain = field.domain_dim();

    if limits.len() != domain || steps.len() != domain {
        return Err(CalculusError::DimensionMismatch {
            domain,
            limits: limits.len(),
            steps: steps.len(),
        });
    }

    if let Some(dimension) = steps.iter().position(|d| d.is_zero()) {
        return Err(CalculusError::InvalidStep {
            dimension: Some(dimension),
        });
    }

    let mut sum = vec![T::zero(); field.range_dim()];

    if domain == 0 {
        add(&mut sum, &field.call(&[]));
        return Ok(sum);
    }

    let mut cursor: Vec<_> = limits.iter().map(Interval::lower).collect();

    let first_upper = limits[0].upper();
    let last = domain - 1;
    let last_upper = limits[last].upper();
    let last_step = steps[last];

    while cursor[0] < first_upper {
        // innermost integral
        while cursor[last] < last_upper {
            add(&mut sum, &field.call(&cursor));
            cursor[last] += last_step;
        }

        // the innermost coordinate is past its range and always carries
        for i in (1..=last).rev() {
            if i != last && cursor[i] <= limits[i].upper() {
                break;
            }

            cursor[i] = limits[i].lower();
            cursor[i - 1] += steps[i - 1];
        }
    }

    let jacobian = steps.iter().fold(T::one(), |jac, &d| jac * d);
    sum.iter_mut().for_each(|s| *s = *s * jacobian);

    Ok(sum)
}

/// Same as [`iterated_integral`] with limits and steps taken from `region`.
///
/// # Errors
///
/// See [`Region::validate`].
pub fn iterated_integral_over<T, V>(region: &Region<T>, field: &V) -> Result<Vec<T>>
where
    T: AddAssign + Float,
    V: VectorField<T> + ?Sized,
{
    region.validate(field.domain_dim())?;
    iterated_integral(region.limits(), field, region.steps())
}

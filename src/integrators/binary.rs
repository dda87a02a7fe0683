//! Progressive integration by binary partitioning of the integration range.
//!
//! At level $k$ the range $[a, b]$ is divided into $2^k$ parts of width $\delta_k = (b-a)/2^k$ and
//! the integral is estimated by the left-endpoint sum over these parts. Going from level $k-1$ to
//! level $k$ only introduces the points at odd multiples of $\delta_k$; all other samples are the
//! ones of the previous levels and are reused:
//!
//! ```text
//! level 0  |.......
//! level 1  |...|...
//! level 2  |.|.|.|.
//! level 3  ||||||||
//! ```
//!
//! Every level therefore costs as many evaluations as all previous levels together, and the total
//! cost of reaching level $k$ is $2^k$ evaluations, the same as a single fixed-step sum on the
//! finest partition.
use crate::callbacks::Observer;
use crate::core::*;

use num_traits::Float;
use std::ops::AddAssign;

/// Approximates $\int_a^b \mathrm{d}x \, f(x)$ by refining a binary partition `depth` times and
/// returns the estimate of the finest level, which uses $2^\mathrm{depth}$ samples.
///
/// If an `observer` is given it receives the estimate of every level, from level zero (the
/// single sample `f(a)` times `b - a`) up to level `depth`, so it is called exactly `depth + 1`
/// times. Without an observer nothing is reported.
pub fn binary_integrate<T, F>(
    a: T,
    b: T,
    f: &F,
    depth: usize,
    mut observer: Option<&mut dyn Observer<T>>,
) -> T
where
    T: AddAssign + Float,
    F: ScalarField<T> + ?Sized,
{
    let two = T::one() + T::one();
    // range of integration
    let roi = b - a;
    let mut parts = T::one();
    let mut delta = roi;

    let mut sum = f.call(a);

    if let Some(observer) = observer.as_deref_mut() {
        observer.observe(sum * roi);
    }

    for _ in 0..depth {
        parts = parts * two;
        delta = roi / parts;

        // only the odd points are new
        let mut j = T::one();
        while j < parts {
            sum += f.call(a + j * delta);
            j += two;
        }

        if let Some(observer) = observer.as_deref_mut() {
            observer.observe(sum * delta);
        }
    }

    sum * delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::EstimateHistory;
    use std::cell::RefCell;

    #[test]
    fn depth_zero() {
        let mut history = EstimateHistory::<f64>::new();
        let result = binary_integrate(1.0, 3.0, &|x: f64| x * x, 0, Some(&mut history));

        assert_eq!(result, 2.0);
        assert_eq!(history.estimates(), &[2.0]);
    }

    #[test]
    fn reuses_samples() {
        let samples = RefCell::new(vec![]);
        let f = |x: f64| {
            samples.borrow_mut().push(x);
            x
        };

        let _ = binary_integrate(0.0, 1.0, &f, 3, None);

        // level 0, then the new points of levels 1, 2 and 3
        assert_eq!(
            *samples.borrow(),
            vec![0.0, 0.5, 0.25, 0.75, 0.125, 0.375, 0.625, 0.875]
        );
    }

    #[test]
    fn estimates_per_level() {
        let mut history = EstimateHistory::<f64>::new();
        let result = binary_integrate(0.0, 1.0, &|x: f64| x, 2, Some(&mut history));

        // left sums of x on 1, 2 and 4 parts
        assert_eq!(history.estimates(), &[0.0, 0.25, 0.375]);
        assert_eq!(result, 0.375);
    }

    #[test]
    fn observer_is_optional() {
        let with = binary_integrate(0.0, 2.0, &f64::cos, 10, Some(&mut |_: f64| {}));
        let without = binary_integrate(0.0, 2.0, &f64::cos, 10, None);
        assert_eq!(with, without);
    }
}

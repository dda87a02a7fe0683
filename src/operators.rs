//! Operators turning a scalar field into another one: a numerical antiderivative and a numerical
//! derivative.
//!
//! Both operators take the field by value and return a value type that owns it together with the
//! step size. Neither caches anything, every call of the returned field does the full work again.
use crate::core::*;
use crate::integrators::definite::left_sum;

use num_traits::Float;
use std::ops::AddAssign;

/// The field $F(x) = \int_0^x \mathrm{d}y \, f(y)$, approximated by a left-endpoint Riemann sum
/// with step `d`. No integration constant is added, so $F(0) = 0$.
///
/// Evaluating $F(x)$ costs $|x| / d$ evaluations of $f$. For $x < 0$ the sum runs over $[x, 0)$ and
/// the result is negated.
#[derive(Clone, Copy, Debug)]
pub struct Antiderivative<F, T> {
    f: F,
    d: T,
}

impl<F, T> Antiderivative<F, T>
where
    F: ScalarField<T>,
    T: AddAssign + Float,
{
    /// Returns the step size.
    pub fn step(&self) -> T {
        self.d
    }

    /// Returns $F(b) - F(a)$, the definite integral of $f$ from `a` to `b`.
    pub fn between(&self, a: T, b: T) -> T {
        self.call(b) - self.call(a)
    }
}

impl<F, T> ScalarField<T> for Antiderivative<F, T>
where
    F: ScalarField<T>,
    T: AddAssign + Float,
{
    fn call(&self, x: T) -> T {
        let (lower, upper, orientation) = Interval::new(T::zero(), x).ordered();
        orientation * left_sum(lower, upper, &self.f, self.d) * self.d
    }
}

/// The field $g(x) = (f(x) - f(x + d)) / d$.
///
/// This is the *negative* of the usual forward difference quotient, i.e. it approximates
/// $-f'(x)$.
#[derive(Clone, Copy, Debug)]
pub struct Derivative<F, T> {
    f: F,
    d: T,
}

impl<F, T: Copy> Derivative<F, T> {
    /// Returns the step size.
    pub const fn step(&self) -> T {
        self.d
    }
}

impl<F, T> ScalarField<T> for Derivative<F, T>
where
    F: ScalarField<T>,
    T: Float,
{
    fn call(&self, x: T) -> T {
        (self.f.call(x) - self.f.call(x + self.d)) / self.d
    }
}

/// Returns the antiderivative of `f` computed with step `d`, see [`Antiderivative`].
///
/// # Errors
///
/// Returns [`CalculusError::InvalidStep`] if `d` is zero.
pub fn integrate<F, T>(f: F, d: T) -> Result<Antiderivative<F, T>>
where
    F: ScalarField<T>,
    T: AddAssign + Float,
{
    if d.is_zero() {
        return Err(CalculusError::InvalidStep { dimension: None });
    }

    Ok(Antiderivative { f, d })
}

/// Returns the difference quotient of `f` with step `d`, see [`Derivative`].
///
/// # Errors
///
/// Returns [`CalculusError::InvalidStep`] if `d` is zero.
pub fn derive<F, T>(f: F, d: T) -> Result<Derivative<F, T>>
where
    F: ScalarField<T>,
    T: Float,
{
    if d.is_zero() {
        return Err(CalculusError::InvalidStep { dimension: None });
    }

    Ok(Derivative { f, d })
}

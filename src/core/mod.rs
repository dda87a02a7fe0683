//! The core module: call capabilities for the functions being integrated or differentiated, the
//! integration domains and the error type.
pub mod domain;
pub mod error;

pub use domain::{Interval, Region};
pub use error::{CalculusError, Result};

/// A function $f: \mathbb{R} \to \mathbb{R}$.
///
/// Every `Fn(T) -> T` closure is a scalar field, and so are the functions generated by
/// [`integrate`](crate::operators::integrate) and [`derive`](crate::operators::derive). Fields are
/// assumed to be pure; they may be called any number of times with any argument.
pub trait ScalarField<T> {
    /// Evaluates the field at `x`.
    fn call(&self, x: T) -> T;
}

impl<T, F> ScalarField<T> for F
where
    F: Fn(T) -> T,
{
    fn call(&self, x: T) -> T {
        self(x)
    }
}

/// A function $f: \mathbb{R}^n \to \mathbb{R}^m$ with declared dimensions.
///
/// The dimensions are trusted metadata: the integrators validate their input against
/// `domain_dim()` and size their accumulators with `range_dim()`, they never inspect the values
/// returned by `call` to infer them.
pub trait VectorField<T> {
    /// Evaluates the field at the point `x`, which has `domain_dim()` components. The returned
    /// vector should have `range_dim()` components.
    fn call(&self, x: &[T]) -> Vec<T>;

    /// Number of input components, $n$.
    fn domain_dim(&self) -> usize;

    /// Number of output components, $m$.
    fn range_dim(&self) -> usize;
}

/// Pairs a closure over slices with its declared domain and range dimensions.
#[derive(Clone, Debug)]
pub struct FnField<F> {
    f: F,
    domain_dim: usize,
    range_dim: usize,
}

impl<F> FnField<F> {
    /// Wraps `f`, which maps `domain_dim` inputs to `range_dim` outputs.
    pub const fn new(f: F, domain_dim: usize, range_dim: usize) -> Self {
        Self {
            f,
            domain_dim,
            range_dim,
        }
    }
}

impl<T, F> VectorField<T> for FnField<F>
where
    F: Fn(&[T]) -> Vec<T>,
{
    fn call(&self, x: &[T]) -> Vec<T> {
        (self.f)(x)
    }

    fn domain_dim(&self) -> usize {
        self.domain_dim
    }

    fn range_dim(&self) -> usize {
        self.range_dim
    }
}

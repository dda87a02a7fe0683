#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `emath` provides small fixed-step routines for numerical calculus: definite
//! [integrals] of one variable, a progressive integrator that refines a binary partition, numerical
//! antiderivatives and derivatives, and iterated integrals of vector fields over
//! multi-dimensional boxes.
//!
//! # Features
//!
//! - **Generic numeric type**. The numeric type is a generic parameter, so that the routines can
//! be used with either `f32`, `f64`, or a custom numeric type that implements the `Float` trait
//! from the `num-traits` crate.
//! - **Any callable**. Functions are passed through the [`ScalarField`] and [`VectorField`]
//! traits. Every closure `Fn(T) -> T` is a scalar field, vector fields declare their dimensions,
//! for closures see [`FnField`].
//! - **Reproducibility**. All results are sums in a fixed order, they only depend on the input
//! and the floating-point type.
//! - **Observable refinement**. The binary integrator reports the estimate of every refinement
//! level to an optional [`Observer`](callbacks::Observer).
//!
//! # What is ...?
//!
//! Given a step size $d$, the definite integral is approximated by the left-endpoint
//! [Riemann sum]
//!
//! $$ \int_a^b \mathrm{d}x \, f(x) \approx d \sum_{j=0}^{N-1} f(a + j d) $$
//!
//! where $N$ is the number of samples strictly below $b$. We use the following terms:
//!
//! - the *step* or *infinitesimal* is $d$,
//! - the *orientation* is the sign of the result; it is $-1$ if the lower bound is larger than
//! the upper bound,
//! - the *level* of the binary integrator is the number $k$ of times the range was halved, the
//! estimate of level $k$ uses $2^k$ samples,
//! - the *jacobian* of an iterated integral is the product of all step sizes, the volume of one
//! grid cell.
//!
//! [integrals]: https://en.wikipedia.org/wiki/Integral
//! [Riemann sum]: https://en.wikipedia.org/wiki/Riemann_sum

pub mod callbacks;
pub mod core;
pub mod integrators;
pub mod operators;

pub use crate::core::*;

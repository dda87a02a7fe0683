//! The integrators. Each one is a free function over immutable input and a caller-supplied
//! field, none of them keeps state between calls.
pub mod binary;
pub mod definite;
pub mod iterated;

pub use binary::binary_integrate;
pub use definite::def_integrate;
pub use iterated::{iterated_integral, iterated_integral_over};

//! Observers for progressive integrators.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Trait for receiving the running estimate of a progressive integration. It is called once per
/// refinement level, coarsest level first.
pub trait Observer<T> {
    /// Receives the estimate of the integral at the next refinement level.
    fn observe(&mut self, estimate: T);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(T),
{
    fn observe(&mut self, estimate: T) {
        self(estimate);
    }
}

/// An observer that does nothing.
pub struct SinkCallback {}

impl<T> Observer<T> for SinkCallback {
    fn observe(&mut self, _: T) {}
}

/// An observer that prints the estimate of each refinement level.
#[derive(Default)]
pub struct SimpleCallback {
    level: usize,
}

impl SimpleCallback {
    /// Constructor.
    pub const fn new() -> Self {
        Self { level: 0 }
    }
}

impl<T: Display> Observer<T> for SimpleCallback {
    fn observe(&mut self, estimate: T) {
        // the number of parts only fits as long as the level does
        let parts = 1_u128.checked_shl(self.level as u32).unwrap_or(0);
        println!("level {}: parts={} I={}", self.level, parts, estimate);
        self.level += 1;
    }
}

/// Records the estimate of every refinement level, so that the convergence of an integration
/// can be inspected or saved after it finished.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EstimateHistory<T> {
    estimates: Vec<T>,
}

impl<T> EstimateHistory<T> {
    /// Constructor.
    pub const fn new() -> Self {
        Self { estimates: vec![] }
    }

    /// Returns the estimates, the one of level zero first.
    pub fn estimates(&self) -> &[T] {
        &self.estimates
    }

    /// Returns the estimate of the finest level, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.estimates.last()
    }

    /// Number of levels recorded.
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Whether no level was recorded.
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Destructure the history and return the estimates.
    pub fn into_estimates(self) -> Vec<T> {
        self.estimates
    }
}

impl<T> Observer<T> for EstimateHistory<T> {
    fn observe(&mut self, estimate: T) {
        self.estimates.push(estimate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(observer: &mut dyn Observer<f64>) {
        for &x in &[1.0, 0.75, 0.625] {
            observer.observe(x);
        }
    }

    #[test]
    fn history_keeps_order() {
        let mut history = EstimateHistory::<f64>::new();
        assert!(history.is_empty());
        feed(&mut history);
        assert_eq!(history.estimates(), &[1.0, 0.75, 0.625]);
        assert_eq!(history.last(), Some(&0.625));
    }

    #[test]
    fn closures_observe() {
        let mut sum = 0.0;
        feed(&mut |x: f64| sum += x);
        assert_eq!(sum, 2.375);
    }

    #[test]
    fn simple_callback_counts_levels() {
        let mut callback = SimpleCallback::new();
        feed(&mut callback);
        assert_eq!(callback.level, 3);
    }
}

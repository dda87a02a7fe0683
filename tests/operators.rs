use emath::core::*;
use emath::integrators::def_integrate;
use emath::operators::{derive, integrate};

use assert_approx_eq::assert_approx_eq;
use std::f64::consts::PI;

#[test]
fn integrate_line() {
    let big_f = integrate(|x: f64| x, 0.0001).unwrap();
    assert_approx_eq!(big_f.call(1.0), 0.5, 0.001);
}

#[test]
fn integrate_sin() {
    let big_f = integrate(f64::sin, 0.0001).unwrap();
    assert_approx_eq!(big_f.call(2.0 * PI), 0.0, 0.001);
}

#[test]
fn antiderivative_is_definite_integral_from_zero() {
    let f = |x: f64| x.cos() * x;
    let big_f = integrate(f, 0.001).unwrap();

    for &x in &[-2.0_f64, -0.5, 0.0, 0.3, 1.0, 4.0] {
        assert_eq!(big_f.call(x), def_integrate(0.0, x, &f, 0.001).unwrap());
    }
}

#[test]
fn between() {
    // int_1^2 dx 3x^2 = 7
    let big_f = integrate(|x: f64| 3.0 * x * x, 0.0001).unwrap();
    assert_approx_eq!(big_f.between(1.0, 2.0), 7.0, 0.01);
    assert_eq!(big_f.step(), 0.0001);
}

#[test]
fn derive_is_negated_forward_difference() {
    let g = derive(f64::exp, 1e-6).unwrap();

    for &x in &[-1.0_f64, 0.0, 2.0] {
        assert_approx_eq!(g.call(x), -x.exp(), 1e-4 * x.exp());
    }
}

#[test]
fn operators_compose() {
    // the derivative of an antiderivative gives back -f
    let big_f = integrate(f64::cos, 1e-4).unwrap();
    let g = derive(big_f, 0.1).unwrap();

    assert_approx_eq!(g.call(0.5), -(0.55_f64).cos(), 1e-2);
}

#[test]
fn zero_step() {
    assert!(integrate(f64::sin, 0.0).is_err());
    assert!(derive(f64::sin, 0.0).is_err());
}

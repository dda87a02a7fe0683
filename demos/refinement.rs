use emath::callbacks::{EstimateHistory, SimpleCallback};
use emath::integrators::{binary_integrate, def_integrate};
use emath::operators::{derive, integrate};
use emath::{Result, ScalarField};

fn main() -> Result<()> {
    // int_0^1 dx 4 / (1 + x^2) = pi
    let f = |x: f64| 4.0 / (1.0 + x * x);

    println!("binary refinement of pi:");
    let mut callback = SimpleCallback::new();
    let pi = binary_integrate(0.0, 1.0, &f, 12, Some(&mut callback));

    let mut history = EstimateHistory::<f64>::new();
    let _ = binary_integrate(0.0, 1.0, &f, 12, Some(&mut history));
    let errors: Vec<_> = history
        .estimates()
        .iter()
        .map(|e| (e - std::f64::consts::PI).abs())
        .collect();

    println!("errors per level: {:?}", errors);
    println!(
        "fixed step with the same partition: {}, binary: {}",
        def_integrate(0.0, 1.0, &f, 1.0 / 4096.0)?,
        pi
    );

    // the antiderivative is 4 atan(x), the derivative operator returns the negated slope
    let atan4 = integrate(f, 1e-4)?;
    println!("F(1) = {}", atan4.call(1.0));
    let slope = derive(atan4, 1e-3)?;
    println!("-F'(0) = {}", slope.call(0.0));

    Ok(())
}

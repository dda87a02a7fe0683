use emath::core::*;
use emath::integrators::iterated_integral_over;

use std::f64::consts::PI;

/// Volume and moments of inertia of the unit ball, in spherical coordinates $(\rho, \theta, \phi)$.
struct UnitBall;

impl VectorField<f64> for UnitBall {
    fn call(&self, x: &[f64]) -> Vec<f64> {
        let (rho, theta, phi) = (x[0], x[1], x[2]);
        let volume = rho * rho * phi.sin();
        let r_perp = rho * phi.sin();
        // moment about the z axis, and about the x axis
        let z_axis = volume * r_perp * r_perp;
        let y = rho * theta.sin() * phi.sin();
        let z = rho * phi.cos();
        let x_axis = volume * (y * y + z * z);

        vec![volume, z_axis, x_axis]
    }

    fn domain_dim(&self) -> usize {
        3
    }

    fn range_dim(&self) -> usize {
        3
    }
}

fn main() -> Result<()> {
    let region = Region::uniform(
        vec![
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 2.0 * PI),
            Interval::new(0.0, PI),
        ],
        0.01,
    );

    let result = iterated_integral_over(&region, &UnitBall)?;

    println!("volume   = {} (exact {})", result[0], 4.0 / 3.0 * PI);
    println!("I_z / ρ  = {} (exact {})", result[1], 8.0 / 15.0 * PI);
    println!("I_x / ρ  = {} (exact {})", result[2], 8.0 / 15.0 * PI);

    Ok(())
}

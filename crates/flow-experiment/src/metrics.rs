//! Built-in metrics.

use flow_env::Environment;

use crate::CustomCallables;

// Vehicle model for `energy_consumption`.
const MASS:          f64 = 1_200.0;
const GRAVITY:       f64 = 9.81;
const ROLLING_COEFF: f64 = 0.005;
const DRAG_COEFF:    f64 = 0.3;
const AIR_DENSITY:   f64 = 1.225;
const FRONTAL_AREA:  f64 = 2.6;

/// Mean speed over vehicles reporting a non-negative speed; `0` when the
/// network is empty.
pub fn avg_speed(env: &dyn Environment) -> f64 {
    let k = env.kernel();
    let (sum, n) = k
        .vehicle_ids()
        .iter()
        .filter_map(|id| k.speed(id))
        .filter(|s| *s >= 0.0)
        .fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

/// Outflow over the last 120 s in veh/h, with NaN read as `0`.
pub fn avg_outflow(env: &dyn Environment) -> f64 {
    let rate = env.kernel().outflow_rate(120.0);
    if rate.is_nan() { 0.0 } else { rate }
}

/// Negative instantaneous power draw of the whole fleet, scaled by `gain`.
///
/// ```text
/// P = Σ  M·v·|v − v_prev|/dt  +  M·g·Cr·v  +  ½·ρ·A·Ca·v³
/// ```
pub fn energy_consumption(env: &dyn Environment, gain: f64) -> f64 {
    let k = env.kernel();
    let dt = env.sim_step();
    let power: f64 = k
        .vehicle_ids()
        .iter()
        .map(|id| {
            let speed = k.speed(id).unwrap_or(0.0);
            let prev = k.previous_speed(id).unwrap_or(speed);
            let accel = (speed - prev).abs() / dt;
            MASS * speed * accel
                + MASS * GRAVITY * ROLLING_COEFF * speed
                + 0.5 * AIR_DENSITY * FRONTAL_AREA * DRAG_COEFF * speed.powi(3)
        })
        .sum();
    -gain * power
}

/// Metrics reported by the I-210 experiments.
pub fn i210_callables() -> CustomCallables {
    CustomCallables::new()
        .with("avg_speed", avg_speed)
        .with("avg_outflow", avg_outflow)
        .with("avg_energy", |env: &dyn Environment| -energy_consumption(env, 0.1))
        .with("avg_per_step_energy", |env: &dyn Environment| {
            let n = env.kernel().num_vehicles();
            if n == 0 { 0.0 } else { -energy_consumption(env, 0.1) / n as f64 }
        })
}

use std::f64::consts::TAU;

/// Fraction of the way through the current period, in `[0, 1)`.
///
/// Negative times wrap the same way positive ones do. A non-positive or
/// non-finite period yields 0.
pub fn period_fraction(t: f64, period: f64) -> f64 {
    if !(period > 0.0 && period.is_finite()) || !t.is_finite() {
        return 0.0;
    }
    let f = t.rem_euclid(period) / period;
    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if f >= 1.0 { 0.0 } else { f }
}

/// Phase angle in radians, `2π · period_fraction(t, period)`.
pub fn phase_angle(t: f64, period: f64) -> f64 {
    TAU * period_fraction(t, period)
}

/// Angular offset of slot `i` out of `n` evenly spaced slots around a circle.
pub fn evenly_spaced(i: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    TAU * i as f64 / n as f64
}

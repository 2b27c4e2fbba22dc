/// Clamp that maps NaN to `lo`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

/// Clamp into `[-1, 1]`; NaN becomes 0.
pub fn clamp_signed(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(-1.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Where `v` sits between `a` and `b`, clamped to `[0, 1]`.
///
/// A degenerate range (`a == b`) is a step: 0 before `a`, 1 at or after it.
pub fn inverse_lerp_clamped(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return if v >= a { 1.0 } else { 0.0 };
    }
    clamp((v - a) / span, 0.0, 1.0)
}

/// Maps a signed depth in `[-1, 1]` onto `[lo, hi]`.
pub fn remap_signed(depth: f64, lo: f64, hi: f64) -> f64 {
    lerp(lo, hi, clamp_signed(depth) * 0.5 + 0.5)
}

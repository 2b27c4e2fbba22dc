pub mod length;
pub mod style;
pub mod transform;
pub mod visibility;

pub use length::*;
pub use style::*;
pub use transform::*;
pub use visibility::*;

/// Formats a number for a style value: at most four decimals, no trailing
/// zeros, and never `-0`.
pub fn css_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

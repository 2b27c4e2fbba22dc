#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on an axis-aligned ellipse centred at the origin.
    pub fn on_ellipse(angle_rad: f64, radius_x: f64, radius_y: f64) -> Self {
        Self::new(angle_rad.cos() * radius_x, angle_rad.sin() * radius_y)
    }

    /// Rotates counter-clockwise (in screen space: clockwise, since y grows down).
    pub fn rotated(self, angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, s: f64) -> Self::Output {
        Self::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec2;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn vec2_add_sub_scale() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-0.5, 4.0);
        assert_eq!(a + b, Vec2::new(0.5, 6.0));
        assert_eq!(a - b, Vec2::new(1.5, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let r = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_close(r.x, 0.0, 1e-12);
        assert_close(r.y, 1.0, 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        assert_close(v.rotated(-0.3).length(), 5.0, 1e-12);
    }

    #[test]
    fn ellipse_extremes() {
        let p = Vec2::on_ellipse(0.0, 10.0, 2.0);
        assert_close(p.x, 10.0, 1e-12);
        assert_close(p.y, 0.0, 1e-12);
        let q = Vec2::on_ellipse(FRAC_PI_2, 10.0, 2.0);
        assert_close(q.x, 0.0, 1e-12);
        assert_close(q.y, 2.0, 1e-12);
    }
}

use std::cell::Cell;
use std::rc::Rc;

use foundation::math::{Vec2, clamp_signed};

/// Normalized pointer/tilt offset from center, each axis in `[-1, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ParallaxVector {
    pub x: f64,
    pub y: f64,
}

impl ParallaxVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Clamps both components.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_signed(x),
            y: clamp_signed(y),
        }
    }

    /// `(client - half) / half` per axis. Pointers outside the viewport
    /// saturate at ±1; a viewport with no size yields zero.
    pub fn from_pointer(client: Vec2, viewport_w: f64, viewport_h: f64) -> Self {
        let axis = |c: f64, extent: f64| {
            let half = extent / 2.0;
            if half > 0.0 { (c - half) / half } else { 0.0 }
        };
        Self::new(axis(client.x, viewport_w), axis(client.y, viewport_h))
    }

    /// Device orientation: left/right tilt (`gamma`) drives x, front/back
    /// tilt (`beta`) drives y. Missing readings count as level.
    pub fn from_orientation(
        beta_deg: Option<f64>,
        gamma_deg: Option<f64>,
        range_deg: f64,
    ) -> Self {
        let axis = |deg: Option<f64>| match deg {
            Some(d) if range_deg > 0.0 => d / range_deg,
            _ => 0.0,
        };
        Self::new(axis(gamma_deg), axis(beta_deg))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    None,
    Pointer,
    Orientation,
}

/// The scene's current parallax vector.
///
/// Input handlers write, the frame tick reads; both run on the page's one
/// thread, so a plain `Cell` is enough. Last write wins regardless of source.
#[derive(Debug, Clone, Default)]
pub struct ParallaxCell {
    inner: Rc<Cell<(ParallaxVector, InputSource)>>,
}

impl ParallaxCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, vector: ParallaxVector, source: InputSource) {
        self.inner.set((vector, source));
    }

    pub fn read(&self) -> ParallaxVector {
        self.inner.get().0
    }

    pub fn source(&self) -> InputSource {
        self.inner.get().1
    }

    pub fn reset(&self) {
        self.inner.set((ParallaxVector::ZERO, InputSource::None));
    }
}

#[cfg(test)]
mod tests {
    use super::{InputSource, ParallaxCell, ParallaxVector};
    use foundation::math::Vec2;

    fn in_range(v: ParallaxVector) -> bool {
        (-1.0..=1.0).contains(&v.x) && (-1.0..=1.0).contains(&v.y)
    }

    #[test]
    fn pointer_center_and_corners() {
        assert_eq!(
            ParallaxVector::from_pointer(Vec2::new(500.0, 400.0), 1000.0, 800.0),
            ParallaxVector::ZERO
        );
        assert_eq!(
            ParallaxVector::from_pointer(Vec2::new(0.0, 800.0), 1000.0, 800.0),
            ParallaxVector { x: -1.0, y: 1.0 }
        );
        assert_eq!(
            ParallaxVector::from_pointer(Vec2::new(750.0, 200.0), 1000.0, 800.0),
            ParallaxVector { x: 0.5, y: -0.5 }
        );
    }

    #[test]
    fn pointer_outside_viewport_is_clamped() {
        for (x, y) in [(-5000.0, 0.0), (1e9, -1e9), (f64::INFINITY, 3.0), (f64::NAN, 10.0)] {
            let v = ParallaxVector::from_pointer(Vec2::new(x, y), 1000.0, 800.0);
            assert!(in_range(v), "{v:?}");
        }
    }

    #[test]
    fn zero_size_viewport_is_neutral() {
        assert_eq!(
            ParallaxVector::from_pointer(Vec2::new(10.0, 10.0), 0.0, 0.0),
            ParallaxVector::ZERO
        );
    }

    #[test]
    fn orientation_swaps_axes() {
        let v = ParallaxVector::from_orientation(Some(22.5), Some(-45.0), 45.0);
        assert_eq!(v, ParallaxVector { x: -1.0, y: 0.5 });
    }

    #[test]
    fn orientation_extremes_are_clamped() {
        for beta in [-180.0, -90.0, 0.0, 90.0, 180.0] {
            for gamma in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let v = ParallaxVector::from_orientation(Some(beta), Some(gamma), 45.0);
                assert!(in_range(v), "{v:?}");
            }
        }
        assert_eq!(
            ParallaxVector::from_orientation(Some(180.0), Some(-180.0), 45.0),
            ParallaxVector { x: -1.0, y: 1.0 }
        );
    }

    #[test]
    fn missing_orientation_readings_are_level() {
        assert_eq!(
            ParallaxVector::from_orientation(None, None, 45.0),
            ParallaxVector::ZERO
        );
    }

    #[test]
    fn cell_is_last_write_wins() {
        let cell = ParallaxCell::new();
        let writer = cell.clone();
        assert_eq!(cell.source(), InputSource::None);
        writer.write(ParallaxVector::new(0.2, 0.3), InputSource::Pointer);
        writer.write(ParallaxVector::new(-0.4, 0.1), InputSource::Orientation);
        assert_eq!(cell.read(), ParallaxVector::new(-0.4, 0.1));
        assert_eq!(cell.source(), InputSource::Orientation);
        cell.reset();
        assert_eq!(writer.read(), ParallaxVector::ZERO);
    }
}

use foundation::math::{Vec2, evenly_spaced};
use scene::components::{CssLength, Layer, Position, Style, Transform, TransformOp};

/// Pixel-art icon drawn for a marker. Markers beyond the sixth reuse the
/// list from the start.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerIcon {
    Smartphone,
    Lightbulb,
    Laptop,
    Eyes,
    MindBlown,
    Rocket,
}

impl MarkerIcon {
    pub const ALL: [MarkerIcon; 6] = [
        MarkerIcon::Smartphone,
        MarkerIcon::Lightbulb,
        MarkerIcon::Laptop,
        MarkerIcon::Eyes,
        MarkerIcon::MindBlown,
        MarkerIcon::Rocket,
    ];

    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkerIcon::Smartphone => "smartphone",
            MarkerIcon::Lightbulb => "lightbulb",
            MarkerIcon::Laptop => "laptop",
            MarkerIcon::Eyes => "eyes",
            MarkerIcon::MindBlown => "mind-blown",
            MarkerIcon::Rocket => "rocket",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitMarker {
    pub index: usize,
    /// Angular offset on the orbit, `2π·index/count`.
    pub offset_rad: f64,
    pub icon: MarkerIcon,
}

impl OrbitMarker {
    pub fn ring(count: usize) -> Vec<OrbitMarker> {
        (0..count)
            .map(|index| OrbitMarker {
                index,
                offset_rad: evenly_spaced(index, count),
                icon: MarkerIcon::for_index(index),
            })
            .collect()
    }
}

/// Where one marker sits on a given tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerPose {
    pub index: usize,
    pub angle_rad: f64,
    /// Offset from the reference center after the plane tilt.
    pub offset: Vec2,
    /// Viewport position (reference center + offset).
    pub position: Vec2,
    /// `sin(angle)`: positive on the near side of the ellipse.
    pub depth: f64,
    pub scale: f64,
    pub opacity: f64,
    pub layer: Layer,
}

impl MarkerPose {
    /// Markers are placed in viewport coordinates, independent of whatever
    /// box they are mounted in.
    pub fn style(&self) -> Style {
        Style::new()
            .with_position(Position::Fixed)
            .at(CssLength::Px(self.position.x), CssLength::Px(self.position.y))
            .with_transform(
                Transform::identity()
                    .then(TransformOp::Translate(
                        CssLength::Percent(-50.0),
                        CssLength::Percent(-50.0),
                    ))
                    .then(TransformOp::Scale(self.scale)),
            )
            .with_opacity(self.opacity)
            .with_layer(self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerIcon, MarkerPose, OrbitMarker};
    use foundation::math::Vec2;
    use scene::components::{CssLength, Layer, Position};
    use std::f64::consts::PI;

    #[test]
    fn ring_spacing() {
        let ring = OrbitMarker::ring(6);
        assert_eq!(ring.len(), 6);
        for pair in ring.windows(2) {
            assert!((pair[1].offset_rad - pair[0].offset_rad - PI / 3.0).abs() < 1e-12);
        }
        assert_eq!(ring[5].icon, MarkerIcon::Rocket);
    }

    #[test]
    fn icons_wrap() {
        assert_eq!(MarkerIcon::for_index(6), MarkerIcon::Smartphone);
        assert_eq!(MarkerIcon::for_index(10).name(), "mind-blown");
    }

    #[test]
    fn empty_ring() {
        assert!(OrbitMarker::ring(0).is_empty());
    }

    #[test]
    fn pose_style_is_viewport_fixed() {
        let pose = MarkerPose {
            index: 0,
            angle_rad: 0.0,
            offset: Vec2::new(250.0, 0.0),
            position: Vec2::new(750.0, 400.0),
            depth: 0.0,
            scale: 0.9,
            opacity: 0.8,
            layer: Layer::Above,
        };
        let style = pose.style();
        assert_eq!(style.position, Some(Position::Fixed));
        assert_eq!(style.left, Some(CssLength::Px(750.0)));
        assert_eq!(style.top, Some(CssLength::Px(400.0)));
        assert!(
            style
                .declarations()
                .iter()
                .any(|(name, value)| *name == "position" && value == "fixed")
        );
    }
}

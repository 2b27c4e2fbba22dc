use foundation::bounds::Rect;
use foundation::math::{Vec2, phase_angle, remap_signed};
use scene::components::Layer;

use crate::config::OrbitConfig;
use crate::marker::{MarkerPose, OrbitMarker};

/// Ellipse the markers travel on, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipse {
    pub radius_x: f64,
    pub radius_y: f64,
    /// On-screen rotation of the orbit plane.
    pub tilt_rad: f64,
}

impl Ellipse {
    pub fn for_reference(config: &OrbitConfig, reference: &Rect) -> Self {
        let radius_x = reference.width * config.radius_ratio;
        Self {
            radius_x,
            radius_y: radius_x * config.eccentricity_deg.to_radians().cos(),
            tilt_rad: config.plane_tilt_deg.to_radians(),
        }
    }

    pub fn point(&self, angle_rad: f64) -> Vec2 {
        Vec2::on_ellipse(angle_rad, self.radius_x, self.radius_y).rotated(self.tilt_rad)
    }
}

/// Pure orbit math. Holds no clock: callers pass elapsed time in.
#[derive(Debug, Clone)]
pub struct OrbitEngine {
    config: OrbitConfig,
    markers: Vec<OrbitMarker>,
}

impl OrbitEngine {
    pub fn new(config: OrbitConfig) -> Self {
        let markers = OrbitMarker::ring(config.marker_count);
        Self { config, markers }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn markers(&self) -> &[OrbitMarker] {
        &self.markers
    }

    /// `θ(t) = 2π · ((t mod duration) / duration)`.
    pub fn phase(&self, elapsed_ms: f64) -> f64 {
        phase_angle(elapsed_ms, self.config.duration_ms)
    }

    pub fn pose(
        &self,
        marker: &OrbitMarker,
        theta: f64,
        ellipse: &Ellipse,
        center: Vec2,
    ) -> MarkerPose {
        let angle_rad = theta + marker.offset_rad;
        let offset = ellipse.point(angle_rad);
        let depth = angle_rad.sin();
        let [scale_lo, scale_hi] = self.config.scale_range;
        let [opacity_lo, opacity_hi] = self.config.opacity_range;
        MarkerPose {
            index: marker.index,
            angle_rad,
            offset,
            position: center + offset,
            depth,
            scale: remap_signed(depth, scale_lo, scale_hi),
            opacity: remap_signed(depth, opacity_lo, opacity_hi),
            layer: if depth > 0.0 { Layer::Above } else { Layer::Behind },
        }
    }

    /// Poses for every marker, or `None` while the reference element has no
    /// layout yet.
    pub fn solve(&self, elapsed_ms: f64, reference: &Rect) -> Option<Vec<MarkerPose>> {
        if reference.is_empty() {
            return None;
        }
        let theta = self.phase(elapsed_ms);
        let ellipse = Ellipse::for_reference(&self.config, reference);
        let center = reference.center();
        Some(
            self.markers
                .iter()
                .map(|m| self.pose(m, theta, &ellipse, center))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Ellipse, OrbitEngine};
    use crate::config::OrbitConfig;
    use foundation::bounds::Rect;
    use foundation::math::Vec2;
    use scene::components::Layer;
    use std::f64::consts::{PI, TAU};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn wrap(a: f64) -> f64 {
        a.rem_euclid(TAU)
    }

    fn reference() -> Rect {
        Rect::new(100.0, 200.0, 800.0, 300.0)
    }

    #[test]
    fn angles_are_evenly_spaced_for_any_phase() {
        for n in 1..=12 {
            let engine = OrbitEngine::new(OrbitConfig {
                marker_count: n,
                ..OrbitConfig::default()
            });
            for step in 0..24 {
                let t = step as f64 * 517.0;
                let poses = engine.solve(t, &reference()).unwrap();
                assert_eq!(poses.len(), n);
                for pair in poses.windows(2) {
                    let gap = wrap(pair[1].angle_rad - pair[0].angle_rad);
                    assert_close(gap, TAU / n as f64, 1e-9);
                }
            }
        }
    }

    #[test]
    fn depth_sums_to_zero() {
        for n in 2..=12 {
            let engine = OrbitEngine::new(OrbitConfig {
                marker_count: n,
                ..OrbitConfig::default()
            });
            for step in 0..10 {
                let poses = engine.solve(step as f64 * 1234.5, &reference()).unwrap();
                let sum: f64 = poses.iter().map(|p| p.depth).sum();
                assert_close(sum, 0.0, 1e-9);
            }
        }
    }

    #[test]
    fn single_marker_depth_integrates_to_zero_over_a_period() {
        let engine = OrbitEngine::new(OrbitConfig {
            marker_count: 1,
            ..OrbitConfig::default()
        });
        let samples = 1200;
        let total: f64 = (0..samples)
            .map(|i| {
                let t = i as f64 * engine.config().duration_ms / samples as f64;
                engine.solve(t, &reference()).unwrap()[0].depth
            })
            .sum();
        assert_close(total / samples as f64, 0.0, 1e-9);
    }

    #[test]
    fn six_markers_at_start_and_half_period() {
        let engine = OrbitEngine::new(OrbitConfig::default());
        let start = engine.solve(0.0, &reference()).unwrap();
        for (i, pose) in start.iter().enumerate() {
            let offset = TAU * i as f64 / 6.0;
            assert_close(pose.angle_rad, offset, 1e-12);
            assert_close(pose.depth, offset.sin(), 1e-12);
        }

        let half = engine.solve(6_000.0, &reference()).unwrap();
        for (i, pose) in half.iter().enumerate() {
            assert_close(pose.angle_rad, TAU * i as f64 / 6.0 + PI, 1e-12);
        }
    }

    #[test]
    fn depth_cue_ranges() {
        let engine = OrbitEngine::new(OrbitConfig::default());
        for step in 0..100 {
            for pose in engine.solve(step as f64 * 97.0, &reference()).unwrap() {
                assert!((0.6..=1.0).contains(&pose.scale));
                assert!((0.5..=1.0).contains(&pose.opacity));
                let expected = if pose.depth > 0.0 { Layer::Above } else { Layer::Behind };
                assert_eq!(pose.layer, expected);
            }
        }
    }

    #[test]
    fn near_side_marker_is_full_size() {
        let engine = OrbitEngine::new(OrbitConfig {
            marker_count: 4,
            ..OrbitConfig::default()
        });
        // Marker 1 sits at π/2 at t=0: depth 1.
        let poses = engine.solve(0.0, &reference()).unwrap();
        assert_close(poses[1].scale, 1.0, 1e-12);
        assert_close(poses[1].opacity, 1.0, 1e-12);
        assert_close(poses[3].scale, 0.6, 1e-12);
        assert_close(poses[3].opacity, 0.5, 1e-12);
    }

    #[test]
    fn positions_are_relative_to_reference_center() {
        let config = OrbitConfig {
            plane_tilt_deg: 0.0,
            ..OrbitConfig::default()
        };
        let engine = OrbitEngine::new(config);
        let r = reference();
        let poses = engine.solve(0.0, &r).unwrap();
        // Marker 0 at angle 0 sits at +radius_x on the x axis.
        assert_close(poses[0].position.x, r.center().x + 800.0 * 0.6, 1e-9);
        assert_close(poses[0].position.y, r.center().y, 1e-9);
    }

    #[test]
    fn eccentricity_and_tilt_are_independent() {
        let flat = OrbitConfig {
            eccentricity_deg: 60.0,
            plane_tilt_deg: 0.0,
            ..OrbitConfig::default()
        };
        let e = Ellipse::for_reference(&flat, &Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_close(e.radius_x, 60.0, 1e-12);
        assert_close(e.radius_y, 30.0, 1e-9);
        assert_eq!(e.tilt_rad, 0.0);

        let tilted = OrbitConfig {
            eccentricity_deg: 60.0,
            plane_tilt_deg: 90.0,
            ..OrbitConfig::default()
        };
        let e2 = Ellipse::for_reference(&tilted, &Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_close(e2.radius_y, e.radius_y, 1e-12);
        let p = e2.point(0.0);
        assert_close(p.x, 0.0, 1e-9);
        assert_close(p.y, 60.0, 1e-9);
    }

    #[test]
    fn zero_size_reference_skips() {
        let engine = OrbitEngine::new(OrbitConfig::default());
        assert!(engine.solve(100.0, &Rect::default()).is_none());
        assert!(engine.solve(100.0, &Rect::new(0.0, 0.0, 0.0, 50.0)).is_none());
    }

    #[test]
    fn rotated_point_matches_manual_rotation() {
        let e = Ellipse {
            radius_x: 10.0,
            radius_y: 5.0,
            tilt_rad: (-10f64).to_radians(),
        };
        let angle: f64 = 0.7;
        let x = angle.cos() * 10.0;
        let y = angle.sin() * 5.0;
        let (s, c) = e.tilt_rad.sin_cos();
        let expected = Vec2::new(x * c - y * s, x * s + y * c);
        let got = e.point(angle);
        assert_close(got.x, expected.x, 1e-12);
        assert_close(got.y, expected.y, 1e-12);
    }
}

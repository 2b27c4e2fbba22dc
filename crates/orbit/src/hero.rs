use foundation::bounds::Rect;
use foundation::math::Vec2;
use foundation::time::Time;
use runtime::{AliveToken, FrameClock, Lifecycle};
use scene::components::Style;
use scene::entity::ElementId;
use scene::{Stage, Surface};
use tracing::{debug, info};

use crate::config::OrbitConfig;
use crate::engine::OrbitEngine;
use crate::parallax::{InputSource, ParallaxCell, ParallaxVector};
use crate::phrase::PhraseCycler;
use crate::tilt::{HeaderTilt, hero_text_shadow};

/// Stage elements the hero scene drives.
#[derive(Debug, Clone)]
pub struct HeroElements {
    pub name_header: ElementId,
    pub header_content: ElementId,
    pub hero_texts: [ElementId; 2],
    pub markers: Vec<ElementId>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Updated,
    /// Reference element had no layout; markers keep their last pose.
    AwaitingLayout,
    Unmounted,
}

/// Mounted hero scene state.
///
/// Owns the frame clock, the parallax cell and the stage. Input handlers get
/// a [`ParallaxCell`] clone and an [`AliveToken`]; the frame driver calls
/// [`HeroScene::tick`] then [`HeroScene::flush`]. After [`HeroScene::unmount`]
/// both become no-ops.
#[derive(Debug)]
pub struct HeroScene {
    engine: OrbitEngine,
    tilt: HeaderTilt,
    phrases: PhraseCycler,
    orientation_range_deg: f64,
    parallax: ParallaxCell,
    clock: FrameClock,
    stage: Stage,
    elements: HeroElements,
    lifecycle: Lifecycle,
    awaiting_layout: bool,
    phrase_index: Option<usize>,
    phrase_changed: bool,
}

impl HeroScene {
    pub fn new(config: OrbitConfig) -> Self {
        let mut stage = Stage::new();
        let elements = HeroElements {
            name_header: stage.spawn("name-header"),
            header_content: stage.spawn("header-content"),
            hero_texts: [stage.spawn("hero-text-top"), stage.spawn("hero-text-bottom")],
            markers: (0..config.marker_count)
                .map(|i| stage.spawn(format!("orbiter-{i}")))
                .collect(),
        };
        let tilt = HeaderTilt {
            max_deg: config.header_tilt_deg,
            transition_ms: config.tilt_transition_ms,
        };
        let phrases = PhraseCycler::new(config.phrases.clone(), config.phrase_interval_ms);
        let orientation_range_deg = config.orientation_range_deg;
        info!(markers = config.marker_count, "hero scene mounted");
        Self {
            engine: OrbitEngine::new(config),
            tilt,
            phrases,
            orientation_range_deg,
            parallax: ParallaxCell::new(),
            clock: FrameClock::new(),
            stage,
            elements,
            lifecycle: Lifecycle::new(),
            awaiting_layout: false,
            phrase_index: None,
            phrase_changed: false,
        }
    }

    pub fn elements(&self) -> &HeroElements {
        &self.elements
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn engine(&self) -> &OrbitEngine {
        &self.engine
    }

    pub fn parallax(&self) -> ParallaxCell {
        self.parallax.clone()
    }

    pub fn alive(&self) -> AliveToken {
        self.lifecycle.token()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_alive()
    }

    /// Pointer moved to `client` (viewport coordinates).
    pub fn pointer_moved(&self, client: Vec2, viewport_w: f64, viewport_h: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.parallax.write(
            ParallaxVector::from_pointer(client, viewport_w, viewport_h),
            InputSource::Pointer,
        );
        true
    }

    pub fn orientation_changed(&self, beta_deg: Option<f64>, gamma_deg: Option<f64>) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.parallax.write(
            ParallaxVector::from_orientation(beta_deg, gamma_deg, self.orientation_range_deg),
            InputSource::Orientation,
        );
        true
    }

    /// Advances the scene to `timestamp` against the reference element's
    /// current bounding box.
    pub fn tick(&mut self, timestamp: Time, reference: Rect) -> TickOutcome {
        if !self.is_mounted() {
            return TickOutcome::Unmounted;
        }
        let frame = self.clock.tick(timestamp);

        let v = self.parallax.read();
        let tilt = self.tilt.style(v);
        self.stage.set_style(self.elements.name_header, tilt.clone());
        self.stage.set_style(self.elements.header_content, tilt);
        let shadow = Style::new().with_text_shadow(hero_text_shadow(v));
        for el in self.elements.hero_texts {
            self.stage.set_style(el, shadow.clone());
        }

        let index = self.phrases.index_at(frame.elapsed_ms);
        if index != self.phrase_index {
            self.phrase_index = index;
            self.phrase_changed = true;
        }

        let Some(poses) = self.engine.solve(frame.elapsed_ms, &reference) else {
            if !self.awaiting_layout {
                debug!(frame = frame.index, "reference element has no layout; skipping orbit");
                self.awaiting_layout = true;
            }
            return TickOutcome::AwaitingLayout;
        };
        if self.awaiting_layout {
            debug!(frame = frame.index, "reference element laid out; orbit resumed");
            self.awaiting_layout = false;
        }
        for (pose, el) in poses.iter().zip(&self.elements.markers) {
            self.stage.set_style(*el, pose.style());
        }
        TickOutcome::Updated
    }

    /// Phrase to show, if it changed since the last call.
    pub fn take_phrase_change(&mut self) -> Option<&str> {
        if !self.phrase_changed || !self.is_mounted() {
            return None;
        }
        self.phrase_changed = false;
        self.phrase_index.and_then(|i| self.phrases.phrase(i))
    }

    pub fn flush(&mut self, surface: &mut dyn Surface) -> usize {
        if !self.is_mounted() {
            return 0;
        }
        self.stage.flush(surface)
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.lifecycle.end();
        self.stage.discard_pending();
        self.parallax.reset();
        info!("hero scene unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::{HeroScene, TickOutcome};
    use crate::config::OrbitConfig;
    use crate::parallax::{InputSource, ParallaxVector};
    use foundation::bounds::Rect;
    use foundation::math::Vec2;
    use foundation::time::Time;
    use scene::RecordingSurface;
    use scene::components::{Layer, TransformOp};

    fn reference() -> Rect {
        Rect::new(0.0, 100.0, 600.0, 200.0)
    }

    #[test]
    fn spawns_one_element_per_marker() {
        let scene = HeroScene::new(OrbitConfig::default());
        assert_eq!(scene.elements().markers.len(), 6);
        assert_eq!(scene.stage().label(scene.elements().markers[5]), Some("orbiter-5"));
    }

    #[test]
    fn tick_positions_markers_and_tilts_header() {
        let mut scene = HeroScene::new(OrbitConfig::default());
        scene.pointer_moved(Vec2::new(1000.0, 0.0), 1000.0, 800.0);
        assert_eq!(scene.tick(Time(16.0), reference()), TickOutcome::Updated);

        let mut surface = RecordingSurface::new();
        let writes = scene.flush(&mut surface);
        assert_eq!(writes, 2 + 2 + 6);

        let header = surface.last_style(scene.elements().header_content).unwrap();
        let ops = &header.transform.as_ref().unwrap().ops;
        assert_eq!(ops, &vec![TransformOp::RotateX(-10.0), TransformOp::RotateY(10.0)]);

        // First tick is phase zero: marker 0 on the right of the center.
        let m0 = surface.last_style(scene.elements().markers[0]).unwrap();
        assert_eq!(m0.layer, Some(Layer::Behind));
        assert!(m0.left.is_some() && m0.top.is_some());
    }

    #[test]
    fn zero_size_reference_waits_then_resumes() {
        let mut scene = HeroScene::new(OrbitConfig::default());
        assert_eq!(scene.tick(Time(0.0), Rect::default()), TickOutcome::AwaitingLayout);
        let mut surface = RecordingSurface::new();
        scene.flush(&mut surface);
        for el in &scene.elements().markers {
            assert!(surface.last_style(*el).is_none());
        }
        // Header tilt still updates while waiting.
        assert!(surface.last_style(scene.elements().name_header).is_some());

        assert_eq!(scene.tick(Time(16.0), reference()), TickOutcome::Updated);
        surface.clear();
        scene.flush(&mut surface);
        assert!(surface.last_style(scene.elements().markers[0]).is_some());
    }

    #[test]
    fn orientation_overrides_pointer() {
        let scene = HeroScene::new(OrbitConfig::default());
        let cell = scene.parallax();
        scene.pointer_moved(Vec2::new(0.0, 0.0), 100.0, 100.0);
        scene.orientation_changed(Some(45.0), Some(0.0));
        assert_eq!(cell.read(), ParallaxVector::new(0.0, 1.0));
        assert_eq!(cell.source(), InputSource::Orientation);
    }

    #[test]
    fn phrase_changes_are_reported_once() {
        let mut scene = HeroScene::new(OrbitConfig::default());
        scene.tick(Time(1_000.0), reference());
        assert_eq!(
            scene.take_phrase_change(),
            Some("I USED TO BE A LAWYER, BUT I GOT BETTER")
        );
        assert_eq!(scene.take_phrase_change(), None);
        scene.tick(Time(3_000.0), reference());
        assert_eq!(scene.take_phrase_change(), None);
        scene.tick(Time(6_000.0), reference());
        assert_eq!(scene.take_phrase_change(), Some("STRUCTURING CHAOS FOR GROWTH"));
    }

    #[test]
    fn nothing_reaches_the_surface_after_unmount() {
        let mut scene = HeroScene::new(OrbitConfig::default());
        let alive = scene.alive();
        scene.tick(Time(0.0), reference());
        // Pending writes from the last tick are dropped, not applied.
        scene.unmount();
        assert!(!alive.is_alive());

        assert!(!scene.pointer_moved(Vec2::new(1.0, 1.0), 10.0, 10.0));
        assert!(!scene.orientation_changed(Some(10.0), None));
        assert_eq!(scene.tick(Time(16.0), reference()), TickOutcome::Unmounted);
        assert_eq!(scene.take_phrase_change(), None);

        let mut surface = RecordingSurface::new();
        assert_eq!(scene.flush(&mut surface), 0);
        assert!(surface.is_empty());
        assert_eq!(scene.parallax().read(), ParallaxVector::ZERO);
    }
}

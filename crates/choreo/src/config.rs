use serde::{Deserialize, Serialize};

use crate::motion::{Edge, MotionPose, RangedMotion, TriggerBand, TriggerPoint, fan_side};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("choreography config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("choreography config field `{field}` is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

/// End state of the fly-away exit, reached at progress 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExitCurve {
    /// Resting translation (centers the card on its anchor), percent of size.
    pub rest_translate_pct: f64,
    pub exit_translate_pct: f64,
    /// Added to the card's authored rotation.
    pub exit_rotate_deg: f64,
    pub exit_opacity: f64,
}

impl Default for ExitCurve {
    fn default() -> Self {
        Self {
            rest_translate_pct: -50.0,
            exit_translate_pct: -150.0,
            exit_rotate_deg: -25.0,
            exit_opacity: 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoverConfig {
    pub max_tilt_deg: f64,
    pub scale: f64,
    pub perspective_px: f64,
    pub transition_ms: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: 10.0,
            scale: 1.02,
            perspective_px: 1000.0,
            transition_ms: 100.0,
        }
    }
}

/// Card stack layout and motion.
///
/// Segment height and gap are in viewport-height units and are fixed: they
/// do not depend on card content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackConfig {
    /// Scroll distance before the first segment starts. The deck occupies
    /// this first viewport.
    pub lead_in_vh: f64,
    pub segment_vh: f64,
    pub gap_vh: f64,
    pub timeline_prefix: String,
    pub exit: ExitCurve,
    pub hover: HoverConfig,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            lead_in_vh: 100.0,
            segment_vh: 150.0,
            gap_vh: 20.0,
            timeline_prefix: "--card-".to_string(),
            exit: ExitCurve::default(),
            hover: HoverConfig::default(),
        }
    }
}

impl StackConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StackConfig = if json.trim().is_empty() {
            StackConfig::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.segment_vh > 0.0 && self.segment_vh.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "segmentVh",
                reason: "must be a positive number",
            });
        }
        if !(self.lead_in_vh >= 0.0 && self.lead_in_vh.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "leadInVh",
                reason: "must be a non-negative number",
            });
        }
        if !(self.gap_vh >= 0.0 && self.gap_vh.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "gapVh",
                reason: "must be a non-negative number",
            });
        }
        if self.timeline_prefix.is_empty() {
            return Err(ConfigError::OutOfRange {
                field: "timelinePrefix",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

/// Outer items of a row swing apart as the row scrolls through.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FanConfig {
    pub rotate_deg: f64,
    pub offset_px: f64,
    pub band: TriggerBand,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            rotate_deg: 8.0,
            offset_px: 100.0,
            band: TriggerBand::new(
                TriggerPoint::new(Edge::Top, 0.6),
                TriggerPoint::new(Edge::Bottom, 0.4),
            ),
        }
    }
}

/// 3D turn applied while an element crosses the whole viewport.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltConfig {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub band: TriggerBand,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            rotate_x_deg: -5.0,
            rotate_y_deg: 15.0,
            band: TriggerBand::new(
                TriggerPoint::new(Edge::Top, 1.0),
                TriggerPoint::new(Edge::Bottom, 0.0),
            ),
        }
    }
}

/// Reveal and pin tunables for content pages.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub from_opacity: f64,
    pub to_opacity: f64,
    /// Viewport fractions (from the top) the section's top edge travels
    /// between while fading in.
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub header_from_vw: f64,
    pub header_to_rem: f64,
    pub header_from_opacity: f64,
    pub header_to_opacity: f64,
    pub fan: FanConfig,
    pub tilt: TiltConfig,
    /// A tracked section is active while the scroll position is inside
    /// this band.
    pub spy_band: TriggerBand,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            from_opacity: 0.3,
            to_opacity: 1.0,
            start_fraction: 0.8,
            end_fraction: 0.3,
            header_from_vw: 8.0,
            header_to_rem: 1.5,
            header_from_opacity: 1.0,
            header_to_opacity: 0.9,
            fan: FanConfig::default(),
            tilt: TiltConfig::default(),
            spy_band: TriggerBand::new(
                TriggerPoint::new(Edge::Top, 0.5),
                TriggerPoint::new(Edge::Bottom, 0.5),
            ),
        }
    }
}

impl RevealConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RevealConfig = if json.trim().is_empty() {
            RevealConfig::default()
        } else {
            serde_json::from_str(json)?
        };
        if !(config.start_fraction > config.end_fraction) {
            return Err(ConfigError::OutOfRange {
                field: "startFraction",
                reason: "must be below (greater than) endFraction",
            });
        }
        Ok(config)
    }

    /// Band the fade runs over: the top edge rising from `start_fraction`
    /// to `end_fraction`.
    pub fn fade_band(&self) -> TriggerBand {
        TriggerBand::new(
            TriggerPoint::new(Edge::Top, self.start_fraction),
            TriggerPoint::new(Edge::Top, self.end_fraction),
        )
    }

    /// Fan-out for item `index` of a row of `count`.
    pub fn fan_motion(&self, index: usize, count: usize) -> RangedMotion {
        let side = fan_side(index, count);
        RangedMotion {
            band: self.fan.band,
            from: MotionPose::default(),
            to: MotionPose {
                translate_x_px: side * self.fan.offset_px,
                rotate_deg: side * self.fan.rotate_deg,
                ..MotionPose::default()
            },
        }
    }

    pub fn tilt_motion(&self) -> RangedMotion {
        RangedMotion {
            band: self.tilt.band,
            from: MotionPose::default(),
            to: MotionPose {
                rotate_x_deg: self.tilt.rotate_x_deg,
                rotate_y_deg: self.tilt.rotate_y_deg,
                ..MotionPose::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_authored_layout() {
        let c = StackConfig::from_json("{}").unwrap();
        assert_eq!(c.lead_in_vh, 100.0);
        assert_eq!(c.segment_vh, 150.0);
        assert_eq!(c.gap_vh, 20.0);
        assert_eq!(c.exit.exit_rotate_deg, -25.0);
        assert_eq!(c.hover.scale, 1.02);
    }

    #[test]
    fn nested_partial_override() {
        let c = StackConfig::from_json(r#"{"gapVh": 0, "exit": {"exitRotateDeg": -40}}"#).unwrap();
        assert_eq!(c.gap_vh, 0.0);
        assert_eq!(c.exit.exit_rotate_deg, -40.0);
        assert_eq!(c.exit.exit_translate_pct, -150.0);
    }

    #[test]
    fn rejects_bad_stack_values() {
        assert!(StackConfig::from_json(r#"{"segmentVh": 0}"#).is_err());
        assert!(StackConfig::from_json(r#"{"gapVh": -1}"#).is_err());
        assert!(StackConfig::from_json(r#"{"leadInVh": -5}"#).is_err());
        assert!(StackConfig::from_json(r#"{"timelinePrefix": ""}"#).is_err());
        assert!(matches!(
            StackConfig::from_json("nope"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reveal_band_must_be_ordered() {
        assert!(RevealConfig::from_json("").is_ok());
        assert!(RevealConfig::from_json(r#"{"startFraction": 0.2}"#).is_err());
    }

    #[test]
    fn fan_presets_swing_outer_items() {
        let c = RevealConfig::default();
        let left = c.fan_motion(0, 3).to;
        assert_eq!((left.translate_x_px, left.rotate_deg), (-100.0, -8.0));
        let middle = c.fan_motion(1, 3).to;
        assert_eq!(middle, MotionPose::default());
        let right = c.fan_motion(2, 3).to;
        assert_eq!((right.translate_x_px, right.rotate_deg), (100.0, 8.0));
        assert_eq!(c.fan_motion(2, 3).band.start, TriggerPoint::new(Edge::Top, 0.6));
    }

    #[test]
    fn tilt_and_spy_overrides_parse() {
        let c = RevealConfig::from_json(
            r#"{"tilt": {"rotateYDeg": 30},
                "spyBand": {"start": {"edge": "top", "viewportFraction": 0.25},
                            "end": {"edge": "bottom", "viewportFraction": 0.25}}}"#,
        )
        .unwrap();
        assert_eq!(c.tilt.rotate_y_deg, 30.0);
        assert_eq!(c.tilt.rotate_x_deg, -5.0);
        assert_eq!(c.spy_band.start, TriggerPoint::new(Edge::Top, 0.25));
        let tilt = c.tilt_motion().to;
        assert_eq!((tilt.rotate_x_deg, tilt.rotate_y_deg), (-5.0, 30.0));
    }
}

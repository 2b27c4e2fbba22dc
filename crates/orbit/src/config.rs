use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("orbit config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("orbit config field `{field}` is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

pub const DEFAULT_PHRASES: &[&str] = &[
    "I USED TO BE A LAWYER, BUT I GOT BETTER",
    "STRUCTURING CHAOS FOR GROWTH",
    "CODING WITH LEGAL PRECISION",
    "TURNING RISK INTO OPPORTUNITY",
    "BRIDGING VISION AND EXECUTION",
    "TRANSFORMING DATA INTO NARRATIVE",
    "I'M A STRATEGIC GROWTH ARCHITECT",
    "ENGINEERING DIGITAL TRUST",
    "SOLVING THE IMPLEMENTATION GAP",
    "NAVIGATING HIGH-STAKES COMPLEXITY",
];

/// Tunables for the hero scene. Every field has a default, so `{}` is a
/// valid config.
///
/// The ellipse's flattening (`eccentricity_deg`) and the rotation of the
/// orbit plane on screen (`plane_tilt_deg`) are independent knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitConfig {
    /// One full revolution, milliseconds.
    pub duration_ms: f64,
    pub marker_count: usize,
    /// Horizontal radius as a fraction of the reference element's width.
    pub radius_ratio: f64,
    /// `radius_y = radius_x · cos(eccentricity_deg)`.
    pub eccentricity_deg: f64,
    pub plane_tilt_deg: f64,
    pub scale_range: [f64; 2],
    pub opacity_range: [f64; 2],
    /// Maximum header rotation per axis at full parallax deflection.
    pub header_tilt_deg: f64,
    pub tilt_transition_ms: f64,
    /// Device tilt (degrees) that maps to full deflection.
    pub orientation_range_deg: f64,
    pub phrase_interval_ms: f64,
    pub phrases: Vec<String>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            duration_ms: 12_000.0,
            marker_count: 6,
            radius_ratio: 0.6,
            eccentricity_deg: 70.0,
            plane_tilt_deg: -10.0,
            scale_range: [0.6, 1.0],
            opacity_range: [0.5, 1.0],
            header_tilt_deg: 10.0,
            tilt_transition_ms: 100.0,
            orientation_range_deg: 45.0,
            phrase_interval_ms: 5_000.0,
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl OrbitConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: OrbitConfig = if json.trim().is_empty() {
            OrbitConfig::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, v: f64) -> Result<(), ConfigError> {
            if v > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        positive("durationMs", self.duration_ms)?;
        positive("orientationRangeDeg", self.orientation_range_deg)?;
        positive("phraseIntervalMs", self.phrase_interval_ms)?;
        if !(self.tilt_transition_ms >= 0.0 && self.tilt_transition_ms <= 150.0) {
            return Err(ConfigError::OutOfRange {
                field: "tiltTransitionMs",
                reason: "must be between 0 and 150",
            });
        }
        if !(self.radius_ratio >= 0.0 && self.radius_ratio.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "radiusRatio",
                reason: "must be a non-negative number",
            });
        }
        for (field, [lo, hi]) in [
            ("scaleRange", self.scale_range),
            ("opacityRange", self.opacity_range),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(ConfigError::OutOfRange {
                    field,
                    reason: "expected [low, high] with low <= high",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, OrbitConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(OrbitConfig::from_json("{}").unwrap(), OrbitConfig::default());
        assert_eq!(OrbitConfig::from_json("  ").unwrap(), OrbitConfig::default());
    }

    #[test]
    fn partial_override() {
        let c = OrbitConfig::from_json(r#"{"durationMs": 8000, "markerCount": 4}"#).unwrap();
        assert_eq!(c.duration_ms, 8000.0);
        assert_eq!(c.marker_count, 4);
        assert_eq!(c.radius_ratio, 0.6);
    }

    #[test]
    fn rejects_bad_ranges() {
        let err = OrbitConfig::from_json(r#"{"durationMs": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "durationMs",
                ..
            }
        ));
        assert!(OrbitConfig::from_json(r#"{"scaleRange": [1.0, 0.5]}"#).is_err());
        assert!(OrbitConfig::from_json(r#"{"tiltTransitionMs": 400}"#).is_err());
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            OrbitConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}

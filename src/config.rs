use crate::{
    core::{Bounds, Rgba8},
    error::{SpinError, SpinResult},
};

pub const DEFAULT_SIZE: f32 = 56.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 2.5;
pub const DEFAULT_CENTER_RADIUS: f32 = 12.5;
pub const LEVEL_DURATION_MS: u64 = 1333;

pub const SWING_STROKE_WIDTH: f32 = 6.0;
pub const SWING_DURATION_MS: u64 = 1800;
/// Alpha of the swing variant's static background ring.
pub const BACKGROUND_ALPHA: u8 = 40;

/// Resolved, immutable per-instance styling. Not part of the animated
/// state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpinnerConfig {
    pub width: f32,
    pub height: f32,
    pub stroke_width: f32,
    pub center_radius: f32,
    pub duration_ms: u64,
    pub colors: [Rgba8; 3],
}

impl SpinnerConfig {
    pub fn level_defaults() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            center_radius: DEFAULT_CENTER_RADIUS,
            duration_ms: LEVEL_DURATION_MS,
            colors: [Rgba8::BLACK; 3],
        }
    }

    pub fn swing_defaults() -> Self {
        Self {
            stroke_width: SWING_STROKE_WIDTH,
            duration_ms: SWING_DURATION_MS,
            ..Self::level_defaults()
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    pub fn stroke_inset(&self) -> f32 {
        self.bounds()
            .stroke_inset(self.center_radius, self.stroke_width)
    }

    /// Merges overrides onto defaults. An override is applied only when
    /// present and positive; non-finite values are rejected.
    pub fn resolve(defaults: Self, overrides: &SpinnerOverrides) -> SpinResult<Self> {
        fn merge(name: &str, default: f32, over: Option<f32>) -> SpinResult<f32> {
            match over {
                Some(v) if !v.is_finite() => {
                    Err(SpinError::config(format!("{name} must be finite, got {v}")))
                }
                Some(v) if v > 0.0 => Ok(v),
                _ => Ok(default),
            }
        }

        let mut colors = overrides.colors.unwrap_or(defaults.colors);
        if let Some(accent) = overrides.color {
            colors = accent.level_palette();
        }

        Ok(Self {
            width: merge("width", defaults.width, overrides.width)?,
            height: merge("height", defaults.height, overrides.height)?,
            stroke_width: merge("strokeWidth", defaults.stroke_width, overrides.stroke_width)?,
            center_radius: merge(
                "centerRadius",
                defaults.center_radius,
                overrides.center_radius,
            )?,
            duration_ms: match overrides.duration {
                Some(v) if v > 0 => v,
                _ => defaults.duration_ms,
            },
            colors,
        })
    }
}

/// Partial configuration as supplied by a host, e.g. from a styling map.
/// Every field is optional; unset or non-positive entries fall back to the
/// variant defaults.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinnerOverrides {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub stroke_width: Option<f32>,
    pub center_radius: Option<f32>,
    /// Cycle duration in milliseconds.
    pub duration: Option<u64>,
    pub colors: Option<[Rgba8; 3]>,
    /// Single accent color; expands to the three-slot palette at one-third,
    /// two-thirds, and full alpha. Takes precedence over `colors`.
    pub color: Option<Rgba8>,
}

impl SpinnerOverrides {
    pub fn from_json(s: &str) -> SpinResult<Self> {
        serde_json::from_str(s).map_err(|e| SpinError::config(format!("invalid overrides: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_keep_defaults() {
        let cfg =
            SpinnerConfig::resolve(SpinnerConfig::level_defaults(), &SpinnerOverrides::default())
                .unwrap();
        assert_eq!(cfg, SpinnerConfig::level_defaults());
    }

    #[test]
    fn non_positive_overrides_are_ignored() {
        let overrides = SpinnerOverrides {
            width: Some(-1.0),
            stroke_width: Some(0.0),
            duration: Some(0),
            ..Default::default()
        };
        let cfg = SpinnerConfig::resolve(SpinnerConfig::level_defaults(), &overrides).unwrap();
        assert_eq!(cfg.width, DEFAULT_SIZE);
        assert_eq!(cfg.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(cfg.duration_ms, LEVEL_DURATION_MS);
    }

    #[test]
    fn non_finite_override_is_rejected() {
        let overrides = SpinnerOverrides {
            width: Some(f32::NAN),
            ..Default::default()
        };
        let err = SpinnerConfig::resolve(SpinnerConfig::level_defaults(), &overrides).unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn accent_color_expands_to_palette() {
        let accent = Rgba8::opaque(200, 40, 40);
        let overrides = SpinnerOverrides {
            color: Some(accent),
            colors: Some([Rgba8::opaque(1, 2, 3); 3]),
            ..Default::default()
        };
        let cfg = SpinnerConfig::resolve(SpinnerConfig::level_defaults(), &overrides).unwrap();
        assert_eq!(cfg.colors, accent.level_palette());
    }

    #[test]
    fn overrides_parse_from_styling_map() {
        let overrides = SpinnerOverrides::from_json(
            r#"{ "strokeWidth": 4.0, "centerRadius": 10, "duration": 900 }"#,
        )
        .unwrap();
        let cfg = SpinnerConfig::resolve(SpinnerConfig::swing_defaults(), &overrides).unwrap();
        assert_eq!(cfg.stroke_width, 4.0);
        assert_eq!(cfg.center_radius, 10.0);
        assert_eq!(cfg.duration_ms, 900);
        assert_eq!(cfg.width, DEFAULT_SIZE);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SpinnerOverrides::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("config error"));
    }

    #[test]
    fn swing_defaults_differ_where_the_widgets_did() {
        let swing = SpinnerConfig::swing_defaults();
        assert_eq!(swing.stroke_width, SWING_STROKE_WIDTH);
        assert_eq!(swing.duration_ms, SWING_DURATION_MS);
        assert_eq!(swing.width, DEFAULT_SIZE);
    }
}

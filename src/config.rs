//! Playfield configuration
//!
//! Dimensions vary per device and are supplied by the host at startup.
//! Everything else is a fixed constant in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield dimensions in game units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 800.0,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Parse from JSON, e.g. `{"width": 400, "height": 800}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let playfield: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        playfield.validate()?;
        Ok(playfield)
    }

    /// Smallest height that still yields a non-empty gap range
    pub fn min_height() -> f32 {
        2.0 * GAP_MIN_CLEARANCE + PIPE_GAP
    }

    /// Reject playfields the spawn and collision math cannot handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        let required = Self::min_height();
        if self.height < required {
            return Err(ConfigError::TooShort {
                height: self.height,
                required,
            });
        }

        let required = AVATAR_X + AVATAR_RADIUS;
        if self.width <= required {
            return Err(ConfigError::TooNarrow {
                width: self.width,
                required,
            });
        }

        Ok(())
    }

    /// Inclusive range for a freshly spawned obstacle's top barrier height
    pub fn gap_top_range(&self) -> (f32, f32) {
        (
            GAP_MIN_CLEARANCE,
            self.height - PIPE_GAP - GAP_MIN_CLEARANCE,
        )
    }

    /// Avatar positions beyond this are on the ground
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_CLEARANCE
    }

    /// Avatar starting height
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Playfield::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_short_playfield() {
        let err = Playfield::new(400.0, 399.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::TooShort { required, .. } if required == 400.0));
    }

    #[test]
    fn test_minimum_height_has_single_gap_position() {
        let playfield = Playfield::new(400.0, 400.0);
        assert!(playfield.validate().is_ok());
        assert_eq!(playfield.gap_top_range(), (100.0, 100.0));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Playfield::new(f32::NAN, 800.0).validate(),
            Err(ConfigError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            Playfield::new(400.0, -1.0).validate(),
            Err(ConfigError::InvalidDimension { name: "height", .. })
        ));
        assert!(matches!(
            Playfield::new(120.0, 800.0).validate(),
            Err(ConfigError::TooNarrow { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let playfield = Playfield::from_json(r#"{"width": 390, "height": 844}"#).unwrap();
        assert_eq!(playfield, Playfield::new(390.0, 844.0));

        assert!(matches!(
            Playfield::from_json("{\"width\": 390}"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Playfield::from_json(r#"{"width": 390, "height": 300}"#),
            Err(ConfigError::TooShort { .. })
        ));
    }
}

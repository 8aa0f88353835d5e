//! Startup configuration errors

/// A playfield that the simulation cannot run on
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("playfield {name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("playfield height {height} leaves no room for a gap (need at least {required})")]
    TooShort { height: f32, required: f32 },

    #[error("playfield width {width} does not clear the avatar (need more than {required})")]
    TooNarrow { width: f32, required: f32 },

    #[error("failed to parse playfield: {0}")]
    Parse(String),
}

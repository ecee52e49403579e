// Quantization - snapping raw input times to the timeline grid

use crate::error::{EngineError, EngineResult};

/// Quantization resolution in grid steps per second of timeline.
///
/// `Off` records exact times; the others snap to the nearest multiple of
/// `1/steps`. Only 0, 1, 4 and 8 are valid selector values, so invalid
/// resolutions are unrepresentable past `from_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    #[default]
    Off,
    Whole,
    Quarter,
    Eighth,
}

impl Resolution {
    /// Build from the raw selector value (0, 1, 4 or 8)
    pub fn from_steps(steps: u16) -> EngineResult<Self> {
        match steps {
            0 => Ok(Resolution::Off),
            1 => Ok(Resolution::Whole),
            4 => Ok(Resolution::Quarter),
            8 => Ok(Resolution::Eighth),
            other => Err(EngineError::InvalidResolution(other)),
        }
    }

    /// Grid steps per second (0 = no rounding)
    pub fn steps(&self) -> u16 {
        match self {
            Resolution::Off => 0,
            Resolution::Whole => 1,
            Resolution::Quarter => 4,
            Resolution::Eighth => 8,
        }
    }
}

/// Snap a time to the nearest grid point for the given resolution.
///
/// With `Off` the input is returned unchanged; otherwise
/// `round(time * steps) / steps`.
pub fn quantize(time: f64, resolution: Resolution) -> f64 {
    match resolution.steps() {
        0 => time,
        steps => (time * steps as f64).round() / steps as f64,
    }
}

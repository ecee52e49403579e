// Engine errors - contract violations at the public surface

use thiserror::Error;

/// Errors for caller contract violations.
///
/// Teardown races (a cancelled voice resuming) are handled as no-ops via
/// liveness checks and never surface here. Playhead boundary overruns are
/// normal termination, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("note value {0} outside valid range 0..7")]
    NoteOutOfRange(u8),

    #[error("quantization must be 0, 1, 4 or 8 steps per second, got {0}")]
    InvalidResolution(u16),

    #[error("no sound mapped for note value {0}")]
    UnmappedNote(u8),
}

pub type EngineResult<T> = Result<T, EngineError>;

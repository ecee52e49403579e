// Note entry - one recorded (value, time) pair on the timeline

use crate::error::{EngineError, EngineResult};
use crate::host::Handle;

/// Number of distinct note values; valid values are `0..NOTE_VALUES`.
pub const NOTE_VALUES: u8 = 7;

/// A recorded note: pitch row, quantized timeline position, and the display
/// marker handle created for it.
///
/// Entries are owned by the `NoteStore` and immutable once inserted; the
/// only mutation in scope is full clearing of the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub value: u8,
    /// Timeline position in seconds, already quantized
    pub time: f64,
    /// Host handle for this note's visual marker
    pub marker: Handle,
}

impl Note {
    pub fn new(value: u8, time: f64, marker: Handle) -> EngineResult<Self> {
        validate_value(value)?;
        Ok(Self {
            value,
            time,
            marker,
        })
    }
}

/// Reject note values outside `0..NOTE_VALUES`.
pub fn validate_value(value: u8) -> EngineResult<()> {
    if value >= NOTE_VALUES {
        return Err(EngineError::NoteOutOfRange(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = Note::new(3, 1.25, Handle(9)).unwrap();
        assert_eq!(note.value, 3);
        assert_eq!(note.time, 1.25);
        assert_eq!(note.marker, Handle(9));
    }

    #[test]
    fn test_value_range() {
        assert!(validate_value(0).is_ok());
        assert!(validate_value(6).is_ok());
        assert_eq!(validate_value(7), Err(EngineError::NoteOutOfRange(7)));
        assert_eq!(
            Note::new(200, 0.0, Handle(0)).unwrap_err(),
            EngineError::NoteOutOfRange(200)
        );
    }
}

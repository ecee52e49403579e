// Note mapping registry - note value to display label, icon, and sound clip
// Externally curated and assumed total over the valid note range.

use crate::error::{EngineError, EngineResult};
use crate::sequencer::note::NOTE_VALUES;

/// Opaque identifier for an icon asset owned by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u64);

/// Opaque identifier for an audio clip owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u64);

/// Everything registered for one note value.
#[derive(Debug, Clone)]
pub struct NoteMappingEntry {
    pub value: u8,
    pub label: String,
    pub icon: IconId,
    pub sound: SoundId,
    /// Clip length in seconds, drives voice completion
    pub clip_seconds: f64,
}

/// Registry mapping note values to their display and sound assets.
#[derive(Debug, Clone, Default)]
pub struct NoteMapping {
    entries: Vec<NoteMappingEntry>,
}

impl NoteMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering every valid note value with a diatonic label and
    /// one asset id per value. Clip length defaults to one second.
    pub fn with_defaults() -> Self {
        const LABELS: [&str; NOTE_VALUES as usize] = ["C", "D", "E", "F", "G", "A", "B"];

        let mut mapping = Self::new();
        for value in 0..NOTE_VALUES {
            mapping.register(NoteMappingEntry {
                value,
                label: LABELS[value as usize].to_string(),
                icon: IconId(value as u64),
                sound: SoundId(value as u64),
                clip_seconds: 1.0,
            });
        }
        mapping
    }

    /// Add or replace the entry for a note value.
    pub fn register(&mut self, entry: NoteMappingEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.value == entry.value) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Look up the assets for a note value.
    /// A miss is a caller contract violation (the registry is assumed complete).
    pub fn lookup(&self, value: u8) -> EngineResult<&NoteMappingEntry> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .ok_or(EngineError::UnmappedNote(value))
    }

    pub fn label(&self, value: u8) -> EngineResult<&str> {
        Ok(&self.lookup(value)?.label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_note_range() {
        let mapping = NoteMapping::with_defaults();
        assert_eq!(mapping.len(), NOTE_VALUES as usize);

        for value in 0..NOTE_VALUES {
            assert!(mapping.lookup(value).is_ok());
        }
        assert_eq!(mapping.label(0), Ok("C"));
        assert_eq!(mapping.label(6), Ok("B"));
    }

    #[test]
    fn test_unmapped_value() {
        let mapping = NoteMapping::with_defaults();
        assert_eq!(mapping.lookup(7).unwrap_err(), EngineError::UnmappedNote(7));
    }

    #[test]
    fn test_register_replaces() {
        let mut mapping = NoteMapping::with_defaults();
        mapping.register(NoteMappingEntry {
            value: 0,
            label: "Do".to_string(),
            icon: IconId(40),
            sound: SoundId(40),
            clip_seconds: 2.5,
        });

        assert_eq!(mapping.len(), NOTE_VALUES as usize);
        let entry = mapping.lookup(0).unwrap();
        assert_eq!(entry.label, "Do");
        assert_eq!(entry.clip_seconds, 2.5);
    }
}

// Note store - the ordered set of recorded notes for the current take

use crate::host::RuntimeHost;
use crate::sequencer::note::Note;

/// Holds the recorded `(value, time)` entries for the current take.
///
/// Insertion order is preserved for deterministic iteration; no two entries
/// share an identical `(value, time)` pair. Times are compared with exact
/// equality: quantized inputs go through the same rounding computation, and
/// resolution-off times are kept raw.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Whether an entry with this exact `(value, time)` already exists.
    pub fn contains(&self, value: u8, time: f64) -> bool {
        self.notes
            .iter()
            .any(|n| n.value == value && n.time == time)
    }

    /// Insert a note; returns false without inserting when an identical
    /// `(value, time)` entry is already present.
    pub fn insert(&mut self, note: Note) -> bool {
        if self.contains(note.value, note.time) {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Remove every entry unconditionally, releasing each entry's display
    /// marker through the host.
    pub fn clear(&mut self, host: &mut dyn RuntimeHost) {
        for note in self.notes.drain(..) {
            host.destroy(note.marker);
        }
    }

    /// Entries whose time lies in the interval swept between two ticks,
    /// regardless of which bound is larger: inclusive on the `from` side,
    /// exclusive on the `to` side. The dual comparison serves forward and
    /// reverse playback with the same predicate.
    pub fn notes_in_sweep(&self, from: f64, to: f64) -> impl Iterator<Item = &Note> {
        self.notes
            .iter()
            .filter(move |n| (n.time >= from && n.time < to) || (n.time < from && n.time >= to))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

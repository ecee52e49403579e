// Sequencer module - notes, transport, and the playback engine

pub mod engine;
pub mod note;
pub mod store;
pub mod transport;

pub use engine::{NoteInput, Sequencer, TickUpdate};
pub use note::{NOTE_VALUES, Note};
pub use store::NoteStore;
pub use transport::{Direction, Sweep, TIMELINE_LEN, Transport, TransportState};

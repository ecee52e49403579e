// echo_grid - a 5-second note-loop sequencing engine

pub mod error;
pub mod host;
pub mod layout;
pub mod mapping;
pub mod messaging;
pub mod quantize;
pub mod sequencer;
pub mod voice;

// Re-export commonly used types for convenience
pub use error::{EngineError, EngineResult};
pub use host::{Handle, ResourceKind, RuntimeHost};
pub use layout::Layout;
pub use mapping::{IconId, NoteMapping, NoteMappingEntry, SoundId};
pub use messaging::{Control, Notification, create_control_channel, create_notification_channel};
pub use quantize::{Resolution, quantize};
pub use sequencer::{
    Direction, NOTE_VALUES, Note, NoteInput, NoteStore, Sequencer, TIMELINE_LEN, TickUpdate,
    Transport, TransportState,
};
pub use voice::{ECHO_DECAY, ECHO_DELAY, Voice, VoiceManager};

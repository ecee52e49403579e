// Notification types - engine state changes reported back to a display layer

use crate::sequencer::transport::TransportState;

/// Engine → UI events, so a display layer can keep its play/stop
/// iconography, note markers and playhead in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    Transport(TransportState),
    /// A note was triggered audibly
    Note { value: u8, time: f64 },
    /// Playhead moved to this timeline position
    Playhead(f64),
}

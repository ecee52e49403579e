// Control types - user surface events fed into the engine

use crate::quantize::Resolution;

/// Everything the user controls surface can send: note input, the
/// play/stop toggle, the quantization selector, and the echo/reverse/clear
/// switches. Controls are drained between ticks, never mid-tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Note-input event carrying the note value
    Note(u8),
    /// Play/stop toggle
    PlayStop,
    SetResolution(Resolution),
    SetEcho(bool),
    SetReverse(bool),
    /// Clear button: drop the whole take
    Clear,
}

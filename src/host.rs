// Runtime host boundary - opaque resource pool and sound starter
// The engine holds handles; it never touches host object internals.

use crate::mapping::SoundId;

/// Opaque handle for a host-owned resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

/// What kind of resource a handle materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Visual marker for a recorded note
    NoteMarker,
    /// One sounding instance of a note (including each echo repeat)
    SoundInstance,
}

/// Engine/runtime boundary for materializing and releasing per-note visual
/// markers and per-voice sound instances.
///
/// `destroy` is fire-and-forget: the engine drops its handle immediately and
/// never assumes the teardown completed synchronously.
pub trait RuntimeHost {
    fn create(&mut self, kind: ResourceKind) -> Handle;

    fn destroy(&mut self, handle: Handle);

    /// Begin playback of a sound on a previously created `SoundInstance`.
    fn start_sound(&mut self, instance: Handle, sound: SoundId, volume: f64);
}

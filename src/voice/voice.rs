// Voice - one sounding instance of a note, including each echo repeat

use crate::host::{Handle, RuntimeHost};
use crate::mapping::{NoteMappingEntry, SoundId};

/// Volume multiplier applied per echo step.
pub const ECHO_DECAY: f64 = 0.75;

/// Delay in seconds added per echo step.
pub const ECHO_DELAY: f64 = 0.25;

/// Where a voice is in its lifecycle. Delays and completion are tick time,
/// advanced cooperatively by the voice manager.
#[derive(Debug, Clone, Copy, PartialEq)]
enum VoicePhase {
    /// Waiting out its echo delay before the sound starts
    Delayed { remaining: f64 },
    /// Sound started, counting down the clip length
    Sounding { remaining: f64 },
}

/// A transient playback instance owned exclusively by the voice manager.
///
/// The `alive` flag is the liveness token: `stop_all` clears it before
/// releasing resources, and every resumption point checks it first, so a
/// cancelled voice can never start a sound or touch released state.
#[derive(Debug)]
pub struct Voice {
    value: u8,
    echo_index: u8,
    volume: f64,
    sound: SoundId,
    clip_seconds: f64,
    handle: Handle,
    phase: VoicePhase,
    alive: bool,
}

impl Voice {
    /// Create a voice for the given echo repeat. The echo-index-0 voice
    /// starts its sound immediately; later repeats wait out their delay.
    pub(crate) fn spawn(
        value: u8,
        echo_index: u8,
        entry: &NoteMappingEntry,
        handle: Handle,
        host: &mut dyn RuntimeHost,
    ) -> Self {
        let volume = ECHO_DECAY.powi(echo_index as i32);
        let delay = ECHO_DELAY * echo_index as f64;

        let phase = if echo_index == 0 {
            host.start_sound(handle, entry.sound, volume);
            VoicePhase::Sounding {
                remaining: entry.clip_seconds,
            }
        } else {
            VoicePhase::Delayed { remaining: delay }
        };

        Self {
            value,
            echo_index,
            volume,
            sound: entry.sound,
            clip_seconds: entry.clip_seconds,
            handle,
            phase,
            alive: true,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn echo_index(&self) -> u8 {
        self.echo_index
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub(crate) fn handle(&self) -> Handle {
        self.handle
    }

    /// Still waiting out its echo delay
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, VoicePhase::Delayed { .. })
    }

    /// Sound currently playing
    pub fn is_sounding(&self) -> bool {
        matches!(self.phase, VoicePhase::Sounding { .. })
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }

    /// Advance this voice by one tick. Returns true when the voice is done
    /// and its resources have been released.
    pub(crate) fn tick(&mut self, delta: f64, host: &mut dyn RuntimeHost) -> bool {
        // Liveness check: a cancelled voice must not resume
        if !self.alive {
            return true;
        }

        match self.phase {
            VoicePhase::Delayed { remaining } => {
                let remaining = remaining - delta;
                if remaining <= 0.0 {
                    host.start_sound(self.handle, self.sound, self.volume);
                    // Carry the overshoot into the clip countdown
                    self.phase = VoicePhase::Sounding {
                        remaining: self.clip_seconds + remaining,
                    };
                } else {
                    self.phase = VoicePhase::Delayed { remaining };
                }
                false
            }
            VoicePhase::Sounding { remaining } => {
                let remaining = remaining - delta;
                if remaining <= 0.0 {
                    host.destroy(self.handle);
                    self.alive = false;
                    true
                } else {
                    self.phase = VoicePhase::Sounding { remaining };
                    false
                }
            }
        }
    }
}

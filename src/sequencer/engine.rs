// Sequencer engine - ties store, transport, and voices together
// Drives the per-tick update and dispatches user surface controls.

use crate::error::EngineResult;
use crate::host::{ResourceKind, RuntimeHost};
use crate::layout::Layout;
use crate::mapping::NoteMapping;
use crate::messaging::Control;
use crate::quantize::{Resolution, quantize};
use crate::sequencer::note::{Note, validate_value};
use crate::sequencer::store::NoteStore;
use crate::sequencer::transport::{Direction, Transport, TransportState};
use crate::voice::VoiceManager;

/// Outcome of one note-input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteInput {
    /// False when the (value, time) pair was already recorded; the note is
    /// still played audibly either way
    pub recorded: bool,
    /// Quantized timeline position the note landed on
    pub time: f64,
}

/// What one tick did: which notes fired, where the playhead ended up, and
/// whether the timeline boundary stopped the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TickUpdate {
    pub triggered: Vec<(u8, f64)>,
    pub playhead: f64,
    pub finished: bool,
}

/// The sequencing/playback engine.
///
/// Single-threaded and cooperatively scheduled: an external driver calls
/// `tick(delta)` at its own cadence and feeds controls between ticks.
pub struct Sequencer {
    store: NoteStore,
    transport: Transport,
    voices: VoiceManager,
    mapping: NoteMapping,
    resolution: Resolution,
}

impl Sequencer {
    pub fn new(mapping: NoteMapping) -> Self {
        Self {
            store: NoteStore::new(),
            transport: Transport::new(),
            voices: VoiceManager::new(),
            mapping,
            resolution: Resolution::Off,
        }
    }

    pub fn state(&self) -> TransportState {
        self.transport.state()
    }

    pub fn direction(&self) -> Direction {
        self.transport.direction()
    }

    pub fn current_time(&self) -> f64 {
        self.transport.current_time()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn echo(&self) -> bool {
        self.voices.echo()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn mapping(&self) -> &NoteMapping {
        &self.mapping
    }

    pub fn active_voices(&self) -> usize {
        self.voices.active_count()
    }

    /// Dispatch one user surface control.
    pub fn handle_control(&mut self, control: Control, host: &mut dyn RuntimeHost) -> EngineResult<()> {
        match control {
            Control::Note(value) => {
                self.note_input(value, host)?;
            }
            Control::PlayStop => self.toggle_play_stop(host),
            Control::SetResolution(resolution) => self.set_resolution(resolution),
            Control::SetEcho(echo) => self.set_echo(echo),
            Control::SetReverse(reverse) => self.set_reverse(reverse),
            Control::Clear => self.clear(host),
        }
        Ok(())
    }

    /// Note-input event.
    ///
    /// Outside Recording this starts a fresh take: playback stops, the
    /// store and voices are cleared, and the playhead moves to the
    /// direction's start. The note is then recorded at the quantized
    /// current time — deduplicated against existing entries — and played
    /// audibly regardless of whether it was inserted.
    pub fn note_input(&mut self, value: u8, host: &mut dyn RuntimeHost) -> EngineResult<NoteInput> {
        validate_value(value)?;

        if !self.transport.state().is_recording() {
            self.voices.stop_all(host);
            self.store.clear(host);
            self.transport.begin_recording();
            log::debug!("recording started, direction {:?}", self.direction());
        }

        let time = quantize(self.transport.current_time(), self.resolution);

        // Dedup check before materializing a marker
        let recorded = if self.store.contains(value, time) {
            false
        } else {
            let marker = host.create(ResourceKind::NoteMarker);
            self.store.insert(Note::new(value, time, marker)?)
        };

        // Audible trigger is unconditional; only the insertion deduplicates
        self.voices.trigger(value, &self.mapping, host)?;

        Ok(NoteInput { recorded, time })
    }

    /// Play/stop toggle. Stops if Playing or Recording (keeping the
    /// recorded notes), otherwise starts playback from the direction's
    /// start position.
    pub fn toggle_play_stop(&mut self, host: &mut dyn RuntimeHost) {
        if self.transport.state().is_active() {
            self.stop(host);
        } else {
            self.transport.begin_playing();
            log::debug!("playback started, direction {:?}", self.direction());
        }
    }

    /// Stop playback or recording: cancel every voice, keep the notes.
    pub fn stop(&mut self, host: &mut dyn RuntimeHost) {
        self.voices.stop_all(host);
        self.transport.stop();
    }

    /// Clear button: stop everything, drop all notes and their markers,
    /// and rehome the playhead to the take start.
    pub fn clear(&mut self, host: &mut dyn RuntimeHost) {
        self.stop(host);
        self.store.clear(host);
        self.transport.rewind();
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.voices.set_echo(echo);
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.transport.set_direction(if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        });
    }

    /// Advance the engine by one tick of `delta` seconds (`delta > 0`).
    ///
    /// Voices advance first so delays and completions use the full tick;
    /// voices created by this tick's sweep start counting on the next one.
    /// While Playing or Recording the playhead sweeps its interval and
    /// triggers every note it covers, in store iteration order; crossing a
    /// timeline boundary clamps the playhead, stops the transport, and
    /// cancels all voices.
    pub fn tick(&mut self, delta: f64, host: &mut dyn RuntimeHost) -> EngineResult<TickUpdate> {
        assert!(delta > 0.0, "tick delta must be > 0");

        self.voices.tick(delta, host);

        let mut triggered = Vec::new();
        let mut finished = false;

        if let Some(sweep) = self.transport.advance(delta) {
            triggered = self
                .store
                .notes_in_sweep(sweep.from, sweep.to)
                .map(|n| (n.value, n.time))
                .collect();

            for &(value, _) in &triggered {
                self.voices.trigger(value, &self.mapping, host)?;
            }

            if sweep.finished {
                self.voices.stop_all(host);
                log::debug!("timeline boundary reached, transport idle");
                finished = true;
            }
        }

        Ok(TickUpdate {
            triggered,
            playhead: self.transport.current_time(),
            finished,
        })
    }

    /// Playhead screen position for the display collaborator.
    pub fn playhead_x(&self, layout: &Layout) -> f64 {
        layout.x_for_time(self.transport.current_time())
    }
}

// Transport - record/play/stop state machine and playhead advancement

/// Timeline length in seconds.
pub const TIMELINE_LEN: f64 = 5.0;

/// Reverse playback starts slightly past the end so the first tick's
/// decrement brings the playhead into range, symmetric with the forward
/// start at 0.
const REVERSE_PLAY_START: f64 = 5.01;

/// Transport state (record/play/stop)
///
/// A single enum rather than independent playing/recording flags, so
/// invalid combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TransportState {
    #[default]
    Idle,
    Recording,
    Playing,
}

impl TransportState {
    /// Whether the playhead advances in this state (Playing or Recording)
    pub fn is_active(&self) -> bool {
        matches!(self, TransportState::Playing | TransportState::Recording)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, TransportState::Recording)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, TransportState::Playing)
    }
}

/// Playback direction, toggled externally at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// The time interval covered by one tick, plus whether the tick ran the
/// playhead off the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Playhead at the previous tick (inclusive side)
    pub from: f64,
    /// Playhead after this tick's advance, before clamping (exclusive side)
    pub to: f64,
    /// True when the advance crossed a timeline boundary and the transport
    /// stopped
    pub finished: bool,
}

/// Transport controller: state, direction, and playhead position.
#[derive(Debug, Default)]
pub struct Transport {
    state: TransportState,
    direction: Direction,
    current_time: f64,
    last_time: f64,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Playhead position, clamped to the timeline
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Playhead position at the previous tick
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Where a fresh take starts for the current direction.
    pub fn take_start(&self) -> f64 {
        match self.direction {
            Direction::Forward => 0.0,
            Direction::Reverse => TIMELINE_LEN,
        }
    }

    /// Enter Recording at the start of a fresh take.
    pub fn begin_recording(&mut self) {
        self.current_time = self.take_start();
        self.last_time = self.current_time;
        self.state = TransportState::Recording;
    }

    /// Enter Playing from the direction's start position.
    pub fn begin_playing(&mut self) {
        self.current_time = match self.direction {
            Direction::Forward => 0.0,
            Direction::Reverse => REVERSE_PLAY_START,
        };
        self.last_time = self.current_time;
        self.state = TransportState::Playing;
    }

    /// Back to Idle; the playhead keeps its position.
    pub fn stop(&mut self) {
        self.state = TransportState::Idle;
    }

    /// Reset the playhead to the take start without changing state.
    pub fn rewind(&mut self) {
        self.current_time = self.take_start();
        self.last_time = self.current_time;
    }

    /// Advance the playhead by one tick and report the swept interval.
    ///
    /// The sweep carries the pre-clamp position so notes exactly on a
    /// timeline boundary are triggered by their final tick in either
    /// direction. Crossing a boundary clamps the playhead and transitions
    /// to Idle; callers must then cancel voices.
    ///
    /// No-op (`None`) unless Playing or Recording.
    pub fn advance(&mut self, delta: f64) -> Option<Sweep> {
        if !self.state.is_active() {
            return None;
        }

        self.last_time = self.current_time;
        let mut finished = false;

        match self.direction {
            Direction::Reverse => {
                self.current_time -= delta;
                if self.current_time < 0.0 {
                    finished = true;
                }
            }
            Direction::Forward => {
                self.current_time += delta;
                if self.current_time > TIMELINE_LEN {
                    finished = true;
                }
            }
        }

        let sweep = Sweep {
            from: self.last_time,
            to: self.current_time,
            finished,
        };

        if finished {
            self.current_time = match self.direction {
                Direction::Reverse => 0.0,
                Direction::Forward => TIMELINE_LEN,
            };
            self.state = TransportState::Idle;
        }

        Some(sweep)
    }
}

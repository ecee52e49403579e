// Timeline layout - pure time/value to screen position mapping
// Supplied by the visual layer; the engine only reports positions.

use crate::sequencer::note::NOTE_VALUES;
use crate::sequencer::transport::TIMELINE_LEN;

/// Screen rectangle the note grid occupies.
///
/// Time `[0, 5]` maps linearly onto `[x_min, x_max]` and note values
/// `[0, 7)` onto `[y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Layout {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// X position of a timeline position (playhead, note marker, time label)
    pub fn x_for_time(&self, time: f64) -> f64 {
        lerp(self.x_min, self.x_max, time / TIMELINE_LEN)
    }

    /// Y position of a note value row
    pub fn y_for_value(&self, value: u8) -> f64 {
        lerp(self.y_min, self.y_max, value as f64 / NOTE_VALUES as f64)
    }

    /// Marker position for a recorded note
    pub fn marker_position(&self, value: u8, time: f64) -> (f64, f64) {
        (self.x_for_time(time), self.y_for_value(value))
    }

    /// X positions for `count` evenly spaced time ruler labels
    /// (including both ends of the timeline).
    pub fn time_label_positions(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.x_min];
        }
        (0..count)
            .map(|i| {
                let time = TIMELINE_LEN * i as f64 / (count - 1) as f64;
                self.x_for_time(time)
            })
            .collect()
    }
}

// echo_grid demo driver
// Feeds a scripted control sequence through the control channel and runs
// the engine on a fixed tick cadence, logging what it plays.

use echo_grid::{
    Control, Handle, Layout, NoteMapping, Notification, Resolution, ResourceKind, RuntimeHost,
    Sequencer, SoundId, create_control_channel, create_notification_channel,
};
use ringbuf::traits::{Consumer, Producer};
use std::thread;
use std::time::Duration;

const CONTROL_RINGBUFFER_CAPACITY: usize = 64;
const NOTIFICATION_RINGBUFFER_CAPACITY: usize = 256;

/// Tick cadence of the demo driver (the engine itself has no cadence
/// assumptions; it just receives deltas).
const TICK_SECONDS: f64 = 1.0 / 60.0;

/// Host that materializes handles as plain ids and logs sound starts.
#[derive(Default)]
struct LoggingHost {
    next: u64,
}

impl RuntimeHost for LoggingHost {
    fn create(&mut self, kind: ResourceKind) -> Handle {
        self.next += 1;
        log::debug!("create {:?} -> #{}", kind, self.next);
        Handle(self.next)
    }

    fn destroy(&mut self, handle: Handle) {
        log::debug!("destroy #{}", handle.0);
    }

    fn start_sound(&mut self, instance: Handle, sound: SoundId, volume: f64) {
        log::info!(
            "sound {} on instance #{} at volume {:.4}",
            sound.0,
            instance.0,
            volume
        );
    }
}

fn main() {
    env_logger::init();

    println!("=== echo_grid ===");
    println!("5-second note loop demo\n");

    let (mut control_tx, mut control_rx) = create_control_channel(CONTROL_RINGBUFFER_CAPACITY);
    let (mut notification_tx, mut notification_rx) =
        create_notification_channel(NOTIFICATION_RINGBUFFER_CAPACITY);

    let mut host = LoggingHost::default();
    let mut engine = Sequencer::new(NoteMapping::with_defaults());
    let layout = Layout::new(0.0, 100.0, 0.0, 70.0);

    // Scripted session: quantize to quarters with echo on, record a short
    // phrase, then play it back. Each entry is (tick index, control).
    let script: &[(u64, Control)] = &[
        (0, Control::SetResolution(Resolution::Quarter)),
        (0, Control::SetEcho(true)),
        (6, Control::Note(0)),
        (30, Control::Note(2)),
        (60, Control::Note(4)),
        (90, Control::Note(6)),
        (130, Control::PlayStop),
        (140, Control::PlayStop),
    ];
    let mut script_pos = 0;

    let total_ticks = 140 + (6.0 / TICK_SECONDS) as u64;
    for tick_index in 0..total_ticks {
        while script_pos < script.len() && script[script_pos].0 <= tick_index {
            if control_tx.try_push(script[script_pos].1).is_err() {
                log::warn!("control channel full, dropping input");
            }
            script_pos += 1;
        }

        // Controls are drained between ticks, never mid-tick
        let mut last_state = engine.state();
        while let Some(control) = control_rx.try_pop() {
            if let Err(e) = engine.handle_control(control, &mut host) {
                eprintln!("ERROR: {e}");
                continue;
            }
            if engine.state() != last_state {
                last_state = engine.state();
                let _ = notification_tx.try_push(Notification::Transport(last_state));
            }
        }

        match engine.tick(TICK_SECONDS, &mut host) {
            Ok(update) => {
                for &(value, time) in &update.triggered {
                    let _ = notification_tx.try_push(Notification::Note { value, time });
                }
                let _ = notification_tx.try_push(Notification::Playhead(update.playhead));
                if update.finished {
                    let _ = notification_tx.try_push(Notification::Transport(engine.state()));
                }
            }
            Err(e) => eprintln!("ERROR: {e}"),
        }

        while let Some(notification) = notification_rx.try_pop() {
            match notification {
                Notification::Transport(state) => println!("transport: {state:?}"),
                Notification::Note { value, time } => {
                    let label = engine.mapping().label(value).unwrap_or("?");
                    println!("note {label} at {time:.2}s");
                }
                Notification::Playhead(time) => {
                    log::trace!("playhead at x = {:.1}", layout.x_for_time(time));
                }
            }
        }

        thread::sleep(Duration::from_secs_f64(TICK_SECONDS));
    }

    println!("\n{} notes recorded, done.", engine.store().len());
}

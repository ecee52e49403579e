// Voice manager - the pool of concurrently sounding voices

use crate::error::EngineResult;
use crate::host::{ResourceKind, RuntimeHost};
use crate::mapping::NoteMapping;
use crate::voice::voice::Voice;

/// Echo repeats created per trigger in addition to the primary voice.
pub const ECHO_REPEATS: u8 = 2;

/// Owns every active voice from trigger to completion or cancellation.
/// The voice set is mutated only here: add on trigger, remove on natural
/// completion or `stop_all`.
#[derive(Default)]
pub struct VoiceManager {
    voices: Vec<Voice>,
    echo: bool,
}

impl VoiceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn active_count(&self) -> usize {
        self.voices.len()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Start playback of a note: always the primary voice, plus two echo
    /// repeats at decreasing volume and increasing delay when echo is on.
    pub fn trigger(
        &mut self,
        value: u8,
        mapping: &NoteMapping,
        host: &mut dyn RuntimeHost,
    ) -> EngineResult<()> {
        let entry = mapping.lookup(value)?;
        let repeats = if self.echo { ECHO_REPEATS } else { 0 };

        for echo_index in 0..=repeats {
            let handle = host.create(ResourceKind::SoundInstance);
            self.voices
                .push(Voice::spawn(value, echo_index, entry, handle, host));
        }
        Ok(())
    }

    /// Advance every voice by one tick, starting delayed sounds whose time
    /// has come and dropping voices that played to completion.
    pub fn tick(&mut self, delta: f64, host: &mut dyn RuntimeHost) {
        self.voices.retain_mut(|voice| !voice.tick(delta, host));
    }

    /// Cancel everything: pending delays and sounding voices alike.
    ///
    /// Each voice is marked dead before its handle is released, then the
    /// set is emptied, so nothing can resume afterwards. Safe to call at
    /// any time, including with zero active voices.
    pub fn stop_all(&mut self, host: &mut dyn RuntimeHost) {
        for voice in &mut self.voices {
            voice.kill();
            host.destroy(voice.handle());
        }
        self.voices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Handle;
    use crate::mapping::SoundId;

    #[derive(Default)]
    struct TestHost {
        next: u64,
        started: Vec<(Handle, SoundId, f64)>,
        destroyed: Vec<Handle>,
    }

    impl RuntimeHost for TestHost {
        fn create(&mut self, _kind: ResourceKind) -> Handle {
            self.next += 1;
            Handle(self.next)
        }

        fn destroy(&mut self, handle: Handle) {
            self.destroyed.push(handle);
        }

        fn start_sound(&mut self, instance: Handle, sound: SoundId, volume: f64) {
            self.started.push((instance, sound, volume));
        }
    }

    #[test]
    fn test_trigger_without_echo() {
        let mut manager = VoiceManager::new();
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        manager.trigger(3, &mapping, &mut host).unwrap();

        assert_eq!(manager.active_count(), 1);
        assert_eq!(host.started.len(), 1);
        assert_eq!(host.started[0].2, 1.0);
    }

    #[test]
    fn test_trigger_with_echo_fans_out() {
        let mut manager = VoiceManager::new();
        manager.set_echo(true);
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        manager.trigger(3, &mapping, &mut host).unwrap();

        assert_eq!(manager.active_count(), 3);
        let volumes: Vec<f64> = manager.voices().iter().map(|v| v.volume()).collect();
        assert_eq!(volumes, vec![1.0, 0.75, 0.5625]);
        // Only the primary voice has started; echoes wait out their delays
        assert_eq!(host.started.len(), 1);

        // 0.25s later the first echo starts
        manager.tick(0.25, &mut host);
        assert_eq!(host.started.len(), 2);
        assert_eq!(host.started[1].2, 0.75);

        // 0.25s more and the second echo starts
        manager.tick(0.25, &mut host);
        assert_eq!(host.started.len(), 3);
        assert_eq!(host.started[2].2, 0.5625);
    }

    #[test]
    fn test_unmapped_note_is_rejected() {
        let mut manager = VoiceManager::new();
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        assert!(manager.trigger(9, &mapping, &mut host).is_err());
        assert_eq!(manager.active_count(), 0);
        assert!(host.started.is_empty());
    }

    #[test]
    fn test_voices_complete_and_release() {
        let mut manager = VoiceManager::new();
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        manager.trigger(0, &mapping, &mut host).unwrap();
        // Default clip is 1.0s
        manager.tick(0.5, &mut host);
        assert_eq!(manager.active_count(), 1);
        manager.tick(0.6, &mut host);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(host.destroyed.len(), 1);
    }

    #[test]
    fn test_stop_all_mid_delay_is_silent() {
        let mut manager = VoiceManager::new();
        manager.set_echo(true);
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        manager.trigger(1, &mapping, &mut host).unwrap();
        manager.tick(0.1, &mut host);
        manager.stop_all(&mut host);

        assert_eq!(manager.active_count(), 0);
        // All three handles released, pending echoes never made a sound
        assert_eq!(host.destroyed.len(), 3);
        assert_eq!(host.started.len(), 1);

        // Further ticks are no-ops
        manager.tick(1.0, &mut host);
        assert_eq!(host.started.len(), 1);
    }

    #[test]
    fn test_stop_all_with_no_voices() {
        let mut manager = VoiceManager::new();
        let mut host = TestHost::default();
        manager.stop_all(&mut host);
        assert_eq!(manager.active_count(), 0);
        assert!(host.destroyed.is_empty());
    }

    #[test]
    fn test_overlapping_triggers_are_independent() {
        let mut manager = VoiceManager::new();
        let mapping = NoteMapping::with_defaults();
        let mut host = TestHost::default();

        manager.trigger(0, &mapping, &mut host).unwrap();
        manager.tick(0.5, &mut host);
        manager.trigger(0, &mapping, &mut host).unwrap();
        assert_eq!(manager.active_count(), 2);

        // First voice finishes, second keeps sounding
        manager.tick(0.6, &mut host);
        assert_eq!(manager.active_count(), 1);
    }
}

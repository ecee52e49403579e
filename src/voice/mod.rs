// Voice module - sounding instances and their cooperative lifecycle

pub mod manager;
pub mod voice;

pub use manager::{ECHO_REPEATS, VoiceManager};
pub use voice::{ECHO_DECAY, ECHO_DELAY, Voice};

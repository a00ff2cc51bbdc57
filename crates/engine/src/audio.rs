//! Audio collaborator.

use std::time::Duration;

/// Background music control.
pub trait Audio {
    /// Start the looping background track, fading in over `fade_in`.
    fn play_music(&mut self, fade_in: Duration);

    /// Music volume on the mixer scale (0-128).
    fn set_volume(&mut self, volume: u8);
}

/// Audio sink for hosts without a mixer (terminals, tests).
///
/// Tracks what a real mixer would have been told.
#[derive(Debug, Default, Clone)]
pub struct SilentAudio {
    volume: u8,
    playing: bool,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Audio for SilentAudio {
    fn play_music(&mut self, fade_in: Duration) {
        tracing::debug!(fade_in_ms = fade_in.as_millis() as u64, "music started");
        self.playing = true;
    }

    fn set_volume(&mut self, volume: u8) {
        tracing::debug!(volume, "music volume");
        self.volume = volume;
    }
}

//! Sound cues for the host to play
//!
//! The simulation only names sounds; the host owns the actual audio device.
//! `AudioMixer` turns named sounds into playback requests at the volume the
//! player chose.

use rand::Rng;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Hostile knocked out (one of the punch pool)
    PunchJab,
    PunchHook,
    PunchUppercut,
    /// Player caught from behind
    GameOver,
    /// Session ended on a new best score
    HighScore,
}

impl SoundEffect {
    /// Sounds picked from when a hostile is knocked out
    pub const PUNCH_POOL: [SoundEffect; 3] = [
        SoundEffect::PunchJab,
        SoundEffect::PunchHook,
        SoundEffect::PunchUppercut,
    ];

    /// Uniform pick from the punch pool
    pub fn random_punch<R: Rng>(rng: &mut R) -> Self {
        Self::PUNCH_POOL[rng.random_range(0..Self::PUNCH_POOL.len())]
    }

    pub fn is_punch(self) -> bool {
        Self::PUNCH_POOL.contains(&self)
    }

    /// Audio file the host should load for this cue
    pub fn asset(self) -> &'static str {
        match self {
            SoundEffect::PunchJab => "sounds/punch-1.wav",
            SoundEffect::PunchHook => "sounds/punch-2.wav",
            SoundEffect::PunchUppercut => "sounds/punch-3.wav",
            SoundEffect::GameOver => "sounds/bell.wav",
            SoundEffect::HighScore => "sounds/crowd-cheer.wav",
        }
    }
}

/// A sound the host should play now
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRequest {
    pub effect: SoundEffect,
    pub asset: &'static str,
    /// 0.0 - 1.0
    pub volume: f32,
}

/// Volume control for sound cues, driven by the player's settings
#[derive(Debug, Clone, Default)]
pub struct AudioMixer {
    settings: Settings,
}

impl AudioMixer {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self {
            settings: settings.clone(),
        };
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.settings.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.settings.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    /// Settings as adjusted through the mixer, for saving
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Playback request for a sound, or `None` when it would be silent
    pub fn request(&self, effect: SoundEffect) -> Option<PlaybackRequest> {
        let volume = self.settings.effective_volume();
        if volume <= 0.0 {
            return None;
        }
        Some(PlaybackRequest {
            effect,
            asset: effect.asset(),
            volume,
        })
    }

    /// Playback requests for every sound event in a drained batch
    pub fn requests_for(&self, events: &[GameEvent]) -> Vec<PlaybackRequest> {
        events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Sound(effect) => self.request(*effect),
                _ => None,
            })
            .collect()
    }
}

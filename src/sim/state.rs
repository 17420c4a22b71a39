//! Game state and core simulation types
//!
//! Everything the session loop reads or writes lives here. The host only
//! reads it (through `Frame::capture`) and drains `events`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::archetype::CharacterArchetype;
use super::character::Character;
use super::dimensions::Dimensions;
use super::level::Level;
use crate::audio::SoundEffect;
use crate::highscores::HighScores;
use crate::tuning::Tuning;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh process, waiting for the first tap
    Welcome,
    /// Active gameplay
    Running,
    /// Paused mid-session
    Paused,
    /// Caught from behind; waiting for a tap (after the cooldown) to resume
    GameOver,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted,
    HostileSpawned {
        id: u32,
        archetype: CharacterArchetype,
    },
    HostileDodged {
        id: u32,
    },
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    Sound(SoundEffect),
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub dims: Dimensions,
    /// Backdrop theme
    pub level: Level,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score this process has seen (memory only)
    pub high_score: u32,
    pub highscores: HighScores,
    /// The one player character; always present
    pub player: Character,
    /// Active hostiles in spawn order
    pub hostiles: Vec<Character>,
    /// Simulation clock in seconds (stopped while paused or on the welcome screen)
    pub clock: f64,
    pub last_spawn_at: f64,
    pub session_started_at: f64,
    pub game_over_at: Option<f64>,
    /// Whether the last game over set a new high score
    pub new_high_score: bool,
    /// Number of sessions started (1-based once play begins)
    pub session_count: u32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and display size
    pub fn new(seed: u64, tuning: Tuning, level_width: f32, level_height: f32) -> Self {
        let dims = Dimensions::new(level_width, level_height, &tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Character::player(1, &dims, &mut rng);
        Self {
            seed,
            rng,
            tuning,
            dims,
            level: Level::DEFAULT,
            phase: GamePhase::Welcome,
            score: 0,
            high_score: 0,
            highscores: HighScores::new(),
            player,
            hostiles: Vec::new(),
            clock: 0.0,
            last_spawn_at: 0.0,
            session_started_at: 0.0,
            game_over_at: None,
            new_high_score: false,
            session_count: 0,
            events: Vec::new(),
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Player first, then hostiles in spawn order
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        std::iter::once(&self.player).chain(self.hostiles.iter())
    }

    /// Spawn a hostile whose speed is capped by the current score
    pub fn spawn_hostile(&mut self) -> u32 {
        let max_speed = self.tuning.max_hostile_speed(self.score);
        let archetype = CharacterArchetype::random_type(max_speed, &mut self.rng);
        self.spawn_hostile_of(archetype)
    }

    /// Spawn a hostile of a specific archetype
    pub fn spawn_hostile_of(&mut self, archetype: CharacterArchetype) -> u32 {
        let id = self.next_entity_id();
        let hostile = Character::hostile(id, archetype, &self.dims, &mut self.rng);
        log::debug!(
            "Spawned {} #{} facing {:?} at x={}",
            archetype.name(),
            id,
            hostile.facing,
            hostile.x()
        );
        self.hostiles.push(hostile);
        self.last_spawn_at = self.clock;
        self.events.push(GameEvent::HostileSpawned { id, archetype });
        id
    }

    /// Remove a hostile by id; removing an absent id is a no-op
    pub fn remove_hostile(&mut self, id: u32) -> bool {
        match self.hostiles.iter().position(|h| h.id == id) {
            Some(index) => {
                self.hostiles.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_hostiles(&mut self) {
        self.hostiles.clear();
    }

    /// Replace the player with a fresh one at the center
    pub fn reset_player(&mut self) {
        let id = self.next_entity_id();
        self.player = Character::player(id, &self.dims, &mut self.rng);
    }

    /// Seconds since the last spawn
    pub fn since_last_spawn(&self) -> f64 {
        self.clock - self.last_spawn_at
    }

    /// Whether the game-over cooldown has elapsed
    pub fn can_resume(&self) -> bool {
        match self.game_over_at {
            Some(at) => self.clock - at >= self.tuning.game_over_cooldown_secs as f64,
            None => true,
        }
    }

    /// Begin a new session: score 0, no hostiles, spawn timer restarted
    pub fn start_session(&mut self) {
        self.score = 0;
        self.clear_hostiles();
        self.last_spawn_at = self.clock;
        self.session_started_at = self.clock;
        self.game_over_at = None;
        self.new_high_score = false;
        self.session_count += 1;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::SessionStarted);
        log::info!("Session {} started", self.session_count);
    }

    /// The player was caught from behind
    ///
    /// The score is kept for the game-over screen and reset on resume.
    pub fn game_over(&mut self) {
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        let duration = (self.clock - self.session_started_at) as f32;
        if let Some(rank) = self
            .highscores
            .add_score(self.score, self.session_count, duration)
        {
            log::debug!("Score {} ranked #{} this run", self.score, rank);
        }

        self.clear_hostiles();
        self.reset_player();
        self.game_over_at = Some(self.clock);
        self.new_high_score = new_high_score;
        self.phase = GamePhase::GameOver;

        self.events.push(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        });
        self.events.push(GameEvent::Sound(SoundEffect::GameOver));
        if new_high_score {
            self.events.push(GameEvent::Sound(SoundEffect::HighScore));
        }
        log::info!(
            "Game over: score {} (high score {}{})",
            self.score,
            self.high_score,
            if new_high_score { ", new best" } else { "" }
        );
    }

    /// Apply a new display size to the layout and every live character
    pub fn resize(&mut self, level_width: f32, level_height: f32) {
        self.dims.update(level_width, level_height);
        self.player.resize(&self.dims);
        for hostile in &mut self.hostiles {
            hostile.resize(&self.dims);
        }
        if self.player.is_out_of_bounds(&self.dims) {
            self.player.handle_out_of_bounds(&self.dims);
        }
        log::info!("Resized level to {}x{}", level_width, level_height);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

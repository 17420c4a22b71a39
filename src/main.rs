//! Cartoon Boxing headless runner
//!
//! Drives the simulation at a fixed timestep with an autopilot doing the
//! tapping, logging what a real host would draw and play. Useful for
//! balancing `tuning.json` without a renderer.
//!
//! Usage: `cartoon-boxing [seed] [seconds]`

use std::path::Path;

use serde::Serialize;

use cartoon_boxing::audio::AudioMixer;
use cartoon_boxing::consts::*;
use cartoon_boxing::frame::Frame;
use cartoon_boxing::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use cartoon_boxing::{HighScores, Settings, Tuning};

/// Hostiles closer than this (in character widths) make the autopilot turn
const AUTOPILOT_REACH: f32 = 1.5;

/// Host frame length (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    mixer: AudioMixer,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        Self {
            state: GameState::new(seed, tuning, DEFAULT_LEVEL_WIDTH, DEFAULT_LEVEL_HEIGHT),
            mixer: AudioMixer::from_settings(&settings),
            settings,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Decide whether to tap this frame
    fn autopilot(&mut self) {
        let state = &self.state;
        self.input.tap = match state.phase {
            GamePhase::Welcome => true,
            GamePhase::GameOver => state.can_resume(),
            GamePhase::Running => {
                let player = &state.player;
                let reach = player.width() * AUTOPILOT_REACH;
                state.hostiles.iter().any(|hostile| {
                    (hostile.x() - player.x()).abs() < reach && !hostile.in_front_of(player)
                })
            }
            GamePhase::Paused => false,
        };
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.tap = false;
            self.input.pause = false;
        }
    }

    /// Hand this frame's output to the "host": here, the log
    fn present(&mut self) {
        let events = self.state.drain_events();
        for request in self.mixer.requests_for(&events) {
            log::trace!("play {} at {:.2}", request.asset, request.volume);
        }
        for event in &events {
            if let GameEvent::GameOver { .. } = event {
                let frame = Frame::capture(&self.state, &self.settings);
                if let Some(overlay) = frame.overlay {
                    log::info!("{}", overlay.message().replace('\n', " | "));
                }
            }
        }
        let frame = Frame::capture(&self.state, &self.settings);
        log::trace!("{} sprites, hud {:?}", frame.sprites.len(), frame.hud.text);
    }
}

#[derive(Serialize)]
struct RunSummary<'a> {
    seed: u64,
    sessions: u32,
    high_score: u32,
    leaderboard: &'a HighScores,
}

fn load_tuning(path: &Path) -> Tuning {
    if !path.exists() {
        return Tuning::default();
    }
    match Tuning::load(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("{e}; using default tuning");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);

    let tuning = load_tuning(Path::new("tuning.json"));
    let settings_path = Path::new("settings.json");
    let settings = if settings_path.exists() {
        Settings::load_or_default(settings_path)
    } else {
        let settings = Settings::default();
        if let Err(e) = settings.save(settings_path) {
            log::warn!("{e}");
        }
        settings
    };

    log::info!("Cartoon Boxing (headless) seed {} for {}s", seed, seconds);

    let mut game = Game::new(seed, tuning, settings);
    log::info!("Level {}: {}", game.state.level.number(), game.state.level.name());
    let frames = (seconds / FRAME_DT).ceil() as u32;
    for _ in 0..frames {
        game.autopilot();
        game.update(FRAME_DT);
        game.present();
    }

    let summary = RunSummary {
        seed,
        sessions: game.state.session_count,
        high_score: game.state.high_score,
        leaderboard: &game.state.highscores,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to write summary: {e}"),
    }
}

//! Per-frame draw list for the host renderer
//!
//! The host turns a `Frame` into pixels: the level backdrop, sprites (in
//! order), then the HUD text, then the overlay on top.

use crate::consts::HUD_MARGIN;
use crate::settings::Settings;
use crate::sim::{Character, GamePhase, GameState, Level};

/// One character sprite to draw
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub asset: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Mirror horizontally
    pub flip_x: bool,
    /// Character is pressed against a wall (host may show an idle pose)
    pub at_rest: bool,
}

/// A block of text anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Level backdrop, drawn before any sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub asset: &'static str,
    pub clouds: bool,
}

impl From<Level> for Backdrop {
    fn from(level: Level) -> Self {
        Self {
            asset: level.background(),
            clouds: level.has_clouds(),
        }
    }
}

/// Message covering the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Welcome,
    Paused,
    GameOver { score: u32, new_high_score: bool },
}

impl Overlay {
    pub fn message(&self) -> String {
        match self {
            Overlay::Welcome => "Tap to start!\nFace the boxers coming at you.".to_string(),
            Overlay::Paused => "Paused".to_string(),
            Overlay::GameOver {
                score,
                new_high_score: true,
            } => format!("New high score: {}!\nTap to go again", score),
            Overlay::GameOver { score, .. } => format!("Knocked out!\nScore: {}\nTap to go again", score),
        }
    }
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub backdrop: Backdrop,
    pub sprites: Vec<SpriteDraw>,
    pub hud: TextDraw,
    pub overlay: Option<Overlay>,
}

impl Frame {
    /// Build the draw list for the current state
    pub fn capture(state: &GameState, settings: &Settings) -> Self {
        let sprites = state
            .characters()
            .map(|c| sprite_for(c, state))
            .collect();

        let mut text = format!("Score: {}", state.score);
        if settings.show_high_score {
            text.push_str(&format!("\nHigh Score: {}", state.high_score));
        }
        let hud = TextDraw {
            text,
            x: HUD_MARGIN,
            y: state.dims.level_height() - HUD_MARGIN,
        };

        let overlay = match state.phase {
            GamePhase::Welcome => Some(Overlay::Welcome),
            GamePhase::Paused => Some(Overlay::Paused),
            GamePhase::GameOver => Some(Overlay::GameOver {
                score: state.score,
                new_high_score: state.new_high_score,
            }),
            GamePhase::Running => None,
        };

        Self {
            backdrop: state.level.into(),
            sprites,
            hud,
            overlay,
        }
    }
}

fn sprite_for(character: &Character, state: &GameState) -> SpriteDraw {
    SpriteDraw {
        asset: character.archetype.asset(),
        x: character.pos.x,
        y: character.pos.y,
        width: character.width(),
        height: character.height(),
        flip_x: character.sprite_flipped(),
        at_rest: character.is_at_rest(&state.dims),
    }
}

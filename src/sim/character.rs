//! Characters: the player's boxer and the hostiles walking toward it

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::archetype::{CharacterArchetype, Facing};
use super::collision::Rect;
use super::dimensions::Dimensions;
use crate::consts::GROUND_Y;

/// Which side of the fight a character is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    /// Stays on screen (clamped at the edges), turns around on tap
    Player,
    /// Walks in from off screen, removed once it walks back out
    Hostile,
}

/// A positioned, sized, directioned character
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: u32,
    pub kind: CharacterKind,
    pub archetype: CharacterArchetype,
    pub facing: Facing,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Character {
    /// Create a character with a random facing, placed by its kind's spawn rule
    pub fn new<R: Rng>(
        id: u32,
        kind: CharacterKind,
        archetype: CharacterArchetype,
        dims: &Dimensions,
        rng: &mut R,
    ) -> Self {
        let mut character = Self {
            id,
            kind,
            archetype,
            facing: Facing::random(rng),
            pos: Vec2::new(0.0, GROUND_Y),
            size: Vec2::new(dims.character_width(), dims.character_height()),
        };
        character.pos.x = character.starting_x(dims);
        character
    }

    pub fn player<R: Rng>(id: u32, dims: &Dimensions, rng: &mut R) -> Self {
        Self::new(
            id,
            CharacterKind::Player,
            CharacterArchetype::PLAYER_DEFAULT,
            dims,
            rng,
        )
    }

    pub fn hostile<R: Rng>(
        id: u32,
        archetype: CharacterArchetype,
        dims: &Dimensions,
        rng: &mut R,
    ) -> Self {
        Self::new(id, CharacterKind::Hostile, archetype, dims, rng)
    }

    fn starting_x(&self, dims: &Dimensions) -> f32 {
        match self.kind {
            CharacterKind::Player => dims.middle_spawn_x(),
            CharacterKind::Hostile => match self.facing {
                Facing::Left => dims.offscreen_right_x(),
                Facing::Right => dims.offscreen_left_x(self.size.x),
            },
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == CharacterKind::Player
    }

    /// Walk in the facing direction
    pub fn update(&mut self, global_speed: f32, dt: f32) {
        self.pos.x += global_speed * self.archetype.speed() * dt * self.facing.sign();
    }

    /// Turn around (the sprite mirrors along with it)
    pub fn flip(&mut self) {
        self.facing = self.facing.opposite();
    }

    /// Whether the sprite must be drawn mirrored to match the facing
    pub fn sprite_flipped(&self) -> bool {
        self.facing != self.archetype.art_facing()
    }

    pub fn is_out_of_bounds(&self, dims: &Dimensions) -> bool {
        let x = self.pos.x;
        match self.kind {
            CharacterKind::Player => x < 0.0 || x > dims.level_width() - self.size.x,
            CharacterKind::Hostile => x < -self.size.x || x > dims.level_width(),
        }
    }

    /// Deal with being out of bounds; `false` means the caller should remove it
    pub fn handle_out_of_bounds(&mut self, dims: &Dimensions) -> bool {
        match self.kind {
            CharacterKind::Player => {
                let max_x = (dims.level_width() - self.size.x).max(0.0);
                self.pos.x = self.pos.x.clamp(0.0, max_x);
                true
            }
            CharacterKind::Hostile => false,
        }
    }

    /// Pressed against the edge it is facing, so it isn't actually moving
    pub fn is_at_rest(&self, dims: &Dimensions) -> bool {
        match self.kind {
            CharacterKind::Player => match self.facing {
                Facing::Left => self.pos.x <= 0.0,
                Facing::Right => self.pos.x >= dims.level_width() - self.size.x,
            },
            CharacterKind::Hostile => false,
        }
    }

    /// `self` stands on the side `other` is facing
    pub fn in_front_of(&self, other: &Character) -> bool {
        (other.pos.x > self.pos.x && other.facing == Facing::Left)
            || (other.pos.x < self.pos.x && other.facing == Facing::Right)
    }

    /// Adopt a new default size after the display changed
    pub fn resize(&mut self, dims: &Dimensions) {
        self.size = Vec2::new(dims.character_width(), dims.character_height());
    }
}

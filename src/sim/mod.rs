//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes only from the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (player first, hostiles in spawn order)
//! - No rendering or platform dependencies

pub mod archetype;
pub mod character;
pub mod collision;
pub mod dimensions;
pub mod level;
pub mod state;
pub mod tick;

pub use archetype::{CharacterArchetype, Facing};
pub use character::{Character, CharacterKind};
pub use collision::{Contact, Rect, resolve_contact};
pub use dimensions::Dimensions;
pub use level::Level;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};

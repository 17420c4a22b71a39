//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically.

use super::collision::{Contact, resolve_contact};
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Screen was tapped this frame (start, resume, or turn around)
    pub tap: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one timestep
///
/// While running, every tick performs in order: spawn check, hit check,
/// tap handling, out-of-bounds cleanup, movement.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::Welcome => {
            if input.tap {
                state.start_session();
            }
            return;
        }
        GamePhase::GameOver => {
            // The clock keeps running so the resume cooldown can elapse
            state.clock += dt as f64;
            if input.tap && state.can_resume() {
                state.start_session();
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.clock += dt as f64;

    spawn_if_due(state);

    if check_for_hits(state) {
        return;
    }

    if input.tap {
        state.player.flip();
    }

    remove_out_of_bounds(state);

    let speed = state.tuning.global_speed_px;
    state.player.update(speed, dt);
    for hostile in &mut state.hostiles {
        hostile.update(speed, dt);
    }
}

fn spawn_if_due(state: &mut GameState) {
    let interval = state.tuning.spawn_interval(state.score) as f64;
    if state.since_last_spawn() > interval {
        state.spawn_hostile();
    }
}

/// Resolve every hostile touching the player; returns true on game over
fn check_for_hits(state: &mut GameState) -> bool {
    let mut dodged = Vec::new();
    let mut caught = false;
    for hostile in &state.hostiles {
        match resolve_contact(hostile, &state.player) {
            Some(Contact::Dodge) => dodged.push(hostile.id),
            Some(Contact::Hit) => {
                caught = true;
                break;
            }
            None => {}
        }
    }

    for id in dodged {
        if state.remove_hostile(id) {
            state.score += 1;
            let sound = SoundEffect::random_punch(state.rng());
            state.events.push(GameEvent::HostileDodged { id });
            state.events.push(GameEvent::Sound(sound));
            log::debug!("Knocked out #{}, score {}", id, state.score);
        }
    }

    if caught {
        state.game_over();
    }
    caught
}

fn remove_out_of_bounds(state: &mut GameState) {
    let dims = state.dims;
    if state.player.is_out_of_bounds(&dims) {
        state.player.handle_out_of_bounds(&dims);
    }
    state.hostiles.retain_mut(|hostile| {
        if !hostile.is_out_of_bounds(&dims) || hostile.handle_out_of_bounds(&dims) {
            return true;
        }
        log::debug!("#{} walked off the level", hostile.id);
        false
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{CharacterArchetype, Facing};
    use crate::tuning::Tuning;

    fn running_state() -> GameState {
        let mut state = GameState::new(12345, Tuning::default(), 1000.0, 1600.0);
        tick(&mut state, &TickInput { tap: true, ..Default::default() }, SIM_DT);
        state
    }

    /// Hostile overlapping a player at x=500; `facing_hostile` picks dodge vs hit
    fn stage_contact(state: &mut GameState, facing_hostile: bool) -> u32 {
        let id = state.spawn_hostile_of(CharacterArchetype::Slow);
        state.player.pos.x = 500.0;
        state.player.facing = if facing_hostile { Facing::Left } else { Facing::Right };
        let hostile = state.hostiles.iter_mut().find(|h| h.id == id).unwrap();
        hostile.pos.x = 420.0;
        hostile.facing = Facing::Right;
        id
    }

    #[test]
    fn test_tap_starts_session() {
        let mut state = GameState::new(1, Tuning::default(), 1000.0, 1600.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Welcome);

        let facing = state.player.facing;
        tick(&mut state, &TickInput { tap: true, ..Default::default() }, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.facing, facing);
        assert_eq!(state.score, 0);
        assert_eq!(state.characters().count(), 1);
        assert!(state.drain_events().contains(&GameEvent::SessionStarted));
    }

    #[test]
    fn test_dodge_scores_and_removes_hostile() {
        let mut state = running_state();
        let id = stage_contact(&mut state, true);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.score, 1);
        assert!(state.hostiles.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::HostileDodged { id }));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Sound(s) if s.is_punch())));
    }

    #[test]
    fn test_caught_from_behind_is_game_over() {
        let mut state = running_state();
        state.high_score = 2;
        state.score = 4;
        stage_contact(&mut state, false);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 4);
        assert!(state.hostiles.is_empty());
        assert_eq!(state.player.x(), state.dims.middle_spawn_x());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Sound(SoundEffect::GameOver)));
        assert!(events.contains(&GameEvent::Sound(SoundEffect::HighScore)));
    }

    #[test]
    fn test_dodge_before_hit_counts_toward_final_score() {
        let mut state = running_state();
        state.high_score = 2;
        state.score = 4;
        let front = stage_contact(&mut state, true);
        let back = state.spawn_hostile_of(CharacterArchetype::Slow);
        let hostile = state.hostiles.iter_mut().find(|h| h.id == back).unwrap();
        hostile.pos.x = 580.0;
        hostile.facing = Facing::Left;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 5);
        assert_eq!(state.high_score, 5);
        assert!(state.new_high_score);
        assert!(state.hostiles.is_empty());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::HostileDodged { id: front }));
        assert!(!events.contains(&GameEvent::HostileDodged { id: back }));
        assert!(events.contains(&GameEvent::GameOver {
            score: 5,
            high_score: 5,
            new_high_score: true
        }));
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut state = running_state();
        state.high_score = 10;
        state.score = 3;
        stage_contact(&mut state, false);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 10);
    }

    #[test]
    fn test_resume_waits_for_cooldown() {
        let mut state = running_state();
        state.score = 3;
        stage_contact(&mut state, false);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        let tap = TickInput { tap: true, ..Default::default() };
        tick(&mut state, &tap, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 3);

        for _ in 0..130 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        tick(&mut state, &tap, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_tap_flips_player() {
        let mut state = running_state();
        let before = state.player.facing;
        tick(&mut state, &TickInput { tap: true, ..Default::default() }, SIM_DT);
        assert_eq!(state.player.facing, before.opposite());
    }

    #[test]
    fn test_player_clamped_during_tick() {
        let mut state = running_state();
        state.player.pos.x = -5.0;
        state.player.facing = Facing::Right;

        tick(&mut state, &TickInput::default(), SIM_DT);

        let step = state.tuning.global_speed_px * state.player.archetype.speed() * SIM_DT;
        assert!((state.player.x() - step).abs() < 1e-3);
        assert!(state.player.is_player());
    }

    #[test]
    fn test_hostile_removed_after_leaving() {
        let mut state = running_state();
        let id = state.spawn_hostile_of(CharacterArchetype::VerySlow);
        let hostile = state.hostiles.iter_mut().find(|h| h.id == id).unwrap();
        hostile.pos.x = 2000.0;
        state.player.pos.x = 0.0;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_tick_pause() {
        let mut state = running_state();
        let pause = TickInput { pause: true, ..Default::default() };

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let clock = state.clock;
        let x = state.player.x();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.clock, clock);
        assert_eq!(state.player.x(), x);

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_start_spawn_dodge_end_to_end() {
        let mut state = running_state();
        assert_eq!(state.score, 0);
        assert_eq!(state.characters().count(), 1);

        let mut ticks = 0;
        while state.hostiles.is_empty() && ticks < 240 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            ticks += 1;
        }
        assert_eq!(state.hostiles.len(), 1);
        assert!(ticks >= 119, "spawned too early: {ticks}");

        // Walk the player into the hostile's path, facing it
        state.player.pos.x = 500.0;
        state.player.facing = Facing::Left;
        let hostile = &mut state.hostiles[0];
        hostile.pos.x = 420.0;
        hostile.facing = Facing::Right;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 1);
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default(), 1000.0, 1600.0);
        let mut state2 = GameState::new(99999, Tuning::default(), 1000.0, 1600.0);

        for i in 0..600 {
            let input = TickInput {
                tap: i % 37 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.hostiles, state2.hostiles);
    }
}

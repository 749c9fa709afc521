//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame: input, physics, spawning,
//! collisions, scoring, and the phase machine.

use super::collision;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin play from the title phase
    pub start: bool,
    /// Impulse the bird upward
    pub flap: bool,
    /// Tear down the finished run and begin a new one
    pub restart: bool,
}

/// Advance the session by one frame.
///
/// Outside `Running` only input is handled: `NotStarted` waits for `start`,
/// `Over` waits for `restart`. A restart reconstructs the session and drops
/// straight into `Running` without revisiting the title phase.
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                state.phase = GamePhase::Running;
            }
            return;
        }
        GamePhase::Over => {
            if input.restart {
                state.reset();
                state.phase = GamePhase::Running;
            }
            return;
        }
        GamePhase::Running => {}
    }

    if input.flap {
        state.bird.flap(&state.tuning);
    }

    state.clock.advance();
    let now = state.clock.now();

    state.bird.tick(&state.tuning);

    state.pipes.maybe_spawn(now, &mut state.rng, &state.tuning);
    state.pipes.tick_all(&state.tuning);

    let hitbox = state.bird.hitbox();
    let gap = state.tuning.gap_height;
    if state
        .pipes
        .iter()
        .any(|pipe| collision::bird_hits_pipe(&hitbox, pipe, gap))
    {
        state.bird.alive = false;
    }

    // Pass-scoring still applies on the tick the bird dies
    state.score += state.pipes.score_delta(state.bird.x);

    if !state.bird.alive {
        state.high_score = state.high_score.max(state.score);
        state.phase = GamePhase::Over;
    }
}

//! Game state and core simulation types
//!
//! The bird, the pipe field, and the session that owns them. Everything a
//! frame mutates lives here; orchestration is in [`super::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::FrameClock;
use super::collision;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input; nothing moves yet
    NotStarted,
    /// Active play
    Running,
    /// The bird is down; waiting for restart
    Over,
}

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Horizontal position, fixed for the bird's whole life
    pub x: f32,
    /// Top edge of the hitbox
    pub y: f32,
    /// Vertical velocity, positive = falling
    pub velocity: f32,
    pub alive: bool,
    /// Ticks remaining on the wing-up pose
    pub flap_anim: u8,
    /// Wing raised, for presentation only
    pub wing_up: bool,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            alive: true,
            flap_anim: 0,
            wing_up: false,
        }
    }

    /// Hard-reset velocity to the flap impulse. Not additive: flapping at
    /// terminal fall speed and flapping while rising give the same result.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.velocity = tuning.flap_velocity;
        self.wing_up = true;
        self.flap_anim = FLAP_ANIM_TICKS;
    }

    /// One tick of physics: gravity, integration, wing-pose decay, and the
    /// ground/ceiling kill check. Velocity itself is never clamped.
    pub fn tick(&mut self, tuning: &Tuning) {
        self.velocity += tuning.gravity;
        self.y += self.velocity;

        if self.flap_anim > 0 {
            self.flap_anim -= 1;
        } else {
            self.wing_up = false;
        }

        let hitbox = self.hitbox();
        if collision::hits_ground(&hitbox) || collision::hits_ceiling(&hitbox) {
            self.alive = false;
        }
    }

    /// Collision rectangle, smaller than the drawn sprite
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, BIRD_HITBOX_W, BIRD_HITBOX_H)
    }

    /// Tilt angle for presentation, degrees. Positive = nose up. Derived
    /// from velocity and clamped; the velocity itself is not.
    pub fn rotation_deg(&self) -> f32 {
        (-self.velocity * 2.0).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// One pipe pair: a solid column with a passable gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge, decreasing every tick
    pub x: f32,
    /// Vertical center of the gap, fixed at spawn
    pub gap_center: i32,
    /// One-way flag: set the tick the bird clears the trailing edge
    pub passed: bool,
}

impl Pipe {
    /// Spawn just past the right edge with a uniformly random gap center.
    /// The margins keep both collision regions non-negative for any valid
    /// gap height.
    pub fn new(rng: &mut impl Rng) -> Self {
        let gap_center = rng.random_range(GAP_MARGIN..=(GROUND_Y as i32 - GAP_MARGIN));
        Self {
            x: PLAYFIELD_WIDTH,
            gap_center,
            passed: false,
        }
    }

    /// Advance leftward
    pub fn tick(&mut self, tuning: &Tuning) {
        self.x -= tuning.pipe_speed;
    }

    /// Collision region above the gap, from the playfield top
    pub fn upper_region(&self, gap_height: f32) -> Rect {
        let h = self.gap_center as f32 - gap_height / 2.0;
        Rect::new(self.x, 0.0, PIPE_WIDTH, h)
    }

    /// Collision region below the gap, down to the ground line
    pub fn lower_region(&self, gap_height: f32) -> Rect {
        let top = self.gap_center as f32 + gap_height / 2.0;
        Rect::new(self.x, top, PIPE_WIDTH, GROUND_Y - top)
    }

    /// Right edge of the pipe body
    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Fully off the left edge and safe to recycle
    pub fn is_offscreen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}

/// The ordered set of live pipes. Spawn order is left-to-right screen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipeField {
    pub pipes: Vec<Pipe>,
    last_spawn: u64,
}

impl PipeField {
    pub fn new() -> Self {
        Self {
            pipes: Vec::new(),
            last_spawn: 0,
        }
    }

    /// Spawn a pipe if the interval since the previous spawn has elapsed.
    /// The interval is measured from the last spawn tick, not a fixed
    /// schedule, so cadence drifts with any dropped frames.
    pub fn maybe_spawn(&mut self, now: u64, rng: &mut impl Rng, tuning: &Tuning) -> bool {
        if now - self.last_spawn > tuning.spawn_interval_ticks {
            self.pipes.push(Pipe::new(rng));
            self.last_spawn = now;
            true
        } else {
            false
        }
    }

    /// Advance every pipe, then drop the ones fully off the left edge
    pub fn tick_all(&mut self, tuning: &Tuning) {
        for pipe in &mut self.pipes {
            pipe.tick(tuning);
        }
        self.pipes.retain(|p| !p.is_offscreen());
    }

    /// Count pipes newly cleared this tick, marking each exactly once
    pub fn score_delta(&mut self, bird_x: f32) -> u32 {
        let mut newly_passed = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.trailing_edge() < bird_x {
                pipe.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this session's pipe sequence derives from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score seen this process run; the only field a reset keeps
    pub high_score: u32,
    pub clock: FrameClock,
    pub bird: Bird,
    pub pipes: PipeField,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session. Panics if the tuning cannot be played.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        tuning.validate();
        Self {
            seed,
            phase: GamePhase::NotStarted,
            score: 0,
            high_score: 0,
            clock: FrameClock::new(),
            bird: Bird::new(),
            pipes: PipeField::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full reconstruction: every entity is discarded and recreated; only
    /// the best score carries forward. The next session's seed is drawn from
    /// the outgoing RNG stream so restarts vary but the whole run-of-runs
    /// stays reproducible from the initial seed.
    pub fn reset(&mut self) {
        let best = self.high_score.max(self.score);
        let next_seed: u64 = self.rng.random();
        let tuning = self.tuning.clone();
        *self = Self::new(next_seed, tuning);
        self.high_score = best;
    }

    /// Read-only view of everything presentation needs this frame
    pub fn snapshot(&self) -> Snapshot {
        let gap = self.tuning.gap_height;
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            bird: BirdView {
                pos: Vec2::new(self.bird.x, self.bird.y),
                rotation_deg: self.bird.rotation_deg(),
                wing_up: self.bird.wing_up,
                alive: self.bird.alive,
            },
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeView {
                    upper: p.upper_region(gap),
                    lower: p.lower_region(gap),
                })
                .collect(),
        }
    }
}

/// Presentation view of the bird
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BirdView {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Tilt hint, degrees, positive = nose up
    pub rotation_deg: f32,
    pub wing_up: bool,
    pub alive: bool,
}

/// Presentation view of one pipe pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipeView {
    pub upper: Rect,
    pub lower: Rect,
}

/// Per-frame state handed to presentation, pure data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
}

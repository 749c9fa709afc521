//! Gap Glider - a side-scrolling flap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, game state)
//! - `tuning`: Gameplay balance values with JSON overrides
//! - `highscores`: In-memory leaderboard for the current process run
//! - `ui`: Terminal presentation of simulation snapshots

pub mod highscores;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second). Gameplay values in
    /// [`crate::tuning::Tuning`] are per-tick and assume this rate is hit.
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions (logical pixels, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Height of the ground strip at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// The ground line the bird dies on
    pub const GROUND_Y: f32 = PLAYFIELD_HEIGHT - GROUND_HEIGHT;

    /// Pipe body width
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Minimum distance from a pipe's gap center to the playfield top and
    /// to the ground line
    pub const GAP_MARGIN: i32 = 150;

    /// Bird defaults - x never changes after creation
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_START_Y: f32 = PLAYFIELD_HEIGHT / 2.0;

    /// Collision hitbox, slightly smaller than the 40x30 sprite so near
    /// misses feel fair
    pub const BIRD_HITBOX_W: f32 = 34.0;
    pub const BIRD_HITBOX_H: f32 = 24.0;

    /// Ticks the wing stays raised after a flap
    pub const FLAP_ANIM_TICKS: u8 = 5;
    /// Clamp for the velocity-derived tilt angle (degrees)
    pub const MAX_TILT_DEG: f32 = 30.0;
}

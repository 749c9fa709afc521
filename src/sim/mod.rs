//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{bird_hits_pipe, hits_ceiling, hits_ground};
pub use rect::Rect;
pub use state::{Bird, BirdView, GamePhase, GameState, Pipe, PipeField, PipeView, Snapshot};
pub use tick::{TickInput, tick};

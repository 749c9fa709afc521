//! Collision checks between the bird's hitbox and the world
//!
//! All checks are axis-aligned rectangle tests; the pipe's two regions and
//! the ground/ceiling lines are the only things that can kill the bird.

use super::rect::Rect;
use super::state::Pipe;
use crate::consts::GROUND_Y;

/// True if the hitbox overlaps either of the pipe's collision regions
pub fn bird_hits_pipe(hitbox: &Rect, pipe: &Pipe, gap_height: f32) -> bool {
    hitbox.intersects(&pipe.upper_region(gap_height))
        || hitbox.intersects(&pipe.lower_region(gap_height))
}

/// True once the hitbox bottom reaches the ground line
pub fn hits_ground(hitbox: &Rect) -> bool {
    hitbox.bottom() >= GROUND_Y
}

/// True once the hitbox top reaches the playfield ceiling
pub fn hits_ceiling(hitbox: &Rect) -> bool {
    hitbox.top() <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    fn pipe_at(x: f32, gap_center: i32) -> Pipe {
        Pipe {
            x,
            gap_center,
            passed: false,
        }
    }

    #[test]
    fn test_hitbox_in_upper_region_collides() {
        let gap = Tuning::default().gap_height;
        let pipe = pipe_at(BIRD_X, 300);
        // Gap spans 225..375; a hitbox near the top is inside the upper region
        let hitbox = Rect::new(BIRD_X, 50.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(bird_hits_pipe(&hitbox, &pipe, gap));
    }

    #[test]
    fn test_hitbox_in_lower_region_collides() {
        let gap = Tuning::default().gap_height;
        let pipe = pipe_at(BIRD_X, 300);
        let hitbox = Rect::new(BIRD_X, 400.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(bird_hits_pipe(&hitbox, &pipe, gap));
    }

    #[test]
    fn test_hitbox_inside_gap_is_safe() {
        let gap = Tuning::default().gap_height;
        let pipe = pipe_at(BIRD_X, 300);
        // Fully inside 225..375
        let hitbox = Rect::new(BIRD_X, 290.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(!bird_hits_pipe(&hitbox, &pipe, gap));
    }

    #[test]
    fn test_no_collision_before_pipe_arrives() {
        let gap = Tuning::default().gap_height;
        let pipe = pipe_at(PLAYFIELD_WIDTH, 300);
        let hitbox = Rect::new(BIRD_X, 50.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(!bird_hits_pipe(&hitbox, &pipe, gap));
    }

    #[test]
    fn test_ground_and_ceiling_lines() {
        let on_ground = Rect::new(BIRD_X, GROUND_Y - BIRD_HITBOX_H, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(hits_ground(&on_ground));

        let above_ground =
            Rect::new(BIRD_X, GROUND_Y - BIRD_HITBOX_H - 1.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(!hits_ground(&above_ground));

        let at_ceiling = Rect::new(BIRD_X, 0.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(hits_ceiling(&at_ceiling));

        let below_ceiling = Rect::new(BIRD_X, 1.0, BIRD_HITBOX_W, BIRD_HITBOX_H);
        assert!(!hits_ceiling(&below_ceiling));
    }
}

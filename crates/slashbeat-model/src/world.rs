//! World-space layout of the note highway.
//!
//! Notes travel along +Z from the spawn plane towards the player plane.
//! Depth is always derived from the song clock, never integrated.

use glam::Vec3;

use crate::note::{Lane, Layer};

pub const SPAWN_Z: f32 = -30.0;
pub const PLAYER_Z: f32 = 0.0;
pub const MISS_Z: f32 = 5.0;
/// World units per second.
pub const NOTE_SPEED: f32 = 10.0;

pub const LANE_WIDTH: f32 = 0.8;
pub const NOTE_SIZE: f32 = 0.5;

pub const LANE_X: [f32; 4] = [-1.2, -0.4, 0.4, 1.2];
pub const LAYER_Y: [f32; 3] = [0.8, 1.6, 2.4];

pub const HIT_RADIUS: f32 = 1.2;
/// Hit window extends this far before the player plane (towards spawn).
pub const HIT_WINDOW_BEFORE: f32 = 2.0;
/// Hit window extends this far past the player plane.
pub const HIT_WINDOW_AFTER: f32 = 1.5;

/// Seconds between a note spawning and reaching the player plane.
pub fn spawn_lead_time() -> f64 {
    ((SPAWN_Z - PLAYER_Z).abs() / NOTE_SPEED) as f64
}

/// Depth of a note scheduled at `note_time` when the clock reads `now`.
pub fn note_depth(note_time: f64, now: f64) -> f32 {
    PLAYER_Z - ((note_time - now) as f32) * NOTE_SPEED
}

pub fn note_position(lane: Lane, layer: Layer, depth: f32) -> Vec3 {
    Vec3::new(LANE_X[lane.index()], LAYER_Y[layer.index()], depth)
}

/// Whether `depth` lies inside the open hit window around the player plane.
pub fn in_hit_window(depth: f32) -> bool {
    depth > PLAYER_Z - HIT_WINDOW_BEFORE && depth < PLAYER_Z + HIT_WINDOW_AFTER
}

//! Blade Waves - A top-down wave survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, enemies, coins, collisions, waves)
//! - `screens`: Menu / play / death screen state machine
//! - `ui`: Buttons and HUD
//! - `render`: Canvas abstraction the host rasterizes
//! - `assets`: Sprite sheet loading with placeholder fallback
//! - `config`: Data-driven game balance

pub mod assets;
pub mod config;
pub mod debug;
pub mod error;
pub mod game;
pub mod highscores;
pub mod render;
pub mod screens;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;
pub use highscores::HighScores;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 960.0;

    /// Side of the square footprint shared by the player and enemies
    pub const ENTITY_SIZE: f32 = 20.0;

    /// Largest x/y an entity's top-left corner may occupy
    pub const MAX_X: f32 = ARENA_WIDTH - ENTITY_SIZE;
    pub const MAX_Y: f32 = ARENA_HEIGHT - ENTITY_SIZE;

    /// Player spawn point
    pub const PLAYER_START_X: f32 = 640.0;
    pub const PLAYER_START_Y: f32 = 480.0;
}

/// Clamp `value` into `[min, max]`
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = clamp(t, 0.0, 1.0);
    a + (b - a) * t
}

/// Angle (radians) of the vector from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Clamp a top-left position so a 20x20 footprint stays inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2) -> Vec2 {
    Vec2::new(
        clamp(pos.x, 0.0, consts::MAX_X),
        clamp(pos.y, 0.0, consts::MAX_Y),
    )
}

/// Convert a millisecond duration into whole simulation ticks (rounded).
/// Any non-zero duration lasts at least one tick.
#[inline]
pub fn ms_to_ticks(ms: u32) -> u32 {
    if ms == 0 {
        return 0;
    }
    let ticks = (u64::from(ms) * u64::from(consts::TICKS_PER_SECOND) + 500) / 1000;
    ticks.clamp(1, u64::from(u32::MAX)) as u32
}

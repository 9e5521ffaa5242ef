//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Timers are per-tick countdowns, never threads
//! - No platform dependencies (drawing goes through `render::Canvas`)

pub mod autopilot;
pub mod coin;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timer;

pub use autopilot::autopilot;
pub use coin::Coin;
pub use collision::{Contact, attack_hits_enemy, player_enemy_contact, player_touches_coin};
pub use enemy::{Edge, Enemy};
pub use player::{Player, PlayerTuning};
pub use rect::Rect;
pub use state::{PlaySnapshot, PlayState};
pub use tick::{TickInput, TickOutcome, spawn_wave, tick};
pub use timer::Countdown;

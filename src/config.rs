//! Game balance and tuning
//!
//! Every gameplay number lives here so runs can be rebalanced from a JSON file
//! without recompiling. Durations are stored in milliseconds and converted to
//! ticks at the point of use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::GameError;
use crate::ms_to_ticks;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Base RNG seed; each new run adds its run index
    pub seed: u64,

    // === Player ===
    pub player_max_health: u32,
    /// Units per tick
    pub player_speed: f32,
    /// Units per tick while dashing
    pub dash_speed: f32,
    pub max_dashes: u32,
    pub dash_duration_ms: u32,
    pub dash_recharge_ms: u32,
    pub attack_duration_ms: u32,
    pub attack_cooldown_ms: u32,
    /// Blade length in sprite pixels
    pub sword_length: f32,
    /// Blade thickness in sprite pixels
    pub sword_width: f32,

    // === Enemies ===
    /// Units per tick
    pub enemy_speed: f32,
    /// Center-to-center distance that counts as contact
    pub contact_distance: f32,
    pub contact_damage: u32,
    /// Knockback applied to the player on a non-lethal hit
    pub knockback_distance: f32,

    // === Coins ===
    pub coin_size: f32,
    pub coin_cap: usize,
    pub initial_coins: usize,
    pub coin_respawn_ms: u32,
    /// Probability (0-1) that a kill drops a coin
    pub bonus_coin_chance: f64,

    // === Scoring / waves ===
    pub kill_score: u64,
    pub coin_score: u64,
    pub wave_heal: u32,
    pub wave_pause_ms: u32,

    // === Assets ===
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_b1ad,

            player_max_health: 100,
            player_speed: 2.0,
            dash_speed: 5.0,
            max_dashes: 2,
            dash_duration_ms: 200,
            dash_recharge_ms: 5000,
            attack_duration_ms: 300,
            attack_cooldown_ms: 500,
            sword_length: 32.0,
            sword_width: 8.0,

            enemy_speed: 3.0,
            contact_distance: 20.0,
            contact_damage: 25,
            knockback_distance: 50.0,

            coin_size: 16.0,
            coin_cap: 10,
            initial_coins: 3,
            coin_respawn_ms: 2000,
            bonus_coin_chance: 0.25,

            kill_score: 100,
            coin_score: 50,
            wave_heal: 10,
            wave_pause_ms: 500,

            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    /// Load a config file. Missing keys take their default value.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::info!("Using default config ({})", e);
                Self::default()
            }
        }
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_max_health == 0 {
            return Err(GameError::Config("player_max_health must be > 0".into()));
        }
        if self.contact_damage == 0 {
            return Err(GameError::Config("contact_damage must be > 0".into()));
        }
        if self.initial_coins > self.coin_cap {
            return Err(GameError::Config(format!(
                "initial_coins ({}) exceeds coin_cap ({})",
                self.initial_coins, self.coin_cap
            )));
        }
        if !(0.0..=1.0).contains(&self.bonus_coin_chance) {
            return Err(GameError::Config(
                "bonus_coin_chance must be within [0, 1]".into(),
            ));
        }

        // Coins are placed fully inside the arena
        let max_coin = ARENA_WIDTH.min(ARENA_HEIGHT);
        if !(self.coin_size > 0.0 && self.coin_size <= max_coin) {
            return Err(GameError::Config(format!(
                "coin_size must be within (0, {}], got {}",
                max_coin, self.coin_size
            )));
        }

        for (name, value) in [
            ("player_speed", self.player_speed),
            ("dash_speed", self.dash_speed),
            ("enemy_speed", self.enemy_speed),
            ("contact_distance", self.contact_distance),
            ("knockback_distance", self.knockback_distance),
            ("sword_length", self.sword_length),
            ("sword_width", self.sword_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::Config(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }

        // These timers must actually run; cooldown and wave pause may be zero
        for (name, ms) in [
            ("dash_duration_ms", self.dash_duration_ms),
            ("dash_recharge_ms", self.dash_recharge_ms),
            ("attack_duration_ms", self.attack_duration_ms),
            ("coin_respawn_ms", self.coin_respawn_ms),
        ] {
            if ms_to_ticks(ms) == 0 {
                return Err(GameError::Config(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }

    pub fn dash_duration_ticks(&self) -> u32 {
        ms_to_ticks(self.dash_duration_ms)
    }

    pub fn dash_recharge_ticks(&self) -> u32 {
        ms_to_ticks(self.dash_recharge_ms)
    }

    pub fn attack_duration_ticks(&self) -> u32 {
        ms_to_ticks(self.attack_duration_ms)
    }

    pub fn attack_cooldown_ticks(&self) -> u32 {
        ms_to_ticks(self.attack_cooldown_ms)
    }

    pub fn coin_respawn_ticks(&self) -> u32 {
        ms_to_ticks(self.coin_respawn_ms)
    }

    pub fn wave_pause_ticks(&self) -> u32 {
        ms_to_ticks(self.wave_pause_ms)
    }
}

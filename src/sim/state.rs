//! Play-session state
//!
//! Everything the play screen simulates lives here and is mutated only by
//! `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::coin::Coin;
use super::enemy::Enemy;
use super::player::{Player, PlayerTuning};
use super::rect::Rect;
use super::timer::Countdown;
use crate::assets::SpriteSet;
use crate::config::GameConfig;
use crate::render::Canvas;

/// Complete play-session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct PlayState {
    /// Seed this session was started with
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current wave (1-based); wave N spawns N enemies
    pub wave: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    /// Delayed coin respawns queued by pickups
    pub pending_coins: Vec<Countdown>,
    /// Non-blocking pause between waves
    pub wave_transition: Countdown,
    pub config: GameConfig,
}

impl PlayState {
    /// Start a new session: fresh player, one enemy, seed batch of coins
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            wave: 1,
            score: 0,
            time_ticks: 0,
            player: Player::spawn(PlayerTuning::from(config)),
            enemies: Vec::new(),
            coins: Vec::new(),
            pending_coins: Vec::new(),
            wave_transition: Countdown::default(),
            config: config.clone(),
        };
        state.populate();
        state
    }

    /// Reset in place for a new run, keeping allocations
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.wave = 1;
        self.score = 0;
        self.time_ticks = 0;
        self.player = Player::spawn(PlayerTuning::from(&self.config));
        self.enemies.clear();
        self.coins.clear();
        self.pending_coins.clear();
        self.wave_transition = Countdown::default();
        self.populate();
    }

    fn populate(&mut self) {
        for _ in 0..self.wave {
            let enemy = Enemy::random_edge(&mut self.rng, self.config.enemy_speed);
            self.enemies.push(enemy);
        }
        for _ in 0..self.config.initial_coins {
            self.spawn_coin();
        }
    }

    /// Coins on the field plus coins waiting to respawn
    pub fn coin_population(&self) -> usize {
        self.coins.len() + self.pending_coins.len()
    }

    /// Spawn a coin at a random spot if under the cap. Returns true if spawned.
    pub fn spawn_coin(&mut self) -> bool {
        if self.coin_population() >= self.config.coin_cap {
            return false;
        }
        let coin = Coin::random(&mut self.rng, self.config.coin_size);
        self.coins.push(coin);
        true
    }

    /// Queue a delayed respawn if under the cap. Returns true if queued.
    pub fn schedule_coin_respawn(&mut self) -> bool {
        if self.coin_population() >= self.config.coin_cap {
            return false;
        }
        self.pending_coins
            .push(Countdown::new(self.config.coin_respawn_ticks()));
        true
    }

    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    pub fn in_wave_transition(&self) -> bool {
        self.wave_transition.is_running()
    }

    /// Hitboxes for the debug overlay: player, live enemies, coins, attack area
    pub fn hitboxes(&self) -> Vec<Rect> {
        let mut boxes = Vec::with_capacity(2 + self.enemies.len() + self.coins.len());
        boxes.push(self.player.hitbox());
        boxes.extend(self.enemies.iter().filter(|e| e.alive).map(Enemy::hitbox));
        boxes.extend(self.coins.iter().map(Coin::hitbox));
        boxes.extend(self.player.attack_area());
        boxes
    }

    /// Panics (debug builds) if a simulation invariant was broken
    pub fn check_invariants(&self) {
        debug_assert!(self.player.health <= self.player.max_health);
        debug_assert!(self.player.dash.charges <= self.player.max_dashes());
        debug_assert!(self.coins.len() <= self.config.coin_cap);
        debug_assert!(self.wave >= 1);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        for coin in &self.coins {
            coin.draw(canvas, sprites);
        }
        self.player.draw(canvas, sprites);
        for enemy in &self.enemies {
            enemy.draw(canvas);
        }
    }

    /// Serializable view for logging and debugging
    pub fn snapshot(&self) -> PlaySnapshot {
        PlaySnapshot {
            seed: self.seed,
            wave: self.wave,
            score: self.score,
            time_ticks: self.time_ticks,
            health: self.player.health,
            dash_charges: self.player.dash.charges,
            player_pos: self.player.pos,
            enemies: self.enemies.iter().filter(|e| e.alive).map(|e| e.pos).collect(),
            coins: self.coins.iter().map(|c| c.pos).collect(),
            pending_coins: self.pending_coins.len(),
        }
    }
}

/// Compact, serializable summary of a `PlayState`
#[derive(Debug, Clone, Serialize)]
pub struct PlaySnapshot {
    pub seed: u64,
    pub wave: u32,
    pub score: u64,
    pub time_ticks: u64,
    pub health: u32,
    pub dash_charges: u32,
    pub player_pos: Vec2,
    pub enemies: Vec<Vec2>,
    pub coins: Vec<Vec2>,
    pub pending_coins: usize,
}

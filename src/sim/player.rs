//! The player character
//!
//! Movement, dash, sword combat and animation bookkeeping. All timed effects
//! are `Countdown`s advanced once per `update`.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use super::timer::{Countdown, tick_all};
use crate::assets::SpriteSet;
use crate::clamp_to_arena;
use crate::config::GameConfig;
use crate::consts::*;
use crate::render::{Canvas, SpriteDraw, SpriteId};

/// Frames per animation row
pub const FRAMES_PER_STATE: u32 = 4;
/// Sprites are authored at 32px and drawn at 3x
pub const SPRITE_SCALE: f32 = 3.0;
/// Ticks between animation frame advances
const ANIM_CADENCE: u32 = 10;
/// Slower cadence for the death fall
const DEATH_ANIM_CADENCE: u32 = 20;

/// Animation rows in the player sheet
pub mod rows {
    pub const IDLE: u32 = 0;
    pub const UP: u32 = 2;
    pub const DOWN: u32 = 3;
    pub const SIDE: u32 = 4;
}

/// Per-run player tuning, copied out of `GameConfig`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTuning {
    pub max_health: u32,
    pub speed: f32,
    pub dash_speed: f32,
    pub max_dashes: u32,
    pub dash_ticks: u32,
    pub recharge_ticks: u32,
    pub attack_ticks: u32,
    pub cooldown_ticks: u32,
    pub sword_length: f32,
    pub sword_width: f32,
}

impl From<&GameConfig> for PlayerTuning {
    fn from(c: &GameConfig) -> Self {
        Self {
            max_health: c.player_max_health,
            speed: c.player_speed,
            dash_speed: c.dash_speed,
            max_dashes: c.max_dashes,
            dash_ticks: c.dash_duration_ticks(),
            recharge_ticks: c.dash_recharge_ticks(),
            attack_ticks: c.attack_duration_ticks(),
            cooldown_ticks: c.attack_cooldown_ticks(),
            sword_length: c.sword_length,
            sword_width: c.sword_width,
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// Dash charges and timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashState {
    pub charges: u32,
    pub active: bool,
    duration: Countdown,
    /// One entry per consumed charge; each refunds one charge when it fires
    recharges: Vec<Countdown>,
}

impl DashState {
    pub fn pending_recharges(&self) -> usize {
        self.recharges.len()
    }
}

/// Sword swing state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackState {
    pub active: bool,
    /// Aim angle toward the pointer (radians)
    pub angle: f32,
    /// Seconds since the swing started
    pub timer: f32,
    /// Player clock value at the last activation
    last_tick: Option<u64>,
    window: Countdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the 20x20 footprint
    pub pos: Vec2,
    pub health: u32,
    pub max_health: u32,
    /// Normalized movement direction (zero when idle)
    pub dir: Vec2,
    pub dash: DashState,
    pub attack: AttackState,
    pub dying: bool,
    /// Seconds since death started
    pub death_timer: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub frame_count: u32,
    /// Ticks this player has been updated (drives the attack cooldown)
    clock: u64,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(pos: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            pos,
            health: tuning.max_health,
            max_health: tuning.max_health,
            dir: Vec2::ZERO,
            dash: DashState {
                charges: tuning.max_dashes,
                active: false,
                duration: Countdown::default(),
                recharges: Vec::new(),
            },
            attack: AttackState {
                active: false,
                angle: 0.0,
                timer: 0.0,
                last_tick: None,
                window: Countdown::default(),
            },
            dying: false,
            death_timer: 0.0,
            frame_x: 0,
            frame_y: rows::IDLE,
            frame_count: 0,
            clock: 0,
            tuning,
        }
    }

    /// Fresh player at the arena spawn point
    pub fn spawn(tuning: PlayerTuning) -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y), tuning)
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn max_dashes(&self) -> u32 {
        self.tuning.max_dashes
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENTITY_SIZE / 2.0)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::square(self.pos, ENTITY_SIZE)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0 && !self.dying
    }

    /// Advance one tick. A dying player only advances its death animation.
    pub fn update(&mut self, input: &TickInput) {
        if self.dying {
            self.update_death_animation();
            return;
        }

        self.clock += 1;
        self.frame_count = self.frame_count.wrapping_add(1);
        self.tick_timers();

        self.update_movement(input);
        self.update_combat(input);
        self.update_animation();

        self.pos = clamp_to_arena(self.pos);
    }

    fn tick_timers(&mut self) {
        if self.dash.duration.tick() {
            self.dash.active = false;
        }

        // Cap is checked as each recharge lands, not when it was queued
        let refunds = tick_all(&mut self.dash.recharges) as u32;
        if refunds > 0 {
            self.dash.charges = (self.dash.charges + refunds).min(self.tuning.max_dashes);
        }

        if self.attack.window.tick() {
            self.attack.active = false;
            self.frame_x = 0;
        }
    }

    fn update_movement(&mut self, input: &TickInput) {
        let mut dir = Vec2::ZERO;
        if input.up {
            dir.y = -1.0;
            self.frame_y = rows::UP;
        }
        if input.down {
            dir.y = 1.0;
            self.frame_y = rows::DOWN;
        }
        if input.left {
            dir.x = -1.0;
            self.frame_y = rows::SIDE;
        }
        if input.right {
            dir.x = 1.0;
            self.frame_y = rows::SIDE;
        }

        // Diagonals: keep speed equal to axial movement, face vertically
        if dir.x != 0.0 && dir.y != 0.0 {
            dir /= dir.length();
            self.frame_y = if dir.y < 0.0 { rows::UP } else { rows::DOWN };
        }
        self.dir = dir;

        let speed = if self.dash.active {
            self.tuning.dash_speed
        } else {
            self.tuning.speed
        };
        self.pos += self.dir * speed;

        if input.dash {
            self.try_dash();
        }
    }

    /// Start a dash if a charge is available. Returns true on activation.
    pub fn try_dash(&mut self) -> bool {
        if self.dash.active || self.dir == Vec2::ZERO || self.dash.charges == 0 {
            return false;
        }
        self.dash.active = true;
        self.dash.charges -= 1;
        self.dash.duration = Countdown::new(self.tuning.dash_ticks);
        self.dash
            .recharges
            .push(Countdown::new(self.tuning.recharge_ticks));
        log::debug!("Dash! {} charges left", self.dash.charges);
        true
    }

    fn update_combat(&mut self, input: &TickInput) {
        let to_pointer = (input.pointer - self.center()).normalize_or_zero();
        self.attack.angle = to_pointer.y.atan2(to_pointer.x);

        if input.attack {
            self.try_attack();
        }

        if self.attack.active {
            self.attack.timer += SIM_DT;
            if self.frame_count % ANIM_CADENCE == 0 {
                self.frame_x = (self.frame_x + 1) % FRAMES_PER_STATE;
            }
        }
    }

    /// Start a swing if off cooldown. Returns true on activation.
    pub fn try_attack(&mut self) -> bool {
        if self.attack.active {
            return false;
        }
        let ready = match self.attack.last_tick {
            None => true,
            Some(last) => self.clock - last >= self.tuning.cooldown_ticks as u64,
        };
        if !ready {
            return false;
        }
        self.attack.active = true;
        self.attack.timer = 0.0;
        self.attack.last_tick = Some(self.clock);
        self.attack.window = Countdown::new(self.tuning.attack_ticks);
        self.frame_x = 0;
        log::debug!("Attack at angle {:.2}", self.attack.angle);
        true
    }

    fn update_animation(&mut self) {
        if self.attack.active {
            // Swing animation owns frame_x
            return;
        }
        if self.dir != Vec2::ZERO {
            if self.frame_count % ANIM_CADENCE == 0 {
                self.frame_x = (self.frame_x + 1) % FRAMES_PER_STATE;
            }
        } else {
            self.frame_x = 0;
        }
    }

    /// Current swing angle including the wobble of the blade
    fn swing_angle(&self) -> f32 {
        self.attack.angle + (self.attack.timer * 10.0).sin() * 0.5
    }

    /// Bounding box of the blade while swinging, `None` otherwise
    pub fn attack_area(&self) -> Option<Rect> {
        if !self.attack.active || self.dying {
            return None;
        }
        let swing = self.swing_angle();
        let aim = Vec2::new(self.attack.angle.cos(), self.attack.angle.sin());
        let hilt = self.center() + aim * (15.0 * SPRITE_SCALE);
        let reach = self.tuning.sword_length - 10.0;
        let tip = hilt + Vec2::new(swing.cos(), swing.sin()) * reach;
        Some(Rect::from_corners(hilt, tip).expand(self.tuning.sword_width / 2.0))
    }

    /// Apply contact damage; health saturates at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn start_death_animation(&mut self) {
        self.dying = true;
        self.death_timer = 0.0;
        self.frame_x = 0;
        self.frame_y = rows::IDLE;
        self.dash.active = false;
        self.attack.active = false;
    }

    pub fn update_death_animation(&mut self) {
        if !self.dying {
            return;
        }
        self.death_timer += SIM_DT;
        if self.death_timer > 0.5 && self.frame_count % DEATH_ANIM_CADENCE == 0 {
            self.frame_x = (self.frame_x + 1) % FRAMES_PER_STATE;
        }
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// Fall-over rotation, capped at 90 degrees
    pub fn death_rotation(&self) -> f32 {
        if self.dying {
            (self.death_timer * 0.3).min(FRAC_PI_2)
        } else {
            0.0
        }
    }

    /// Fades to half opacity over three seconds
    pub fn death_opacity(&self) -> f32 {
        if self.dying {
            1.0 - (self.death_timer / 3.0).min(0.5)
        } else {
            1.0
        }
    }

    /// Body sprite for the current frame
    pub fn sprite_draw(&self, sprites: &SpriteSet) -> SpriteDraw {
        let sheet = &sprites.player;
        let source = sheet.frame_rect(self.frame_x, self.frame_y);
        SpriteDraw {
            sprite: SpriteId::Player,
            source,
            pos: self.center(),
            pivot: Vec2::new(source.w / 2.0, source.h / 2.0),
            scale: SPRITE_SCALE,
            rotation: self.death_rotation(),
            opacity: self.death_opacity(),
            flip_x: self.dir.x < 0.0 && !self.dying,
        }
    }

    /// Blade sprite while swinging
    pub fn sword_draw(&self, sprites: &SpriteSet) -> Option<SpriteDraw> {
        if !self.attack.active || self.dying {
            return None;
        }
        let swing = self.swing_angle();
        let source = sprites.sword.frame_rect(0, 0);
        let offset = Vec2::new(swing.cos(), swing.sin()) * (35.0 * SPRITE_SCALE);
        Some(SpriteDraw {
            sprite: SpriteId::Sword,
            source,
            pos: self.center() + offset,
            pivot: Vec2::new(source.w / 2.0, 0.0),
            scale: 1.0,
            rotation: swing + FRAC_PI_2,
            opacity: 1.0,
            flip_x: false,
        })
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        canvas.sprite(&self.sprite_draw(sprites));
        if let Some(sword) = self.sword_draw(sprites) {
            canvas.sprite(&sword);
        }
    }
}

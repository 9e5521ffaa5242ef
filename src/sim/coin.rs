//! Collectible coins

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::assets::SpriteSet;
use crate::consts::*;
use crate::render::{Canvas, SpriteDraw, SpriteId};

/// Ticks per spin frame (0.15s)
const FRAME_TICKS: u32 = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    /// Top-left of the footprint
    pub pos: Vec2,
    pub size: f32,
    /// Spin frame (cosmetic)
    pub frame: u32,
    anim_ticks: u32,
}

impl Coin {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            frame: 0,
            anim_ticks: 0,
        }
    }

    /// Uniformly random placement fully inside the arena
    pub fn random(rng: &mut impl Rng, size: f32) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..=(ARENA_WIDTH - size)),
            rng.random_range(0.0..=(ARENA_HEIGHT - size)),
        );
        Self::new(pos, size)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Advance the spin animation
    pub fn update(&mut self) {
        self.anim_ticks += 1;
        if self.anim_ticks >= FRAME_TICKS {
            self.anim_ticks = 0;
            self.frame = (self.frame + 1) % SpriteSet::COIN_FRAMES;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        let source = sprites.coin.frame_rect(self.frame, 0);
        canvas.sprite(&SpriteDraw {
            sprite: SpriteId::Coin,
            source,
            pos: self.pos,
            pivot: Vec2::ZERO,
            scale: if source.w > 0.0 { self.size / source.w } else { 1.0 },
            rotation: 0.0,
            opacity: 1.0,
            flip_x: false,
        });
    }
}

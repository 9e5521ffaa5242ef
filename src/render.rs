//! Rendering abstraction
//!
//! The game never rasterizes. Screens and entities describe what to draw to a
//! `Canvas`; the host maps those calls onto its graphics API. `DrawList` is a
//! recording canvas for headless runs and tests.

use glam::Vec2;

use crate::sim::Rect;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba(50, 50, 50, 255);
    pub const ENEMY: Rgba = Rgba(255, 0, 0, 255);
    pub const HITBOX: Rgba = Rgba(255, 0, 0, 255);
    pub const GREEN: Rgba = Rgba(0, 200, 0, 255);
    pub const YELLOW: Rgba = Rgba(200, 200, 0, 255);
    pub const RED: Rgba = Rgba(200, 0, 0, 255);
    pub const GREY: Rgba = Rgba(100, 100, 100, 255);
    pub const FRAME: Rgba = Rgba(200, 200, 200, 255);
    pub const DASH_PIP: Rgba = Rgba(255, 255, 0, 255);
}

/// Which sprite sheet a draw call samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Sword,
    Coin,
}

/// A single sprite blit
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    /// Source rectangle inside the sheet (pixels)
    pub source: Rect,
    /// Where the sprite's pivot lands in arena space
    pub pos: Vec2,
    /// Pivot inside the source frame, in source pixels
    pub pivot: Vec2,
    pub scale: f32,
    /// Radians, clockwise in screen space
    pub rotation: f32,
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    pub flip_x: bool,
}

/// Drawing surface implemented by the host
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, color: Rgba);
    fn text(&mut self, text: &str, at: Vec2);
    fn sprite(&mut self, sprite: &SpriteDraw);
}

/// Recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Rect, Rgba),
    Stroke(Rect, Rgba),
    Text(String, Vec2),
    Sprite(SpriteDraw),
}

/// Canvas that records every call in order
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(s, _) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn sprites(&self, id: SpriteId) -> impl Iterator<Item = &SpriteDraw> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Sprite(s) if s.sprite == id => Some(s),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Stroke(rect, color));
    }

    fn text(&mut self, text: &str, at: Vec2) {
        self.commands.push(DrawCommand::Text(text.to_string(), at));
    }

    fn sprite(&mut self, sprite: &SpriteDraw) {
        self.commands.push(DrawCommand::Sprite(sprite.clone()));
    }
}

//! Clickable buttons
//!
//! A button is just geometry, a label and an action value; the owning screen
//! decides what the action means.

use glam::Vec2;

use crate::render::{Canvas, Rgba};
use crate::sim::Rect;

/// Approximate glyph width of the host's debug font
const GLYPH_WIDTH: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct Button<A> {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Rgba,
    pub action: A,
}

impl<A: Copy> Button<A> {
    pub fn new(rect: Rect, label: &'static str, color: Rgba, action: A) -> Self {
        Self {
            rect,
            label,
            color,
            action,
        }
    }

    /// Edge-inclusive hit test
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect, self.color);
        let text_x = self.rect.x + (self.rect.w - self.label.len() as f32 * GLYPH_WIDTH) / 2.0;
        let text_y = self.rect.y + self.rect.h / 2.0;
        canvas.text(self.label, Vec2::new(text_x, text_y));
    }
}

/// Action of the first button under `point`, if any
pub fn hit<A: Copy>(buttons: &[Button<A>], point: Vec2) -> Option<A> {
    buttons.iter().find(|b| b.contains(point)).map(|b| b.action)
}

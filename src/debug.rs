//! Debug overlay
//!
//! F1 toggles the overlay, F2 the FPS readout and F3 hitbox outlines.

use std::collections::VecDeque;

use glam::Vec2;

use crate::render::{Canvas, colors};
use crate::sim::Rect;

/// Messages kept in the rolling log
pub const MAX_MESSAGES: usize = 10;

#[derive(Debug, Clone)]
pub struct DebugOverlay {
    pub enabled: bool,
    pub show_fps: bool,
    pub show_hitboxes: bool,
    pub show_positions: bool,
    messages: VecDeque<String>,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self {
            enabled: false,
            show_fps: true,
            show_hitboxes: true,
            show_positions: true,
            messages: VecDeque::with_capacity(MAX_MESSAGES),
        }
    }
}

impl DebugOverlay {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!("Debug overlay {}", if self.enabled { "on" } else { "off" });
    }

    /// Append a message (dropped while disabled)
    pub fn add_message(&mut self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(msg.into());
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, fps: f32, tps: f32) {
        if !self.enabled {
            return;
        }
        if self.show_fps {
            canvas.text(&format!("FPS: {:.2}", fps), Vec2::new(10.0, 10.0));
            canvas.text(&format!("TPS: {:.2}", tps), Vec2::new(10.0, 30.0));
        }
        for (i, msg) in self.messages.iter().enumerate() {
            canvas.text(msg, Vec2::new(10.0, 50.0 + i as f32 * 20.0));
        }
    }

    pub fn draw_hitboxes(&self, canvas: &mut dyn Canvas, hitboxes: &[Rect]) {
        if !self.enabled || !self.show_hitboxes {
            return;
        }
        for rect in hitboxes {
            canvas.stroke_rect(*rect, colors::HITBOX);
        }
    }

    /// Position / health / dash readout floating above the player
    pub fn draw_player_info(
        &self,
        canvas: &mut dyn Canvas,
        pos: Vec2,
        health: (u32, u32),
        dashes: (u32, u32),
    ) {
        if !self.enabled || !self.show_positions {
            return;
        }
        canvas.text(
            &format!("X: {:.1}, Y: {:.1}", pos.x, pos.y),
            Vec2::new(pos.x, pos.y - 15.0),
        );
        canvas.text(
            &format!("HP: {}/{}", health.0, health.1),
            Vec2::new(pos.x, pos.y - 30.0),
        );
        canvas.text(
            &format!("Dash: {}/{}", dashes.0, dashes.1),
            Vec2::new(pos.x, pos.y - 45.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    #[test]
    fn test_messages_dropped_while_disabled() {
        let mut debug = DebugOverlay::default();
        debug.add_message("hidden");
        assert_eq!(debug.messages().count(), 0);
    }

    #[test]
    fn test_message_log_is_capped() {
        let mut debug = DebugOverlay::default();
        debug.toggle();
        for i in 0..25 {
            debug.add_message(format!("msg {}", i));
        }
        let msgs: Vec<&str> = debug.messages().collect();
        assert_eq!(msgs.len(), MAX_MESSAGES);
        assert_eq!(msgs[0], "msg 15");
        assert_eq!(msgs[9], "msg 24");
    }

    #[test]
    fn test_hitboxes_only_when_enabled() {
        let mut debug = DebugOverlay::default();
        let mut canvas = DrawList::new();
        let boxes = [Rect::new(0.0, 0.0, 20.0, 20.0)];
        debug.draw_hitboxes(&mut canvas, &boxes);
        assert!(canvas.commands.is_empty());

        debug.toggle();
        debug.draw_hitboxes(&mut canvas, &boxes);
        assert_eq!(canvas.commands.len(), 1);
    }
}

//! In-game HUD: health bar, score, dash charges

use glam::Vec2;

use crate::render::{Canvas, Rgba, colors};
use crate::sim::Rect;

/// Read-only values the HUD displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudValues {
    pub health: u32,
    pub max_health: u32,
    pub score: u64,
    pub wave: u32,
    pub dash_charges: u32,
    pub max_dashes: u32,
}

#[derive(Debug, Clone)]
pub struct Hud {
    pub bar: Rect,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            bar: Rect::new(20.0, 20.0, 200.0, 20.0),
        }
    }
}

/// Green above 70%, yellow above 30%, red otherwise
pub fn health_color(health: u32, max_health: u32) -> Rgba {
    let pct = health as f32 * 100.0 / max_health.max(1) as f32;
    if pct > 70.0 {
        colors::GREEN
    } else if pct > 30.0 {
        colors::YELLOW
    } else {
        colors::RED
    }
}

impl Hud {
    pub fn draw(&self, canvas: &mut dyn Canvas, values: &HudValues) {
        self.draw_health_bar(canvas, values.health, values.max_health);

        canvas.text(
            &format!("Score: {}", values.score),
            Vec2::new(self.bar.x, self.bar.bottom() + 10.0),
        );
        canvas.text(
            &format!("Wave: {}", values.wave),
            Vec2::new(self.bar.x, self.bar.bottom() + 30.0),
        );

        // One pip per charge, hollow for spent ones
        for i in 0..values.max_dashes {
            let pip = Rect::new(
                self.bar.right() + 15.0 + i as f32 * 15.0,
                self.bar.y + 7.5,
                10.0,
                5.0,
            );
            if i < values.dash_charges {
                canvas.fill_rect(pip, colors::DASH_PIP);
            } else {
                canvas.stroke_rect(pip, colors::DASH_PIP);
            }
        }
    }

    fn draw_health_bar(&self, canvas: &mut dyn Canvas, health: u32, max_health: u32) {
        canvas.fill_rect(self.bar, colors::GREY);
        let ratio = health as f32 / max_health.max(1) as f32;
        let fill = Rect::new(self.bar.x, self.bar.y, self.bar.w * ratio, self.bar.h);
        canvas.fill_rect(fill, health_color(health, max_health));
        canvas.stroke_rect(self.bar, colors::FRAME);
    }
}

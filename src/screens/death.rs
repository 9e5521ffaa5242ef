use glam::Vec2;

use super::{FrameInput, MENU, PLAYING, Screen, Session, Transition};
use crate::assets::SpriteSet;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, SIM_DT};
use crate::error::GameError;
use crate::render::{Canvas, Rgba, colors};
use crate::sim::{Player, Rect};
use crate::ui::Button;
use crate::ui::button::hit;

/// Seconds before the score text appears
const TEXT_DELAY: f32 = 1.0;
/// Seconds before the buttons appear and accept clicks
const INPUT_DELAY: f32 = 2.0;

/// Anything the death screen can keep animating after the run ended
pub trait DeathAnimated {
    fn update_death_animation(&mut self);
    fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet);
}

impl DeathAnimated for Player {
    fn update_death_animation(&mut self) {
        Player::update_death_animation(self);
    }

    fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        Player::draw(self, canvas, sprites);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathAction {
    Restart,
    MainMenu,
}

/// Game over: the fallen player fades behind an overlay, then the score and
/// Restart / Main Menu buttons appear
pub struct DeathScreen {
    actor: Option<Box<dyn DeathAnimated>>,
    score: u64,
    wave: u32,
    rank: Option<usize>,
    best: Option<u64>,
    /// Seconds since the screen was entered
    timer: f32,
    buttons: Vec<Button<DeathAction>>,
}

impl Default for DeathScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Black overlay alpha, saturating at 192
pub fn overlay_alpha(seconds: f32) -> u8 {
    (seconds * 80.0).clamp(0.0, 192.0) as u8
}

impl DeathScreen {
    pub fn new() -> Self {
        let at = |y: f32| Rect::new(540.0, y, 200.0, 50.0);
        Self {
            actor: None,
            score: 0,
            wave: 0,
            rank: None,
            best: None,
            timer: 0.0,
            buttons: vec![
                Button::new(at(400.0), "Restart", colors::GREEN, DeathAction::Restart),
                Button::new(at(500.0), "Main Menu", colors::GREY, DeathAction::MainMenu),
            ],
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn accepts_input(&self) -> bool {
        self.timer > INPUT_DELAY
    }
}

impl Screen for DeathScreen {
    fn enter(&mut self, session: &mut Session) {
        self.timer = 0.0;
        self.actor = None;
        self.score = 0;
        self.wave = 0;
        self.rank = None;

        if let Some(run) = session.last_run.take() {
            self.score = run.score;
            self.wave = run.wave;
            self.rank = session
                .high_scores
                .add_score(run.score, run.wave, session.runs);
            self.actor = Some(Box::new(run.player));
        }
        self.best = session.high_scores.top_score();

        log::info!(
            "Game over: score {} on wave {} (rank {:?})",
            self.score,
            self.wave,
            self.rank
        );
    }

    fn update(&mut self, input: &FrameInput, _session: &mut Session) -> Result<Transition, GameError> {
        self.timer += SIM_DT;
        if let Some(actor) = self.actor.as_mut() {
            actor.update_death_animation();
        }

        if !self.accepts_input() {
            return Ok(Transition::None);
        }
        Ok(match input.click.and_then(|p| hit(&self.buttons, p)) {
            Some(DeathAction::Restart) => Transition::Change(PLAYING),
            Some(DeathAction::MainMenu) => Transition::Change(MENU),
            None => Transition::None,
        })
    }

    fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        let arena = Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT);
        canvas.fill_rect(arena, colors::BACKGROUND);

        if let Some(actor) = &self.actor {
            actor.draw(canvas, sprites);
        }

        canvas.fill_rect(arena, Rgba(0, 0, 0, overlay_alpha(self.timer)));

        if self.timer > TEXT_DELAY {
            canvas.text("GAME OVER", Vec2::new(580.0, 300.0));
            canvas.text(
                &format!("Final Score: {}", self.score),
                Vec2::new(580.0, 350.0),
            );
            if let Some(best) = self.best {
                canvas.text(&format!("Best: {}", best), Vec2::new(580.0, 370.0));
            }
            if let Some(rank) = self.rank {
                canvas.text(
                    &format!("New high score! #{}", rank),
                    Vec2::new(580.0, 250.0),
                );
            }
        }

        if self.accepts_input() {
            for button in &self.buttons {
                button.draw(canvas);
            }
        }
    }

    fn exit(&mut self, _session: &mut Session) {
        self.actor = None;
    }
}

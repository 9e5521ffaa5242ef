use glam::Vec2;

use super::{FrameInput, PLAYING, Screen, Session, Transition};
use crate::assets::SpriteSet;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::GameError;
use crate::render::{Canvas, colors};
use crate::sim::Rect;
use crate::ui::Button;
use crate::ui::button::hit;

pub const TITLE: &str = "Blade Waves";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Settings,
    Exit,
}

/// Title screen with Start / Settings / Exit
pub struct MenuScreen {
    buttons: Vec<Button<MenuAction>>,
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuScreen {
    pub fn new() -> Self {
        let at = |y: f32| Rect::new(540.0, y, 200.0, 50.0);
        Self {
            buttons: vec![
                Button::new(at(300.0), "Start Game", colors::GREEN, MenuAction::Start),
                Button::new(at(400.0), "Settings", colors::GREY, MenuAction::Settings),
                Button::new(at(500.0), "Exit", colors::RED, MenuAction::Exit),
            ],
        }
    }

    pub fn buttons(&self) -> &[Button<MenuAction>] {
        &self.buttons
    }
}

impl Screen for MenuScreen {
    fn enter(&mut self, _session: &mut Session) {}

    fn update(&mut self, input: &FrameInput, _session: &mut Session) -> Result<Transition, GameError> {
        let Some(click) = input.click else {
            return Ok(Transition::None);
        };
        Ok(match hit(&self.buttons, click) {
            Some(MenuAction::Start) => Transition::Change(PLAYING),
            Some(MenuAction::Settings) => {
                log::info!("Settings are not available yet");
                Transition::None
            }
            Some(MenuAction::Exit) => Transition::Quit,
            None => Transition::None,
        })
    }

    fn draw(&self, canvas: &mut dyn Canvas, _sprites: &SpriteSet) {
        canvas.fill_rect(
            Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT),
            colors::BACKGROUND,
        );
        canvas.text(TITLE, Vec2::new(580.0, 200.0));
        for button in &self.buttons {
            button.draw(canvas);
        }
    }

    fn exit(&mut self, _session: &mut Session) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::render::DrawList;

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            click: Some(Vec2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_buttons_map_to_transitions() {
        let mut menu = MenuScreen::new();
        let mut session = Session::new(GameConfig::default());

        let start = menu.update(&click(600.0, 320.0), &mut session).unwrap();
        assert_eq!(start, Transition::Change(PLAYING));

        let settings = menu.update(&click(600.0, 420.0), &mut session).unwrap();
        assert_eq!(settings, Transition::None);

        let exit = menu.update(&click(739.0, 549.0), &mut session).unwrap();
        assert_eq!(exit, Transition::Quit);
    }

    #[test]
    fn test_clicks_outside_buttons_ignored() {
        let mut menu = MenuScreen::new();
        let mut session = Session::new(GameConfig::default());
        for (x, y) in [(100.0, 100.0), (600.0, 375.0), (539.0, 320.0)] {
            assert_eq!(menu.update(&click(x, y), &mut session).unwrap(), Transition::None);
        }
        assert_eq!(
            menu.update(&FrameInput::default(), &mut session).unwrap(),
            Transition::None
        );
    }

    #[test]
    fn test_draws_title_and_labels() {
        let menu = MenuScreen::new();
        let mut canvas = DrawList::new();
        menu.draw(&mut canvas, &SpriteSet::placeholder());
        assert!(canvas.has_text(TITLE));
        assert!(canvas.has_text("Start Game"));
        assert!(canvas.has_text("Exit"));
    }
}

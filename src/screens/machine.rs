use std::collections::HashMap;

use super::{FrameInput, Screen, Session, Transition};
use crate::assets::SpriteSet;
use crate::error::GameError;
use crate::render::Canvas;
use crate::sim::{PlayState, Rect};

/// Named screens with a single active one
#[derive(Default)]
pub struct StateMachine {
    screens: HashMap<&'static str, Box<dyn Screen>>,
    current: Option<&'static str>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen under `name`, replacing any previous one
    pub fn add(&mut self, name: &'static str, screen: Box<dyn Screen>) {
        self.screens.insert(name, screen);
    }

    pub fn current_state_name(&self) -> Option<&'static str> {
        self.current
    }

    /// Exit the active screen and enter `name`.
    ///
    /// Unknown names are rejected before anything is exited, so the active
    /// screen stays untouched.
    pub fn change_state(&mut self, name: &str, session: &mut Session) -> Result<(), GameError> {
        let next = match self.screens.get_key_value(name) {
            Some((key, _)) => *key,
            None => return Err(GameError::UnknownState(name.to_string())),
        };

        if let Some(screen) = self.current.and_then(|cur| self.screens.get_mut(cur)) {
            screen.exit(session);
        }

        log::info!("Screen {} -> {}", self.current.unwrap_or("<none>"), next);
        self.current = Some(next);

        if let Some(screen) = self.screens.get_mut(next) {
            screen.enter(session);
        }
        Ok(())
    }

    /// Update the active screen and hand back its transition unchanged
    pub fn update(
        &mut self,
        input: &FrameInput,
        session: &mut Session,
    ) -> Result<Transition, GameError> {
        match self.current.and_then(|cur| self.screens.get_mut(cur)) {
            Some(screen) => screen.update(input, session),
            None => Ok(Transition::None),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        if let Some(screen) = self.active() {
            screen.draw(canvas, sprites);
        }
    }

    pub fn hitboxes(&self) -> Vec<Rect> {
        self.active().map(|s| s.hitboxes()).unwrap_or_default()
    }

    pub fn play_state(&self) -> Option<&PlayState> {
        self.active().and_then(|s| s.play_state())
    }

    fn active(&self) -> Option<&dyn Screen> {
        self.current
            .and_then(|cur| self.screens.get(cur))
            .map(|s| s.as_ref())
    }
}

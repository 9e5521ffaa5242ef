use super::{DEATH, FrameInput, RunSummary, Screen, Session, Transition};
use crate::assets::SpriteSet;
use crate::config::GameConfig;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::GameError;
use crate::render::{Canvas, colors};
use crate::sim::{PlayState, Rect, TickOutcome, tick};
use crate::ui::{Hud, HudValues};

/// The arena: runs one simulation tick per update
pub struct PlayScreen {
    state: PlayState,
    hud: Hud,
}

impl PlayScreen {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: PlayState::new(config, config.seed),
            hud: Hud::default(),
        }
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlayState {
        &mut self.state
    }

    fn hud_values(&self) -> HudValues {
        let player = &self.state.player;
        HudValues {
            health: player.health,
            max_health: player.max_health,
            score: self.state.score,
            wave: self.state.wave,
            dash_charges: player.dash.charges,
            max_dashes: player.max_dashes(),
        }
    }
}

impl Screen for PlayScreen {
    /// Every entry starts a fresh run
    fn enter(&mut self, session: &mut Session) {
        let seed = session.next_seed();
        self.state.reset(seed);
        log::info!("Run {} started (seed {:#x})", session.runs, seed);
    }

    fn update(&mut self, input: &FrameInput, _session: &mut Session) -> Result<Transition, GameError> {
        Ok(match tick(&mut self.state, &input.tick) {
            TickOutcome::PlayerDied => Transition::Change(DEATH),
            TickOutcome::WaveCleared(_) | TickOutcome::Running => Transition::None,
        })
    }

    fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet) {
        canvas.fill_rect(
            Rect::new(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT),
            colors::BACKGROUND,
        );
        self.state.draw(canvas, sprites);
        self.hud.draw(canvas, &self.hud_values());
    }

    fn exit(&mut self, session: &mut Session) {
        session.last_run = Some(RunSummary {
            player: self.state.player.clone(),
            score: self.state.score,
            wave: self.state.wave,
        });
    }

    fn hitboxes(&self) -> Vec<Rect> {
        self.state.hitboxes()
    }

    fn play_state(&self) -> Option<&PlayState> {
        Some(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use crate::sim::Enemy;
    use glam::Vec2;

    fn entered() -> (PlayScreen, Session) {
        let config = GameConfig::default();
        let mut session = Session::new(config.clone());
        let mut screen = PlayScreen::new(&config);
        screen.enter(&mut session);
        (screen, session)
    }

    #[test]
    fn test_enter_starts_fresh_run() {
        let (mut screen, mut session) = entered();
        screen.state_mut().score = 900;
        screen.state_mut().player.health = 10;

        screen.enter(&mut session);
        let state = screen.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.player.pos, Vec2::new(640.0, 480.0));
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.coins.len(), 3);
        assert_eq!(session.runs, 2);
    }

    #[test]
    fn test_lethal_contact_requests_death_and_exit_hands_over_run() {
        let (mut screen, mut session) = entered();
        {
            let state = screen.state_mut();
            state.player.health = 25;
            state.score = 450;
            state.enemies = vec![Enemy::new(state.player.pos, 0.0)];
        }

        let t = screen.update(&FrameInput::default(), &mut session).unwrap();
        assert_eq!(t, Transition::Change(DEATH));

        screen.exit(&mut session);
        let run = session.last_run.as_ref().expect("run summary");
        assert_eq!(run.score, 450);
        assert_eq!(run.wave, 1);
        assert_eq!(run.player.health, 0);
        assert!(run.player.dying);
    }

    #[test]
    fn test_draw_includes_hud() {
        let (screen, _) = entered();
        let mut canvas = DrawList::new();
        screen.draw(&mut canvas, &SpriteSet::placeholder());
        assert!(canvas.has_text("Score: 0"));
        assert!(canvas.has_text("Wave: 1"));
    }
}

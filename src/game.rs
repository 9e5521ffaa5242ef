//! Host-facing game root
//!
//! Owns the screen state machine, the shared session and the debug overlay.
//! The host calls `update` once per fixed tick and `draw` once per frame.

use crate::assets::SpriteSet;
use crate::config::GameConfig;
use crate::debug::DebugOverlay;
use crate::error::GameError;
use crate::render::Canvas;
use crate::screens::{
    DEATH, DeathScreen, FrameInput, MENU, MenuScreen, PLAYING, PlayScreen, Session, StateMachine,
    Transition,
};
use crate::sim::PlayState;

/// Rolling frame-rate estimate over the last 60 timestamps (seconds)
#[derive(Debug, Clone)]
pub struct FrameRate {
    times: [f64; 60],
    index: usize,
    rate: f32,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self {
            times: [0.0; 60],
            index: 0,
            rate: 0.0,
        }
    }
}

impl FrameRate {
    pub fn record(&mut self, time: f64) {
        self.times[self.index] = time;
        self.index = (self.index + 1) % self.times.len();

        // The slot after the newest is the oldest sample
        let oldest = self.times[self.index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.rate = ((self.times.len() - 1) as f64 / elapsed) as f32;
            }
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }
}

pub struct Game {
    machine: StateMachine,
    session: Session,
    sprites: SpriteSet,
    debug: DebugOverlay,
    running: bool,
    fps: FrameRate,
    tps: FrameRate,
}

impl Game {
    /// Register the menu, play and death screens and enter the menu.
    /// Fails on a config that `GameConfig::validate` rejects.
    pub fn new(config: GameConfig, sprites: SpriteSet) -> Result<Self, GameError> {
        config.validate()?;

        let mut machine = StateMachine::new();
        machine.add(MENU, Box::new(MenuScreen::new()));
        machine.add(PLAYING, Box::new(PlayScreen::new(&config)));
        machine.add(DEATH, Box::new(DeathScreen::new()));

        let mut session = Session::new(config);
        machine.change_state(MENU, &mut session)?;

        Ok(Self {
            machine,
            session,
            sprites,
            debug: DebugOverlay::default(),
            running: true,
            fps: FrameRate::default(),
            tps: FrameRate::default(),
        })
    }

    /// Advance one tick. Returns false once the player chose Exit.
    pub fn update(&mut self, input: &FrameInput) -> Result<bool, GameError> {
        if !self.running {
            return Ok(false);
        }

        if input.toggle_debug {
            self.debug.toggle();
        }
        if input.toggle_fps {
            self.debug.show_fps = !self.debug.show_fps;
        }
        if input.toggle_hitboxes {
            self.debug.show_hitboxes = !self.debug.show_hitboxes;
        }

        match self.machine.update(input, &mut self.session)? {
            Transition::None => {}
            Transition::Change(name) => {
                self.machine.change_state(name, &mut self.session)?;
                self.debug.add_message(format!("Current state: {}", name));
            }
            Transition::Quit => {
                log::info!("Exit requested");
                self.running = false;
            }
        }
        Ok(self.running)
    }

    /// Record a tick timestamp for the TPS readout
    pub fn record_tick(&mut self, time: f64) {
        self.tps.record(time);
    }

    /// Draw the active screen plus the debug overlay
    pub fn draw(&mut self, canvas: &mut dyn Canvas, time: f64) {
        self.fps.record(time);
        self.machine.draw(canvas, &self.sprites);

        if !self.debug.enabled {
            return;
        }
        self.debug
            .draw_hitboxes(canvas, &self.machine.hitboxes());
        if let Some(state) = self.machine.play_state() {
            let player = &state.player;
            self.debug.draw_player_info(
                canvas,
                player.pos,
                (player.health, player.max_health),
                (player.dash.charges, player.max_dashes()),
            );
        }
        self.debug.draw(canvas, self.fps.rate(), self.tps.rate());
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_state_name(&self) -> Option<&'static str> {
        self.machine.current_state_name()
    }

    /// Manual transition, e.g. from a host shortcut
    pub fn change_state(&mut self, name: &str) -> Result<(), GameError> {
        self.machine.change_state(name, &mut self.session)
    }

    pub fn play_state(&self) -> Option<&PlayState> {
        self.machine.play_state()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn debug(&self) -> &DebugOverlay {
        &self.debug
    }
}

//! Screen state machine
//!
//! Exactly one screen is active at a time. Screens never switch themselves;
//! they return a `Transition` from `update` and the owner applies it.

pub mod death;
pub mod machine;
pub mod menu;
pub mod play;

pub use death::{DeathAnimated, DeathScreen};
pub use machine::StateMachine;
pub use menu::MenuScreen;
pub use play::PlayScreen;

use glam::Vec2;

use crate::assets::SpriteSet;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::highscores::HighScores;
use crate::render::Canvas;
use crate::sim::{PlayState, Player, Rect, TickInput};

/// Registered screen names
pub const MENU: &str = "menu";
pub const PLAYING: &str = "playing";
pub const DEATH: &str = "death";

/// What the active screen wants to happen after its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Change(&'static str),
    /// Leave the game loop
    Quit,
}

/// Everything the host feeds in for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub tick: TickInput,
    /// Left click this frame (edge-triggered), in arena space
    pub click: Option<Vec2>,
    pub toggle_debug: bool,
    pub toggle_fps: bool,
    pub toggle_hitboxes: bool,
}

/// How a run ended; handed from the play screen to the death screen
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub player: Player,
    pub score: u64,
    pub wave: u32,
}

/// Data shared across screens
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub high_scores: HighScores,
    pub last_run: Option<RunSummary>,
    /// Runs started so far
    pub runs: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            high_scores: HighScores::new(),
            last_run: None,
            runs: 0,
        }
    }

    /// Seed for the next run: base seed offset by the run index
    pub fn next_seed(&mut self) -> u64 {
        self.runs += 1;
        self.config.seed.wrapping_add(self.runs as u64)
    }
}

/// A game screen with an enter/update/draw/exit lifecycle
pub trait Screen {
    fn enter(&mut self, session: &mut Session);

    fn update(&mut self, input: &FrameInput, session: &mut Session)
    -> Result<Transition, GameError>;

    fn draw(&self, canvas: &mut dyn Canvas, sprites: &SpriteSet);

    fn exit(&mut self, session: &mut Session);

    /// Hitboxes for the debug overlay
    fn hitboxes(&self) -> Vec<Rect> {
        Vec::new()
    }

    /// The live play session, if this screen runs one
    fn play_state(&self) -> Option<&PlayState> {
        None
    }
}

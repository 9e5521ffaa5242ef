//! UI widgets drawn on top of the simulation

pub mod button;
pub mod hud;

pub use button::Button;
pub use hud::{Hud, HudValues};

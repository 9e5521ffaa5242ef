//! Blade Waves entry point
//!
//! Native builds run the game headless in attract mode: the autopilot plays a
//! few runs through the real screen state machine and logs how they went.
//!
//! Usage: `blade-waves [config.json] [runs]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use blade_waves::assets::{AssetLoader, SpriteSet};
    use blade_waves::consts::TICKS_PER_SECOND;
    use blade_waves::render::DrawList;
    use blade_waves::screens::{DEATH, FrameInput, MENU, PLAYING};
    use blade_waves::sim::autopilot;
    use blade_waves::{Game, GameConfig, GameError};
    use glam::Vec2;

    /// Button centres on the menu and death screens
    const START_BUTTON: Vec2 = Vec2::new(640.0, 325.0);
    const EXIT_BUTTON: Vec2 = Vec2::new(640.0, 525.0);
    const RESTART_BUTTON: Vec2 = Vec2::new(640.0, 425.0);
    const MAIN_MENU_BUTTON: Vec2 = Vec2::new(640.0, 525.0);

    /// Hard stop so a run that never dies can't spin forever
    const MAX_TICKS: u64 = TICKS_PER_SECOND as u64 * 60 * 30;

    pub fn main() {
        env_logger::init();
        log::info!("Blade Waves (headless) starting...");

        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => GameConfig::load_or_default(&PathBuf::from(path)),
            None => GameConfig::default(),
        };
        let runs = args.next().and_then(|s| s.parse().ok()).unwrap_or(3u32);

        if let Err(e) = run(config, runs) {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }

    fn run(config: GameConfig, runs: u32) -> Result<(), GameError> {
        let mut loader = AssetLoader::new(&config.assets_dir);
        let sprites = SpriteSet::load_or_placeholder(&mut loader);
        let mut game = Game::new(config, sprites)?;
        let mut canvas = DrawList::new();

        let mut finished = 0;
        let mut last_snapshot = None;
        let mut ticks: u64 = 0;
        while game.is_running() && ticks < MAX_TICKS {
            let time = ticks as f64 / TICKS_PER_SECOND as f64;
            let mut input = FrameInput::default();

            let before = game.current_state_name();
            match before {
                Some(MENU) if finished >= runs => input.click = Some(EXIT_BUTTON),
                Some(MENU) => input.click = Some(START_BUTTON),
                Some(PLAYING) => {
                    if let Some(state) = game.play_state() {
                        input.tick = autopilot(state);
                        last_snapshot = Some(state.snapshot());
                    }
                }
                Some(DEATH) if finished >= runs => input.click = Some(MAIN_MENU_BUTTON),
                Some(DEATH) => input.click = Some(RESTART_BUTTON),
                _ => {}
            }

            game.update(&input)?;
            game.record_tick(time);

            if before == Some(PLAYING) && game.current_state_name() == Some(DEATH) {
                finished += 1;
                if let Some(snapshot) = last_snapshot.take() {
                    match serde_json::to_string(&snapshot) {
                        Ok(json) => log::info!("Run {} final state: {}", finished, json),
                        Err(e) => log::warn!("Snapshot failed: {}", e),
                    }
                }
            }

            canvas.clear();
            game.draw(&mut canvas, time);
            ticks += 1;
        }

        let scores = &game.session().high_scores;
        match serde_json::to_string_pretty(scores) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Could not serialize high scores: {}", e),
        }
        log::info!(
            "Played {} run(s) in {} ticks, best score {}",
            finished,
            ticks,
            scores.top_score().unwrap_or(0)
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven through `Game` directly
}

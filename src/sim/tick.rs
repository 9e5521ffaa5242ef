//! Fixed timestep simulation tick
//!
//! Core game loop that advances the play session deterministically.
//! Per-tick order: player (movement, dash, attack window) -> enemy seek and
//! contact -> attack vs enemies -> coin pickup -> wave clear.

use glam::Vec2;
use rand::Rng;

use super::collision::{attack_hits_enemy, player_enemy_contact, player_touches_coin};
use super::enemy::Enemy;
use super::state::PlayState;
use super::timer::{Countdown, tick_all};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Dash trigger
    pub dash: bool,
    /// Attack trigger
    pub attack: bool,
    /// Aim point in arena space
    pub pointer: Vec2,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// All enemies died; the new wave number
    WaveCleared(u32),
    /// Health reached zero this tick (or earlier)
    PlayerDied,
}

/// Advance the play state by one fixed timestep
pub fn tick(state: &mut PlayState, input: &TickInput) -> TickOutcome {
    if state.player.dying {
        state.player.update_death_animation();
        return TickOutcome::PlayerDied;
    }

    state.time_ticks += 1;

    state.player.update(input);

    for coin in &mut state.coins {
        coin.update();
    }
    let respawns = tick_all(&mut state.pending_coins);
    for _ in 0..respawns {
        state.spawn_coin();
    }

    // Between waves: enemies hold still and deal no damage, but the player
    // keeps moving and collecting
    let paused = state.wave_transition.is_running() && !state.wave_transition.tick();

    if !paused {
        if resolve_enemy_contacts(state) {
            state.player.start_death_animation();
            log::info!(
                "Player died on wave {} with score {}",
                state.wave,
                state.score
            );
            return TickOutcome::PlayerDied;
        }
        resolve_attacks(state);
    }

    collect_coins(state);

    let mut outcome = TickOutcome::Running;
    if !paused && state.alive_enemies() == 0 {
        spawn_wave(state);
        outcome = TickOutcome::WaveCleared(state.wave);
    }

    state.check_invariants();
    outcome
}

/// Move every enemy toward the player and apply contact damage.
/// Returns true if the player took a lethal hit (remaining enemies are skipped).
fn resolve_enemy_contacts(state: &mut PlayState) -> bool {
    let damage = state.config.contact_damage;
    let threshold = state.config.contact_distance;
    let knockback = state.config.knockback_distance;

    for enemy in &mut state.enemies {
        enemy.update(state.player.center());

        if let Some(contact) = player_enemy_contact(&state.player, enemy, threshold) {
            state.player.take_damage(damage);
            if state.player.health == 0 {
                return true;
            }
            // Knockback ignores the arena clamp until the next player update
            state.player.pos += contact.normal * knockback;
            log::debug!("Contact! health {}", state.player.health);
        }
    }
    false
}

/// Kill every live enemy inside the attack area, rolling for bonus coins
fn resolve_attacks(state: &mut PlayState) {
    let area = state.player.attack_area();
    if area.is_none() {
        return;
    }

    let mut kills = 0;
    for enemy in &mut state.enemies {
        if attack_hits_enemy(area, enemy) {
            enemy.alive = false;
            kills += 1;
        }
    }
    if kills == 0 {
        return;
    }

    state.score += state.config.kill_score * kills as u64;
    log::debug!("{} kill(s), score {}", kills, state.score);

    for _ in 0..kills {
        if state.rng.random_bool(state.config.bonus_coin_chance) {
            state.spawn_coin();
        }
    }
}

/// Pick up every overlapping coin and queue delayed respawns
fn collect_coins(state: &mut PlayState) {
    let before = state.coins.len();
    let player = &state.player;
    state.coins.retain(|coin| !player_touches_coin(player, coin));
    let picked = before - state.coins.len();
    if picked == 0 {
        return;
    }

    state.score += state.config.coin_score * picked as u64;
    log::debug!("Picked up {} coin(s), score {}", picked, state.score);
    for _ in 0..picked {
        state.schedule_coin_respawn();
    }
}

/// Replace the cleared wave with the next one
pub fn spawn_wave(state: &mut PlayState) {
    state.wave += 1;

    state.enemies.clear();
    for _ in 0..state.wave {
        let enemy = Enemy::random_edge(&mut state.rng, state.config.enemy_speed);
        state.enemies.push(enemy);
    }

    state.player.heal(state.config.wave_heal);
    state.spawn_coin();
    state.wave_transition = Countdown::new(state.config.wave_pause_ticks());

    log::info!(
        "Wave {} incoming: {} enemies, score {}",
        state.wave,
        state.enemies.len(),
        state.score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::coin::Coin;

    fn quiet_state() -> PlayState {
        // Single enemy parked in the far corner so nothing touches the player;
        // no kill drops so scores are exact
        let config = GameConfig {
            bonus_coin_chance: 0.0,
            ..Default::default()
        };
        let mut state = PlayState::new(&config, 12345);
        state.enemies = vec![Enemy::new(Vec2::new(0.0, 0.0), 0.0)];
        state.coins.clear();
        state
    }

    fn swing_right() -> TickInput {
        TickInput {
            attack: true,
            pointer: Vec2::new(1000.0, 490.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_coin_pickup_scores_and_removes() {
        let mut state = quiet_state();
        state.coins.push(Coin::new(state.player.pos, 20.0));

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome, TickOutcome::Running);
        assert!(state.coins.is_empty());
        assert_eq!(state.score, 50);
        assert_eq!(state.pending_coins.len(), 1);
    }

    #[test]
    fn test_distant_coin_untouched() {
        let mut state = quiet_state();
        state.coins.push(Coin::new(Vec2::new(100.0, 800.0), 16.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_coin_respawns_after_delay() {
        let mut state = quiet_state();
        state.coins.push(Coin::new(state.player.pos, 20.0));
        tick(&mut state, &TickInput::default());
        assert!(state.coins.is_empty());

        // Walk away so the respawned coin cannot be collected by accident
        state.player.pos = Vec2::new(1200.0, 20.0);
        for _ in 0..state.config.coin_respawn_ticks() {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.pending_coins.is_empty() || state.score == 100);
        // Either the coin is back on the field or it spawned under the player
        assert!(state.coins.len() == 1 || state.score == 100);
    }

    #[test]
    fn test_contact_damages_and_knocks_back() {
        let mut state = quiet_state();
        state.enemies = vec![Enemy::new(state.player.pos + Vec2::new(5.0, 0.0), 0.0)];
        let start = state.player.pos;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 75);
        assert!((state.player.pos.x - (start.x - 50.0)).abs() < 1e-4);
    }

    #[test]
    fn test_lethal_contact_kills_player() {
        let mut state = quiet_state();
        state.player.health = 25;
        state.enemies = vec![
            Enemy::new(state.player.pos, 0.0),
            Enemy::new(state.player.pos, 0.0),
        ];

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome, TickOutcome::PlayerDied);
        assert_eq!(state.player.health, 0);
        assert!(state.player.dying);
        // Dying player stays dead
        assert_eq!(
            tick(&mut state, &TickInput::default()),
            TickOutcome::PlayerDied
        );
    }

    #[test]
    fn test_knockback_can_leave_arena_until_next_update() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(5.0, 480.0);
        state.enemies = vec![Enemy::new(Vec2::new(15.0, 480.0), 0.0)];

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 75);
        assert!(state.player.pos.x < 0.0);
        assert!((state.player.pos.x + 45.0).abs() < 1e-4);

        // Move the enemy away; the next player update pulls back inside
        state.enemies[0].pos = Vec2::new(1200.0, 900.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn test_lethal_contact_skips_remaining_enemies() {
        let mut state = quiet_state();
        state.player.health = 25;
        let far = Vec2::new(100.0, 100.0);
        state.enemies = vec![
            Enemy::new(state.player.pos, 0.0),
            Enemy::new(far, 3.0),
        ];

        assert_eq!(
            tick(&mut state, &TickInput::default()),
            TickOutcome::PlayerDied
        );
        assert_eq!(state.enemies[1].pos, far);
    }

    #[test]
    fn test_short_respawn_delay_still_fires() {
        let config = GameConfig {
            bonus_coin_chance: 0.0,
            coin_respawn_ms: 5,
            ..Default::default()
        };
        let mut state = PlayState::new(&config, 7);
        state.enemies = vec![Enemy::new(Vec2::ZERO, 0.0)];
        state.coins = vec![Coin::new(state.player.pos, 20.0)];

        tick(&mut state, &TickInput::default());
        assert_eq!(state.pending_coins.len(), 1);
        tick(&mut state, &TickInput::default());
        // Either the coin is back or it respawned under the player and was taken again
        assert!(state.coins.len() == 1 || state.score == 100);
        assert!(state.coin_population() <= config.coin_cap);
    }

    #[test]
    fn test_attack_kills_and_clears_wave() {
        let mut state = quiet_state();
        state.enemies = vec![Enemy::new(Vec2::new(695.0, 482.0), 0.0)];

        let outcome = tick(&mut state, &swing_right());
        assert_eq!(outcome, TickOutcome::WaveCleared(2));
        assert_eq!(state.score, 100);
        assert_eq!(state.wave, 2);
        assert_eq!(state.enemies.len(), 2);
        assert!(state.enemies.iter().all(|e| e.alive));
        assert!(state.in_wave_transition());
    }

    #[test]
    fn test_wave_clear_grows_by_one() {
        let mut state = quiet_state();
        state.wave = 3;
        state.enemies = (0..3)
            .map(|_| Enemy::new(Vec2::new(695.0, 482.0), 0.0))
            .collect();

        tick(&mut state, &swing_right());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.wave, 4);
        assert_eq!(state.enemies.len(), 4);
        assert!(state.enemies.iter().all(|e| e.alive));
    }

    #[test]
    fn test_wave_clear_heals_capped() {
        let mut state = quiet_state();
        state.player.health = 95;
        state.enemies = vec![Enemy::new(Vec2::new(695.0, 482.0), 0.0)];
        tick(&mut state, &swing_right());
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_wave_transition_suspends_contact() {
        let mut state = quiet_state();
        state.enemies = vec![Enemy::new(Vec2::new(695.0, 482.0), 0.0)];
        tick(&mut state, &swing_right());
        assert!(state.in_wave_transition());

        // Park the new wave on top of the player: no damage while paused
        let pos = state.player.pos;
        for enemy in &mut state.enemies {
            enemy.pos = pos;
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 100);
        assert!(state.enemies.iter().all(|e| e.pos == pos));
    }

    #[test]
    fn test_wave_transition_ends() {
        let mut state = quiet_state();
        state.enemies = vec![Enemy::new(Vec2::new(695.0, 482.0), 0.0)];
        tick(&mut state, &swing_right());
        for _ in 0..state.config.wave_pause_ticks() {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.in_wave_transition());
    }

    #[test]
    fn test_bonus_coins_respect_cap() {
        let config = GameConfig {
            bonus_coin_chance: 1.0,
            coin_cap: 3,
            ..Default::default()
        };
        let mut state = PlayState::new(&config, 9);
        state.player.pos = Vec2::new(640.0, 480.0);
        state.wave = 5;
        state.enemies = (0..5)
            .map(|_| Enemy::new(Vec2::new(695.0, 482.0), 0.0))
            .collect();
        tick(&mut state, &swing_right());
        assert!(state.coin_population() <= 3);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let config = GameConfig::default();
        let mut state1 = PlayState::new(&config, 99999);
        let mut state2 = PlayState::new(&config, 99999);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                down: true,
                dash: true,
                ..Default::default()
            },
            swing_right(),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.coins.len(), state2.coins.len());
    }
}

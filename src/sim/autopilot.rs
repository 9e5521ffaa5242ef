//! Attract-mode AI
//!
//! Produces a `TickInput` from the current state: swing at the nearest enemy
//! when it is in reach, otherwise dodge it, otherwise go collect coins.

use glam::Vec2;

use super::state::PlayState;
use super::tick::TickInput;

/// Start swinging when an enemy center is this close to the player center
const STRIKE_RANGE: f32 = 70.0;
/// Back off when an enemy is this close and the sword is not ready
const DANGER_RANGE: f32 = 40.0;

pub fn autopilot(state: &PlayState) -> TickInput {
    let me = state.player.center();
    let mut input = TickInput {
        pointer: me + Vec2::X,
        ..Default::default()
    };

    // Find the most dangerous enemy (closest to the player)
    let nearest_enemy = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .map(|e| e.center())
        .min_by(|a, b| {
            a.distance(me)
                .partial_cmp(&b.distance(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut heading = Vec2::ZERO;

    if let Some(enemy) = nearest_enemy {
        let dist = enemy.distance(me);
        input.pointer = enemy;
        if dist < STRIKE_RANGE {
            input.attack = true;
        }
        if dist < DANGER_RANGE && !state.player.attack.active {
            // Dash away and let the cooldown come back
            heading = me - enemy;
            input.dash = true;
        }
    }

    // Nothing to dodge: go get the nearest coin
    if heading == Vec2::ZERO {
        let target_coin = state
            .coins
            .iter()
            .map(|c| c.hitbox().center())
            .min_by(|a, b| {
                a.distance(me)
                    .partial_cmp(&b.distance(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(coin) = target_coin {
            heading = coin - me;
        }
    }

    // Dead zone avoids jitter when the target is within one step
    const DEAD_ZONE: f32 = 2.0;
    input.right = heading.x > DEAD_ZONE;
    input.left = heading.x < -DEAD_ZONE;
    input.down = heading.y > DEAD_ZONE;
    input.up = heading.y < -DEAD_ZONE;
    if !(input.up || input.down || input.left || input.right) {
        input.dash = false;
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::coin::Coin;
    use crate::sim::enemy::Enemy;
    use crate::sim::tick::{TickOutcome, tick};

    #[test]
    fn test_attacks_enemy_in_reach() {
        let mut state = PlayState::new(&GameConfig::default(), 1);
        state.enemies = vec![Enemy::new(state.player.pos + Vec2::new(50.0, 0.0), 3.0)];
        let input = autopilot(&state);
        assert!(input.attack);
        assert!(input.pointer.x > state.player.center().x);
    }

    #[test]
    fn test_heads_for_coin_when_safe() {
        let mut state = PlayState::new(&GameConfig::default(), 1);
        state.enemies = vec![Enemy::new(Vec2::ZERO, 3.0)];
        state.coins = vec![Coin::new(Vec2::new(900.0, 480.0), 16.0)];
        let input = autopilot(&state);
        assert!(input.right);
        assert!(!input.left);
        assert!(!input.attack);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = PlayState::new(&GameConfig::default(), 2024);
        for _ in 0..3600 {
            let input = autopilot(&state);
            if tick(&mut state, &input) == TickOutcome::PlayerDied {
                break;
            }
        }
        assert!(state.score > 0);
    }
}

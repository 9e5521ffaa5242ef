//! Collision queries
//!
//! Pure functions over entity geometry; the tick decides what to do with the
//! answers. Everything is a linear scan, which is fine at these entity counts.

use glam::Vec2;

use super::coin::Coin;
use super::enemy::Enemy;
use super::player::Player;
use super::rect::Rect;

/// Result of a player/enemy proximity check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the enemy center to the player center
    pub normal: Vec2,
    pub distance: f32,
}

/// Contact if the enemy is alive and the centers are closer than `threshold`
pub fn player_enemy_contact(player: &Player, enemy: &Enemy, threshold: f32) -> Option<Contact> {
    if !enemy.alive {
        return None;
    }
    let delta = player.center() - enemy.center();
    let distance = delta.length();
    if distance < threshold {
        Some(Contact {
            // Coincident centers push along +x
            normal: delta.normalize_or(Vec2::X),
            distance,
        })
    } else {
        None
    }
}

/// True if a live enemy's hitbox overlaps the active attack rect
pub fn attack_hits_enemy(attack: Option<Rect>, enemy: &Enemy) -> bool {
    match attack {
        Some(area) => enemy.alive && area.intersects(&enemy.hitbox()),
        None => false,
    }
}

/// True if the player footprint overlaps the coin
pub fn player_touches_coin(player: &Player, coin: &Coin) -> bool {
    player.hitbox().intersects(&coin.hitbox())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::player::PlayerTuning;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), PlayerTuning::default())
    }

    #[test]
    fn test_contact_within_threshold() {
        let p = player_at(100.0, 100.0);
        let e = Enemy::new(Vec2::new(110.0, 100.0), 3.0);
        let c = player_enemy_contact(&p, &e, 20.0).expect("contact");
        assert!((c.distance - 10.0).abs() < 1e-5);
        // Enemy is to the right, so the push goes left
        assert!(c.normal.x < 0.0);
    }

    #[test]
    fn test_no_contact_with_dead_enemy() {
        let p = player_at(100.0, 100.0);
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), 3.0);
        e.alive = false;
        assert!(player_enemy_contact(&p, &e, 20.0).is_none());
    }

    #[test]
    fn test_coincident_centers_push_along_x() {
        let p = player_at(100.0, 100.0);
        let e = Enemy::new(Vec2::new(100.0, 100.0), 3.0);
        let c = player_enemy_contact(&p, &e, 20.0).unwrap();
        assert_eq!(c.normal, Vec2::X);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let p = player_at(100.0, 100.0);
        let e = Enemy::new(Vec2::new(120.0, 100.0), 3.0);
        assert!(player_enemy_contact(&p, &e, 20.0).is_none());
    }

    #[test]
    fn test_attack_requires_active_area() {
        let e = Enemy::new(Vec2::new(0.0, 0.0), 3.0);
        assert!(!attack_hits_enemy(None, &e));
        // A legitimate rect at the origin still counts
        assert!(attack_hits_enemy(Some(Rect::new(0.0, 0.0, 5.0, 5.0)), &e));
    }

    #[test]
    fn test_coin_overlap() {
        let p = player_at(100.0, 100.0);
        assert!(player_touches_coin(&p, &Coin::new(Vec2::new(100.0, 100.0), 16.0)));
        assert!(!player_touches_coin(&p, &Coin::new(Vec2::new(300.0, 300.0), 16.0)));
    }
}

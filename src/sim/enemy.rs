//! Enemies: pure-pursuit chasers spawned on the arena edge

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::clamp_to_arena;
use crate::consts::*;
use crate::render::{Canvas, colors};

/// Arena edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left of the 20x20 hitbox
    pub pos: Vec2,
    /// Units per tick
    pub speed: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            alive: true,
        }
    }

    /// Place a new enemy at a uniformly random point on a random edge
    pub fn random_edge(rng: &mut impl Rng, speed: f32) -> Self {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        Self::on_edge(edge, rng, speed)
    }

    pub fn on_edge(edge: Edge, rng: &mut impl Rng, speed: f32) -> Self {
        let pos = match edge {
            Edge::Top => Vec2::new(rng.random_range(0.0..ARENA_WIDTH), 0.0),
            Edge::Right => Vec2::new(MAX_X, rng.random_range(0.0..ARENA_HEIGHT)),
            Edge::Bottom => Vec2::new(rng.random_range(0.0..ARENA_WIDTH), MAX_Y),
            Edge::Left => Vec2::new(0.0, rng.random_range(0.0..ARENA_HEIGHT)),
        };
        Self::new(clamp_to_arena(pos), speed)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENTITY_SIZE / 2.0)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::square(self.pos, ENTITY_SIZE)
    }

    /// Step a full `speed` toward `target` (no steering, no avoidance), then clamp
    pub fn update(&mut self, target: Vec2) {
        if !self.alive {
            return;
        }
        let to_target = target - self.center();
        let dist = to_target.length();
        if dist > 0.0 {
            self.pos += to_target / dist * self.speed;
        }
        self.pos = clamp_to_arena(self.pos);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.alive {
            canvas.fill_rect(self.hitbox(), colors::ENEMY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_seeks_target_at_fixed_speed() {
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), 3.0);
        let target = Vec2::new(500.0, 110.0);
        let before = e.center().distance(target);
        e.update(target);
        let after = e.center().distance(target);
        assert!((before - after - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_full_step_even_when_close() {
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), 3.0);
        let target = e.center() + Vec2::new(1.0, 0.0);
        e.update(target);
        // Steps the whole 3 units and passes the target
        assert!((e.pos.x - 103.0).abs() < 1e-5);
        assert!(e.center().x > target.x);
    }

    #[test]
    fn test_dead_enemy_does_not_move() {
        let mut e = Enemy::new(Vec2::new(100.0, 100.0), 3.0);
        e.alive = false;
        e.update(Vec2::new(500.0, 500.0));
        assert_eq!(e.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_edge_spawns_are_on_edges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let e = Enemy::random_edge(&mut rng, 3.0);
            let on_edge =
                e.pos.x == 0.0 || e.pos.y == 0.0 || e.pos.x == MAX_X || e.pos.y == MAX_Y;
            assert!(on_edge, "enemy at {:?} not on an edge", e.pos);
            assert!(e.pos.x >= 0.0 && e.pos.x <= MAX_X);
            assert!(e.pos.y >= 0.0 && e.pos.y <= MAX_Y);
        }
    }

    #[test]
    fn test_all_edges_used() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let e = Enemy::random_edge(&mut rng, 3.0);
            if e.pos.y == 0.0 {
                seen[0] = true;
            }
            if e.pos.x == MAX_X {
                seen[1] = true;
            }
            if e.pos.y == MAX_Y {
                seen[2] = true;
            }
            if e.pos.x == 0.0 {
                seen[3] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}

//! Ball entity: kinematics, wall reflection, overlap test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Color tag used only for display and grouping. Irrelevant to the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallKind {
    #[default]
    Red,
    Blue,
}

impl BallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallKind::Red => "red",
            BallKind::Blue => "blue",
        }
    }
}

/// Table axis for wall reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A ball on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed for the ball's lifetime, always > 0
    pub radius: f32,
    pub kind: BallKind,
}

impl Ball {
    /// Create a ball from an explicit position and velocity.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, kind: BallKind) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidParam(format!(
                "ball radius must be finite and > 0, got {radius}"
            )));
        }
        if !pos.is_finite() || !vel.is_finite() {
            return Err(SimError::InvalidParam(
                "ball position and velocity must be finite".into(),
            ));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            kind,
        })
    }

    /// Create a ball at `pos` heading toward `target`, with the direction
    /// normalized to `speed`. Two-point construction: the first point places
    /// the ball, the second sets its heading.
    pub fn aimed(pos: Vec2, target: Vec2, speed: f32, radius: f32, kind: BallKind) -> Result<Self> {
        let dir = target - pos;
        if dir.length_squared() <= f32::EPSILON {
            return Err(SimError::InvalidParam(
                "aim target coincides with ball position".into(),
            ));
        }
        Self::new(pos, dir.normalize() * speed, radius, kind)
    }

    /// Advance position by one explicit Euler step. Caller guarantees dt > 0.
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Negate the velocity component along `axis`. Walls are axis-aligned,
    /// so a bounce is a sign flip rather than a general reflection.
    pub fn reflect(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.vel.x = -self.vel.x,
            Axis::Y => self.vel.y = -self.vel.y,
        }
    }

    /// Overlap test: true iff the center distance is strictly less than the
    /// sum of radii. Broad-phase only: there is no swept test, so a fast
    /// ball can tunnel past another between steps.
    pub fn collides(&self, other: &Ball) -> bool {
        let sum = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < sum * sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_radius() {
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, 0.0, BallKind::Red).is_err());
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, -1.0, BallKind::Red).is_err());
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, f32::NAN, BallKind::Red).is_err());
        assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, 0.5, BallKind::Red).is_ok());
    }

    #[test]
    fn new_rejects_non_finite_state() {
        let bad = Vec2::new(f32::INFINITY, 0.0);
        assert!(Ball::new(bad, Vec2::ZERO, 0.5, BallKind::Red).is_err());
        assert!(Ball::new(Vec2::ZERO, bad, 0.5, BallKind::Red).is_err());
    }

    #[test]
    fn aimed_normalizes_to_speed() {
        let ball = Ball::aimed(
            Vec2::new(1.0, 1.0),
            Vec2::new(4.0, 5.0),
            2.0,
            0.5,
            BallKind::Blue,
        )
        .unwrap();
        // Direction (3, 4) has length 5
        assert!((ball.vel.x - 1.2).abs() < 1e-6);
        assert!((ball.vel.y - 1.6).abs() < 1e-6);
        assert!((ball.vel.length() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn aimed_rejects_coincident_target() {
        let p = Vec2::new(3.0, 3.0);
        assert!(Ball::aimed(p, p, 1.0, 0.5, BallKind::Red).is_err());
    }

    #[test]
    fn advance_is_exact_euler() {
        let mut ball = Ball::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(0.5, -0.25),
            0.5,
            BallKind::Red,
        )
        .unwrap();
        ball.advance(0.5);
        // All values exactly representable in f32
        assert_eq!(ball.pos, Vec2::new(1.25, 1.875));
        assert_eq!(ball.vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn reflect_flips_one_component() {
        let mut ball =
            Ball::new(Vec2::ZERO, Vec2::new(1.0, -2.0), 0.5, BallKind::Red).unwrap();
        ball.reflect(Axis::X);
        assert_eq!(ball.vel, Vec2::new(-1.0, -2.0));
        ball.reflect(Axis::Y);
        assert_eq!(ball.vel, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn collides_is_strict_at_the_boundary() {
        let a = Ball::new(Vec2::ZERO, Vec2::ZERO, 0.5, BallKind::Red).unwrap();
        // Exactly touching: distance == r1 + r2 == 1.0
        let touching = Ball::new(Vec2::new(1.0, 0.0), Vec2::ZERO, 0.5, BallKind::Blue).unwrap();
        assert!(!a.collides(&touching));
        // Just inside
        let inside = Ball::new(Vec2::new(0.99, 0.0), Vec2::ZERO, 0.5, BallKind::Blue).unwrap();
        assert!(a.collides(&inside));
        // Well apart: spacing 2.0 vs radius sum 1.0
        let apart = Ball::new(Vec2::new(2.0, 0.0), Vec2::ZERO, 0.5, BallKind::Blue).unwrap();
        assert!(!a.collides(&apart));
    }

    #[test]
    fn collides_is_symmetric() {
        let a = Ball::new(Vec2::ZERO, Vec2::ZERO, 0.3, BallKind::Red).unwrap();
        let b = Ball::new(Vec2::new(0.4, 0.2), Vec2::ZERO, 0.2, BallKind::Blue).unwrap();
        assert_eq!(a.collides(&b), b.collides(&a));
    }
}

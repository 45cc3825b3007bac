//! Billiard table and the fixed-timestep stepping loop.

use serde::{Deserialize, Serialize};

use super::ball::{Axis, Ball};
use super::collision::resolve_collision;
use crate::error::{Result, SimError};

/// The billiard table: an axis-aligned box with corners at (0, 0) and
/// (width, height), the balls on it, and the simulation clock.
///
/// The table exclusively owns its balls; they live until the simulation is
/// dropped (no removal or merging).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub width: f32,
    pub height: f32,
    /// Insertion order is the pairwise iteration order.
    pub balls: Vec<Ball>,
    time: f32,
}

impl Simulation {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(SimError::InvalidParam(format!(
                "table dimensions must be finite and > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            balls: Vec::new(),
            time: 0.0,
        })
    }

    /// Elapsed simulated time.
    pub fn current_time(&self) -> f32 {
        self.time
    }

    /// Append a ball to the table.
    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Advance the whole system by one fixed increment:
    ///
    /// 1. Euler-advance every ball and reflect it off the walls immediately,
    ///    using its already-updated position. Both axes are checked
    ///    independently, so a corner hit flips both components in one tick.
    ///    Positions are never snapped back to the boundary: a ball that is
    ///    still past a wall on the next tick flips again.
    /// 2. Resolve each unordered pair (i, j), i < j, at most once, in index
    ///    order. A ball overlapping two partners this tick is resolved
    ///    against each sequentially, not as a simultaneous three-body
    ///    contact.
    /// 3. Advance the clock by `dt`.
    ///
    /// Errors only on a non-positive or non-finite `dt`; under normal
    /// operation `step` never fails and can be called indefinitely.
    pub fn step(&mut self, dt: f32) -> Result<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidParam(format!(
                "dt must be finite and > 0, got {dt}"
            )));
        }

        for ball in &mut self.balls {
            ball.advance(dt);
            if ball.pos.x > self.width - ball.radius || ball.pos.x < ball.radius {
                ball.reflect(Axis::X);
            }
            if ball.pos.y > self.height - ball.radius || ball.pos.y < ball.radius {
                ball.reflect(Axis::Y);
            }
        }

        for i in 0..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if a.collides(b) {
                    resolve_collision(a, b);
                }
            }
        }

        self.time += dt;
        Ok(())
    }
}

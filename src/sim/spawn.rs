//! Seeded random ball placement.
//!
//! Stands in for an interactive input provider: positions are rejection
//! sampled so no pair starts overlapping, and each ball gets a random unit
//! heading scaled to the launch speed. Deterministic under a fixed seed.

use glam::Vec2;
use rand::Rng;

use super::ball::{Ball, BallKind};
use super::table::Simulation;
use crate::error::{Result, SimError};

/// Placement attempts per ball before giving up on a crowded table.
const MAX_PLACEMENT_TRIES: u32 = 1000;

/// Scatter `reds` red and `blues` blue balls across the table, fully inside
/// the walls and not overlapping any ball already present.
pub fn scatter<R: Rng>(
    sim: &mut Simulation,
    rng: &mut R,
    reds: u32,
    blues: u32,
    radius: f32,
    speed: f32,
) -> Result<()> {
    let kinds = std::iter::repeat_n(BallKind::Red, reds as usize)
        .chain(std::iter::repeat_n(BallKind::Blue, blues as usize));
    for kind in kinds {
        let ball = place_one(sim, rng, radius, speed, kind)?;
        sim.add_ball(ball);
    }
    log::debug!("scattered {} balls", reds + blues);
    Ok(())
}

fn place_one<R: Rng>(
    sim: &Simulation,
    rng: &mut R,
    radius: f32,
    speed: f32,
    kind: BallKind,
) -> Result<Ball> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SimError::InvalidParam(format!(
            "ball radius must be finite and > 0, got {radius}"
        )));
    }
    if 2.0 * radius >= sim.width.min(sim.height) {
        return Err(SimError::InvalidParam(format!(
            "ball radius {radius} does not fit a {}x{} table",
            sim.width, sim.height
        )));
    }

    for _ in 0..MAX_PLACEMENT_TRIES {
        let pos = Vec2::new(
            rng.random_range(radius..sim.width - radius),
            rng.random_range(radius..sim.height - radius),
        );
        if sim
            .balls
            .iter()
            .any(|b| b.pos.distance(pos) < b.radius + radius)
        {
            continue;
        }
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        let vel = Vec2::new(theta.cos(), theta.sin()) * speed;
        return Ball::new(pos, vel, radius, kind);
    }

    Err(SimError::InvalidParam(format!(
        "no room for a ball of radius {radius} after {MAX_PLACEMENT_TRIES} tries"
    )))
}

//! Headless driver loop.
//!
//! The simulation has no internal scheduler: someone must call `step`
//! repeatedly and decide when to stop. `run` owns that loop with two
//! injected stop conditions, a simulated-time limit and an external cancel
//! flag, plus an observer invoked after every tick. The observer is where a
//! renderer would read ball state; it gets a shared reference and cannot
//! mutate the simulation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SimError};
use crate::sim::Simulation;

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Fixed timestep per tick
    pub dt: f32,
    /// Simulated-time limit
    pub max_time: f32,
}

/// Why the driver loop exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Simulated time reached `max_time`
    TimeLimit,
    /// The cancel flag was raised
    Cancelled,
}

/// Step `sim` until the time limit is reached or `cancel` is set. The
/// cancel flag is checked before every tick, so a flag raised from an
/// observer takes effect on the next iteration.
pub fn run<F>(
    sim: &mut Simulation,
    config: &RunConfig,
    cancel: &AtomicBool,
    mut observe: F,
) -> Result<StopReason>
where
    F: FnMut(&Simulation),
{
    if !config.dt.is_finite() || config.dt <= 0.0 {
        return Err(SimError::InvalidParam(format!(
            "dt must be finite and > 0, got {}",
            config.dt
        )));
    }
    if !config.max_time.is_finite() || config.max_time < 0.0 {
        return Err(SimError::InvalidParam(format!(
            "max_time must be finite and >= 0, got {}",
            config.max_time
        )));
    }

    log::info!(
        "running {} balls to t = {} (dt = {})",
        sim.balls.len(),
        config.max_time,
        config.dt
    );

    while sim.current_time() < config.max_time {
        if cancel.load(Ordering::Relaxed) {
            log::info!("cancelled at t = {:.2}", sim.current_time());
            return Ok(StopReason::Cancelled);
        }
        sim.step(config.dt)?;
        observe(sim);
    }

    log::info!("time limit reached at t = {:.2}", sim.current_time());
    Ok(StopReason::TimeLimit)
}

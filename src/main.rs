//! Headless billiards demo
//!
//! Scatters a few balls on the table and runs the simulation to its time
//! limit, logging ball state along the way. Pass a JSON config path as the
//! first argument to override the default scenario.

use std::sync::atomic::AtomicBool;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use billiards::runner::{self, RunConfig};
use billiards::sim::{Simulation, scatter};
use billiards::{Result, SimConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(config.width, config.height)?;
    let mut rng = Pcg32::seed_from_u64(config.seed);
    scatter(
        &mut sim,
        &mut rng,
        config.red_balls,
        config.blue_balls,
        config.ball_radius,
        config.ball_speed,
    )?;

    for ball in &sim.balls {
        log::info!(
            "{} ball at ({:.2}, {:.2}) heading ({:.2}, {:.2})",
            ball.kind.as_str(),
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y
        );
    }

    let run_config = RunConfig {
        dt: config.dt,
        max_time: config.max_time,
    };
    let cancel = AtomicBool::new(false);
    let mut ticks = 0u64;
    let reason = runner::run(&mut sim, &run_config, &cancel, |sim| {
        ticks += 1;
        if ticks % 10 == 0 {
            log::info!("t = {:.1}", sim.current_time());
            for ball in &sim.balls {
                log::debug!(
                    "  {} ({:.2}, {:.2})",
                    ball.kind.as_str(),
                    ball.pos.x,
                    ball.pos.y
                );
            }
        }
    })?;

    log::info!("simulation stopped: {reason:?} after {ticks} ticks");
    Ok(())
}

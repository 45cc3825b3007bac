//! Billiards - a fixed-timestep 2D billiard table simulation
//!
//! Core modules:
//! - `sim`: Deterministic physics (balls, wall bounces, elastic collisions)
//! - `config`: Data-driven scenario parameters
//! - `runner`: Headless driver loop with injected stop conditions
//!
//! The `sim` module is pure and deterministic: fixed timestep only, seeded
//! RNG only, stable iteration order, no rendering or platform dependencies.
//! Rendering and input acquisition are external collaborators that read
//! ball state between ticks and must not mutate it.

pub mod config;
pub mod error;
pub mod runner;
pub mod sim;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use runner::{RunConfig, StopReason, run};
pub use sim::{Axis, Ball, BallKind, Simulation, resolve_collision};

/// Default scenario parameters
pub mod consts {
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 0.1;
    /// Simulated-time limit for the default scenario
    pub const MAX_TIME: f32 = 10.0;

    /// Table dimensions
    pub const TABLE_WIDTH: f32 = 10.0;
    pub const TABLE_HEIGHT: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.5;
    /// Launch speed: aim directions are normalized to this magnitude
    pub const BALL_SPEED: f32 = 1.0;
}

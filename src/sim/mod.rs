//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (ball insertion order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod spawn;
pub mod table;

pub use ball::{Axis, Ball, BallKind};
pub use collision::{COINCIDENT_EPS, resolve_collision};
pub use spawn::scatter;
pub use table::Simulation;

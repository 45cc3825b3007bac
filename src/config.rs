//! Scenario configuration
//!
//! Data-driven parameters for a run, loadable from JSON. Fields left out of
//! a config file fall back to the defaults of the reference scenario.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Table width
    pub width: f32,
    /// Table height
    pub height: f32,
    /// Fixed timestep
    pub dt: f32,
    /// Simulated-time limit for the driver loop
    pub max_time: f32,
    /// Seed for ball placement
    pub seed: u64,
    pub red_balls: u32,
    pub blue_balls: u32,
    pub ball_radius: f32,
    /// Launch speed for scattered balls
    pub ball_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
            dt: SIM_DT,
            max_time: MAX_TIME,
            seed: 2023,
            red_balls: 2,
            blue_balls: 2,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidParam(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
            Ok(())
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("dt", self.dt)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        if !self.max_time.is_finite() || self.max_time < 0.0 {
            return Err(SimError::InvalidParam(format!(
                "max_time must be finite and >= 0, got {}",
                self.max_time
            )));
        }
        Ok(())
    }
}

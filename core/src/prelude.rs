use crate::interface::controls::{HOURS, INITIAL_SPEED, RATE_PERCENT};
use serde::{Deserialize, Serialize};

/// Inputs for one render cycle, rebuilt from the current control state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub initial_speed: f64,
    pub rate_percent: i32,
    pub hours: u32,
}

impl ModelParameters {
    /// Validates raw values against the slider domains.
    pub fn new(initial_speed: f64, rate_percent: i32, hours: u32) -> ModelResult<Self> {
        if !initial_speed.is_finite()
            || initial_speed < INITIAL_SPEED.min as f64
            || initial_speed > INITIAL_SPEED.max as f64
        {
            return Err(ModelError::OutOfBounds {
                field: "initial_speed",
                value: initial_speed,
                min: INITIAL_SPEED.min,
                max: INITIAL_SPEED.max,
            });
        }
        if !RATE_PERCENT.contains(rate_percent) {
            return Err(ModelError::OutOfBounds {
                field: "rate_percent",
                value: rate_percent as f64,
                min: RATE_PERCENT.min,
                max: RATE_PERCENT.max,
            });
        }
        if hours > HOURS.max as u32 {
            return Err(ModelError::OutOfBounds {
                field: "hours",
                value: hours as f64,
                min: HOURS.min,
                max: HOURS.max,
            });
        }

        Ok(Self {
            initial_speed,
            rate_percent,
            hours,
        })
    }

    /// Fractional per-hour rate derived from the percent control.
    pub fn rate(&self) -> f64 {
        self.rate_percent as f64 / 100.0
    }

    pub fn duration(&self) -> f64 {
        self.hours as f64
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            initial_speed: INITIAL_SPEED.default as f64,
            rate_percent: RATE_PERCENT.default,
            hours: HOURS.default as u32,
        }
    }
}

/// Common error type for model construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: i32,
        max: i32,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;

pub mod controls;
pub mod text;

pub use controls::{SliderSpec, HOURS, INITIAL_SPEED, RATE_PERCENT};

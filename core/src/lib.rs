//! Core model and classroom helper for the exponential speed applet.
//!
//! The modules cover the closed-form speed model `S(t) = S0 * (1 + r)^t`,
//! the sampled curve used for plotting, the bounded slider domains, and the
//! keyword-driven chat helper with its per-session transcript.

pub mod chat;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{ModelError, ModelParameters, ModelResult};

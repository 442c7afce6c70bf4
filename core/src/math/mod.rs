pub mod model;
pub mod sampling;
pub mod stats;

pub use model::{evaluate, Interpretation};
pub use sampling::{sample_times, SAMPLE_COUNT};
pub use stats::CurveStats;

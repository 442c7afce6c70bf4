pub mod curve;
pub mod report;

pub use curve::{Curve, CurvePoint, PlotBounds};
pub use report::{result_sentence, ModelReport, ReportBuilder};

use crate::math::{evaluate, CurveStats, Interpretation};
use crate::prelude::ModelParameters;
use crate::processing::curve::Curve;
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// Everything one render cycle produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub parameters: ModelParameters,
    pub curve: Curve,
    pub final_speed: f64,
    pub interpretation: Interpretation,
    pub stats: CurveStats,
    pub summary: String,
}

/// Formats the displayed result to exactly two decimals.
pub fn result_sentence(hours: u32, speed: f64) -> String {
    format!(
        "After {} hours, the speed is approximately {:.2} mph.",
        hours, speed
    )
}

/// Runs the evaluate-sample-interpret pass for a render cycle.
#[derive(Debug)]
pub struct ReportBuilder {
    logger: LogManager,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    pub fn build(&self, params: &ModelParameters) -> ModelReport {
        let curve = Curve::sample(params);
        let final_speed = evaluate(params.duration(), params.initial_speed, params.rate());
        let interpretation = Interpretation::from_rate(params.rate());
        let stats = curve.stats();
        let summary = result_sentence(params.hours, final_speed);

        self.logger.record(&format!(
            "render s0={} r={}% t={}h -> {:.4} ({}, {} points)",
            params.initial_speed,
            params.rate_percent,
            params.hours,
            final_speed,
            interpretation.label(),
            curve.len()
        ));

        ModelReport {
            parameters: *params,
            curve,
            final_speed,
            interpretation,
            stats,
            summary,
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_classroom_example() {
        let params = ModelParameters::new(90.0, 8, 2).unwrap();
        let report = ReportBuilder::new().build(&params);
        assert_eq!(
            report.summary,
            "After 2 hours, the speed is approximately 104.98 mph."
        );
        assert_eq!(report.interpretation, Interpretation::Growth);
        assert_eq!(report.curve.len(), 200);
    }

    #[test]
    fn final_speed_equals_last_curve_point() {
        for (s0, pct, hours) in [(30.0, -20, 24), (90.0, 8, 2), (115.0, 0, 9), (45.0, 3, 0)] {
            let params = ModelParameters::new(s0, pct, hours).unwrap();
            let report = ReportBuilder::new().build(&params);
            assert_eq!(report.final_speed, report.curve.last().unwrap().speed);
        }
    }

    #[test]
    fn zero_duration_reports_initial_speed() {
        let params = ModelParameters::new(65.0, -12, 0).unwrap();
        let report = ReportBuilder::new().build(&params);
        assert_eq!(report.curve.len(), 1);
        assert_eq!(
            report.summary,
            "After 0 hours, the speed is approximately 65.00 mph."
        );
    }

    #[test]
    fn report_serializes_interpretation_lowercase() {
        let report = ReportBuilder::new().build(&ModelParameters::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["interpretation"], "growth");
        assert_eq!(json["parameters"]["rate_percent"], 8);
    }
}

use crate::math::{evaluate, sample_times, CurveStats};
use crate::prelude::ModelParameters;
use serde::{Deserialize, Serialize};

/// Axis ranges for drawing a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    pub speed: f64,
}

/// Sampled `(t, speed)` sequence for one set of parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub points: Vec<CurvePoint>,
}

impl Curve {
    pub fn sample(params: &ModelParameters) -> Self {
        let s0 = params.initial_speed;
        let rate = params.rate();
        let times = sample_times(params.duration());
        let speeds = times.mapv(|t| evaluate(t, s0, rate));

        let points = times
            .iter()
            .zip(speeds.iter())
            .map(|(&time, &speed)| CurvePoint { time, speed })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.speed).collect()
    }

    pub fn stats(&self) -> CurveStats {
        CurveStats::from_speeds(&self.speeds())
    }

    /// Axis ranges with a margin around the speed range. Flat or single-point
    /// curves still get a non-empty y range and at least one hour on x.
    pub fn plot_bounds(&self) -> PlotBounds {
        let stats = self.stats();
        let x_max = self.last().map(|p| p.time).unwrap_or(0.0).max(1.0);
        let pad = if stats.span() > f64::EPSILON {
            stats.span() * 0.05
        } else {
            5.0
        };
        PlotBounds {
            x_max,
            y_min: (stats.min_speed - pad).max(0.0),
            y_max: stats.max_speed + pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_renders_single_initial_point() {
        for rate_percent in [-20, 0, 20] {
            let params = ModelParameters::new(55.0, rate_percent, 0).unwrap();
            let curve = Curve::sample(&params);
            assert_eq!(
                curve.points,
                vec![CurvePoint {
                    time: 0.0,
                    speed: 55.0
                }]
            );
        }
    }

    #[test]
    fn nonzero_duration_has_full_sample_count() {
        let params = ModelParameters::new(90.0, 8, 2).unwrap();
        let curve = Curve::sample(&params);
        assert_eq!(curve.len(), 200);
        assert_eq!(curve.points[0].speed, 90.0);
    }

    #[test]
    fn last_point_lands_on_requested_duration() {
        for hours in [1, 5, 13, 24] {
            let params = ModelParameters::new(120.0, -20, hours).unwrap();
            let curve = Curve::sample(&params);
            let last = curve.last().unwrap();
            assert_eq!(last.time, hours as f64);
            assert_eq!(last.speed, evaluate(hours as f64, 120.0, -0.2));
        }
    }

    #[test]
    fn decay_curve_is_monotonic() {
        let params = ModelParameters::new(100.0, -10, 6).unwrap();
        let speeds = Curve::sample(&params).speeds();
        assert!(speeds.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn plot_bounds_are_never_empty() {
        let params = ModelParameters::new(70.0, 0, 0).unwrap();
        let bounds = Curve::sample(&params).plot_bounds();
        assert_eq!(bounds.x_max, 1.0);
        assert_eq!(bounds.y_min, 65.0);
        assert_eq!(bounds.y_max, 75.0);
    }

    #[test]
    fn plot_bounds_enclose_curve() {
        let params = ModelParameters::new(90.0, 8, 2).unwrap();
        let curve = Curve::sample(&params);
        let bounds = curve.plot_bounds();
        assert_eq!(bounds.x_max, 2.0);
        assert!(curve
            .points
            .iter()
            .all(|p| p.speed > bounds.y_min && p.speed < bounds.y_max));
    }

    #[test]
    fn constant_rate_is_flat() {
        let params = ModelParameters::new(70.0, 0, 12).unwrap();
        let stats = Curve::sample(&params).stats();
        assert_eq!(stats.min_speed, 70.0);
        assert_eq!(stats.max_speed, 70.0);
    }
}

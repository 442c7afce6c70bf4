use serde::{Deserialize, Serialize};

/// Speed range across a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveStats {
    pub min_speed: f64,
    pub max_speed: f64,
}

impl CurveStats {
    pub fn from_speeds(speeds: &[f64]) -> Self {
        if speeds.is_empty() {
            return Self::default();
        }
        let min_speed = speeds.iter().copied().fold(f64::INFINITY, f64::min);
        let max_speed = speeds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            min_speed,
            max_speed,
        }
    }

    pub fn span(&self) -> f64 {
        self.max_speed - self.min_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_zero_range() {
        assert_eq!(CurveStats::from_speeds(&[]), CurveStats::default());
    }

    #[test]
    fn tracks_extremes() {
        let stats = CurveStats::from_speeds(&[90.0, 97.2, 104.976]);
        assert_eq!(stats.min_speed, 90.0);
        assert_eq!(stats.max_speed, 104.976);
        assert!((stats.span() - 14.976).abs() < 1e-9);
    }
}

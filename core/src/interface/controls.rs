use serde::Serialize;

/// Bounded integer domain backing one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
}

pub const INITIAL_SPEED: SliderSpec = SliderSpec {
    label: "Initial Speed (mph)",
    min: 30,
    max: 120,
    step: 5,
    default: 90,
};

pub const RATE_PERCENT: SliderSpec = SliderSpec {
    label: "Rate of Change (% per hour)",
    min: -20,
    max: 20,
    step: 1,
    default: 8,
};

pub const HOURS: SliderSpec = SliderSpec {
    label: "Time (hours)",
    min: 0,
    max: 24,
    step: 1,
    default: 2,
};

impl SliderSpec {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into the domain and rounds it to the nearest step from `min`.
    pub fn snap(&self, value: f64) -> i32 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min as f64, self.max as f64);
        let step = self.step.max(1) as f64;
        let steps = ((clamped - self.min as f64) / step).round();
        (self.min + steps as i32 * self.step.max(1)).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_clamps_to_domain() {
        assert_eq!(INITIAL_SPEED.snap(10.0), 30);
        assert_eq!(INITIAL_SPEED.snap(500.0), 120);
        assert_eq!(RATE_PERCENT.snap(-40.0), -20);
        assert_eq!(HOURS.snap(-1.0), 0);
    }

    #[test]
    fn snap_rounds_to_step() {
        assert_eq!(INITIAL_SPEED.snap(92.0), 90);
        assert_eq!(INITIAL_SPEED.snap(93.0), 95);
        assert_eq!(RATE_PERCENT.snap(7.6), 8);
        assert_eq!(HOURS.snap(2.2), 2);
    }

    #[test]
    fn snap_falls_back_to_default_for_nan() {
        assert_eq!(HOURS.snap(f64::NAN), HOURS.default);
    }

    #[test]
    fn defaults_lie_inside_domains() {
        for spec in [INITIAL_SPEED, RATE_PERCENT, HOURS] {
            assert!(spec.contains(spec.default), "{}", spec.label);
            assert_eq!(spec.snap(spec.default as f64), spec.default);
        }
    }
}

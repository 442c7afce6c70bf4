use ndarray::Array1;

/// Number of evenly spaced samples used for a non-zero duration.
pub const SAMPLE_COUNT: usize = 200;

/// Time grid for the plotted curve.
///
/// A zero duration yields the single point `{0}`; otherwise the grid spans
/// `[0, duration]` inclusive and its last entry is exactly `duration`.
pub fn sample_times(duration: f64) -> Array1<f64> {
    if duration == 0.0 {
        return Array1::from_elem(1, 0.0);
    }

    let mut times = Array1::linspace(0.0, duration, SAMPLE_COUNT);
    times[SAMPLE_COUNT - 1] = duration;
    times
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_single_point() {
        let times = sample_times(0.0);
        assert_eq!(times.len(), 1);
        assert_eq!(times[0], 0.0);
    }

    #[test]
    fn grid_is_inclusive_and_pinned() {
        for hours in 1..=24 {
            let duration = hours as f64;
            let times = sample_times(duration);
            assert_eq!(times.len(), SAMPLE_COUNT);
            assert_eq!(times[0], 0.0);
            assert_eq!(times[SAMPLE_COUNT - 1], duration);
        }
    }

    #[test]
    fn grid_is_evenly_spaced() {
        let times = sample_times(7.0);
        let step = 7.0 / (SAMPLE_COUNT as f64 - 1.0);
        for pair in times.as_slice().unwrap().windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }
}

/// An arithmetic mean maintained incrementally.
///
/// Each update moves the mean by `(value - mean) / n` instead of accumulating a
/// raw sum, so precision does not degrade as the number of samples grows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    count: u64,
    mean: f64,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one more sample into the mean.
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// The current mean, or `0.0` when no samples have been pushed.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Extend<f64> for RunningMean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    // Using a small epsilon for floating point comparisons in tests
    const EPSILON: f64 = 1e-10;

    fn mean_of(values: &[f64]) -> f64 {
        let mut running = RunningMean::new();
        running.extend(values.iter().copied());
        running.mean()
    }

    #[test]
    fn test_running_mean_empty() {
        assert!(RunningMean::new().is_empty());
        assert_eq!(mean_of(&[]), 0.0);
    }

    #[test]
    fn test_running_mean_single_value() {
        assert_eq!(mean_of(&[5.0]), 5.0);
    }

    #[test]
    fn test_running_mean_identical_values() {
        assert_eq!(mean_of(&[4.0, 4.0, 4.0]), 4.0);
    }

    #[test]
    fn test_running_mean_simple_range() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean_of(&values) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_running_mean_does_not_drift() {
        // Summing 0.1 a million times drifts; the incremental mean does not.
        let mut running = RunningMean::new();
        for _ in 0..1_000_000 {
            running.push(0.1);
        }
        assert_eq!(running.count(), 1_000_000);
        assert_eq!(running.mean(), 0.1);
    }
}

/// Running extrema of every elevation the generator produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl Default for MinMax {
    fn default() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }
}

impl MinMax {
    pub fn add_value(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn range(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Maps `value` into [0, 1] relative to the seen extrema.
    /// A flat or empty range maps everything to 0.
    pub fn normalise(&self, value: f32) -> f32 {
        let range = self.range();
        if range <= f32::EPSILON {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_starts_empty() {
        let min_max = MinMax::default();
        assert!(min_max.is_empty());
        assert_eq!(min_max.range(), 0.0);
        assert_eq!(min_max.normalise(3.0), 0.0);
    }

    #[test]
    fn test_tracks_extrema() {
        let mut min_max = MinMax::default();
        for value in [1.2, 0.9, 1.5, 1.0] {
            min_max.add_value(value);
        }
        assert_eq!(min_max.min, 0.9);
        assert_eq!(min_max.max, 1.5);
        assert!(!min_max.is_empty());

        min_max.reset();
        assert!(min_max.is_empty());
    }

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(2.0, 0.5)]
    #[case(3.0, 1.0)]
    #[case(5.0, 1.0)]
    #[case(-1.0, 0.0)]
    fn test_normalise(#[case] value: f32, #[case] expected: f32) {
        let mut min_max = MinMax::default();
        min_max.add_value(1.0);
        min_max.add_value(3.0);
        assert!((min_max.normalise(value) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_single_value_normalises_to_zero() {
        let mut min_max = MinMax::default();
        min_max.add_value(1.0);
        assert_eq!(min_max.normalise(1.0), 0.0);
    }
}

use crate::ports::RandomSource;

/// Returns the same value on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    value: f64,
}

impl FixedRandomSource {
    /// Values outside `[0, 1)` are clamped into it.
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self { value }
    }
}

impl RandomSource for FixedRandomSource {
    fn next_unit(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_value() {
        let source = FixedRandomSource::new(0.25);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.25);
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(FixedRandomSource::new(-3.0).next_unit(), 0.0);
        assert!(FixedRandomSource::new(1.0).next_unit() < 1.0);
        assert_eq!(FixedRandomSource::new(f64::NAN).next_unit(), 0.0);
    }
}

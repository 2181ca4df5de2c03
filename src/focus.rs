/// Fractional productivity multiplier in [0, 1], applied to the nominal
/// 8-hour day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FocusFactor(f64);

impl FocusFactor {
    /// Normalize a raw input into the unit interval: values above 100 clamp
    /// to 1, values in (1, 100] are read as percentages, values in [0, 1]
    /// pass through unchanged.
    pub fn normalize(raw: f64) -> Self {
        if raw > 100.0 {
            Self(1.0)
        } else if raw > 1.0 {
            Self(raw / 100.0)
        } else {
            Self(raw)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Mean of a team's personal factors. Returns 0 for an empty slice; the
    /// planner rejects that case before calling.
    pub fn mean(factors: &[FocusFactor]) -> f64 {
        if factors.is_empty() {
            return 0.0;
        }
        factors.iter().map(|f| f.0).sum::<f64>() / factors.len() as f64
    }
}

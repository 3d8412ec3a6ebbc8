use crate::errors::{AppError, AppResult};

/// Consistency/form weights normalized to percentages summing to 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    consistency: f64,
    form: f64,
}

impl Weights {
    /// Accepts any non-negative scale (0-1 sliders, 0-100 percentages)
    pub fn new(consistency: f64, form: f64) -> AppResult<Self> {
        let total = consistency + form;
        let valid = consistency.is_finite()
            && form.is_finite()
            && consistency >= 0.0
            && form >= 0.0
            && total > 0.0;

        if !valid {
            return Err(AppError::InvalidWeights { consistency, form });
        }

        Ok(Self {
            consistency: consistency / total * 100.0,
            form: form / total * 100.0,
        })
    }

    /// 50/50 weights used for key-player ranking
    pub fn equal() -> Self {
        Self {
            consistency: 50.0,
            form: 50.0,
        }
    }

    #[cfg(test)]
    fn consistency_percent(&self) -> f64 {
        self.consistency
    }

    #[cfg(test)]
    fn form_percent(&self) -> f64 {
        self.form
    }

    /// Weighted blend of the two metrics
    pub fn blend(&self, consistency: f64, form: f64) -> f64 {
        consistency * (self.consistency / 100.0) + form * (self.form / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_percentages() {
        let weights = Weights::new(0.3, 0.7).unwrap();
        assert!((weights.consistency_percent() - 30.0).abs() < 1e-9);
        assert!((weights.form_percent() - 70.0).abs() < 1e-9);

        let same = Weights::new(30.0, 70.0).unwrap();
        assert!((same.blend(50.0, 80.0) - weights.blend(50.0, 80.0)).abs() < 1e-9);
    }

    #[test]
    fn one_sided_weight_is_allowed() {
        let weights = Weights::new(0.0, 1.0).unwrap();
        assert_eq!(weights.blend(90.0, 40.0), 40.0);
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert!(matches!(Weights::new(0.0, 0.0), Err(AppError::InvalidWeights { .. })));
        assert!(Weights::new(-1.0, 2.0).is_err());
        assert!(Weights::new(f64::NAN, 1.0).is_err());
        assert!(Weights::new(f64::INFINITY, 1.0).is_err());
    }
}

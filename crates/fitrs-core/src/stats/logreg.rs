use crate::fit::fiterror::{FitError, FitOutcome};
use crate::stats::linreg::{num, signed, LinReg};

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogReg {
    /// a in y = a + b * ln(x)
    pub a: f64,
    /// b in y = a + b * ln(x)
    pub b: f64,
}

impl fmt::Display for LogReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {} {} * ln(x)", num(self.a), signed(self.b))
    }
}

impl LogReg {
    pub fn from_val(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluate y = a + b * ln(x). Only meaningful for x > 0.
    pub fn calculate(&self, x: f64) -> f64 {
        self.a + self.b * x.ln()
    }

    /// Train from (x, y) data with x > 0 for all points by fitting y against ln(x).
    pub fn train(x: &[f64], y: &[f64]) -> FitOutcome<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.iter().any(|&v| v <= 0.0) {
            return Err(FitError::NonPositiveX);
        }

        let ln_x: Vec<f64> = x.iter().map(|v| v.ln()).collect();
        let lin = LinReg::train(&ln_x, y)?;

        Ok(Self { a: lin.intercept, b: lin.slope })
    }
}

#[cfg(test)]
mod tests {
    use super::LogReg;
    use crate::fit::fiterror::FitError;

    #[test]
    fn test_logreg_exact_curve() {
        let x = [0.5, 1., 2., 4., 8.];
        let y: Vec<f64> = x.iter().map(|xi: &f64| 1.5 + 2.0 * xi.ln()).collect();

        let model = LogReg::train(&x, &y).unwrap();
        assert!((model.a - 1.5).abs() < 1e-12);
        assert!((model.b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_logreg_rejects_non_positive_x() {
        assert_eq!(LogReg::train(&[0., 1.], &[1., 2.]), Err(FitError::NonPositiveX));
    }

    #[test]
    fn test_logreg_display() {
        assert_eq!(LogReg::from_val(1.0, -0.5).to_string(), "y = 1.000000 - 0.500000 * ln(x)");
    }
}

use crate::fit::fiterror::{FitError, FitOutcome};
use crate::stats::linreg::{num, LinReg};

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExpReg {
    /// a in y = a * exp(b * x)
    pub a: f64,
    /// b in y = a * exp(b * x)
    pub b: f64,
}

impl fmt::Display for ExpReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {} * exp({} * x)", num(self.a), num(self.b))
    }
}

impl ExpReg {
    pub fn new() -> Self {
        Self { a: 1.0, b: 0.0 }
    }

    pub fn from_val(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluate y = a * exp(b * x)
    pub fn calculate(&self, x: f64) -> f64 {
        self.a * (self.b * x).exp()
    }

    /// Train from (x, y) data with y > 0 for all points.
    /// Uses log-transform: ln(y) = ln(a) + b * x
    pub fn train(x: &[f64], y: &[f64]) -> FitOutcome<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if y.iter().any(|&v| v <= 0.0) {
            return Err(FitError::NonPositiveY);
        }

        let ln_y: Vec<f64> = y.iter().map(|v| v.ln()).collect();
        let lin = LinReg::train(x, &ln_y)?;

        Ok(Self { a: lin.intercept.exp(), b: lin.slope })
    }
}

impl Default for ExpReg {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ExpReg;
    use crate::fit::fiterror::FitError;

    #[test]
    fn test_expreg_recovers_e_to_the_x() {
        let x = [1., 2., 3.];
        let y = [2.718, 7.389, 20.086];

        let model = ExpReg::train(&x, &y).unwrap();
        assert!((model.a - 1.0).abs() < 1e-2);
        assert!((model.b - 1.0).abs() < 1e-2);
    }

    #[test]
    fn test_expreg_exact_growth() {
        let x: Vec<f64> = (0..6).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|xi| 3.0 * (-0.4 * xi).exp()).collect();

        let model = ExpReg::train(&x, &y).unwrap();
        assert!((model.a - 3.0).abs() < 1e-9);
        assert!((model.b + 0.4).abs() < 1e-9);
        assert!((model.calculate(1.0) - 3.0 * (-0.4f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_expreg_rejects_non_positive_y() {
        assert_eq!(ExpReg::train(&[1., 2.], &[1., 0.]), Err(FitError::NonPositiveY));
    }

    #[test]
    fn test_expreg_degenerate_x() {
        assert_eq!(ExpReg::train(&[1., 1.], &[1., 2.]), Err(FitError::DegenerateX));
    }
}

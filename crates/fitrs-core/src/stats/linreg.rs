use crate::fit::fiterror::{FitError, FitOutcome};

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y = {} * x {}", num(self.slope), signed(self.intercept))
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    /// The zero line, `m = 0, b = 0`.
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Closed-form least squares line through `(x, y)`, single pass over the data.
    ///
    /// Fails with [`FitError::DegenerateX`] when `n·Σx² − (Σx)²` vanishes, which
    /// covers a single distinct x value and `n == 1`.
    pub fn train(x: &[f64], y: &[f64]) -> FitOutcome<Self> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
        }
        if x.is_empty() {
            return Err(FitError::NotEnoughPoints { len: 0, needed: 1 });
        }

        let n = x.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for (&xi, &yi) in x.iter().zip(y) {
            sum_x += xi;
            sum_y += yi;
            sum_xy += xi * yi;
            sum_x2 += xi * xi;
        }

        let denom = n * sum_x2 - sum_x * sum_x;
        // cancellation leaves rounding noise instead of an exact zero
        if !denom.is_finite() || denom.abs() <= f64::EPSILON * n * sum_x2 {
            return Err(FitError::DegenerateX);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denom;
        let intercept = (sum_y - slope * sum_x) / n;

        Ok(Self { intercept, slope })
    }
}

/// Fixed notation for ordinary magnitudes, scientific otherwise.
pub(crate) fn num(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v }; // no "-0.000000"
    let a = v.abs();
    if a == 0.0 || (1e-4..1e6).contains(&a) || !a.is_finite() {
        format!("{:.6}", v)
    } else {
        format!("{:.6e}", v)
    }
}

/// Renders `+ v` or `- |v|` so equations read naturally.
pub(crate) fn signed(v: f64) -> String {
    if v < 0.0 {
        format!("- {}", num(-v))
    } else {
        format!("+ {}", num(v))
    }
}

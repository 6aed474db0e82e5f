use crate::fit::fitkind::ModelKind;
use crate::fit::fitresult::{Equation, FitResult};
use crate::stats::Goodness;

pub trait FitModel {
    fn kind(&self) -> ModelKind;
    fn equation(&self) -> Equation;
    /// Prediction in the original (untransformed) space.
    fn predict(&self, x: f64) -> f64;
    fn goodness(&self) -> Goodness;
    fn fitted_len(&self) -> usize;
    fn scored_len(&self) -> usize;

    fn result(&self) -> FitResult {
        let goodness = self.goodness();
        FitResult {
            equation: self.equation(),
            ecm: goodness.ecm,
            r2: goodness.r2,
            fitted: self.fitted_len(),
            scored: self.scored_len(),
        }
    }
}

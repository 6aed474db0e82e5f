use crate::fit::domain::{score, usable_indices};
use crate::fit::fiterror::{FitError, FitOutcome};
use crate::fit::fitkind::ModelKind;
use crate::fit::fitmodel::FitModel;
use crate::fit::fitresult::Equation;
use crate::fit::scorepolicy::ScorePolicy;
use crate::processevent::ProcessEventSink;
use crate::samples::Samples;
use crate::stats::{Goodness, LogReg};

use std::fmt;

/// Predicted value for x <= 0, where ln(x) is undefined.
pub const OUT_OF_DOMAIN_PREDICTION: f64 = 0.0;

impl fmt::Display for LogarithmicFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, r2: {}, len: {}", self.model, self.goodness.r2, self.fitted)
    }
}

/// y = a + b * ln(x), fitted as a line in ln(x) on the samples with x > 0.
#[derive(Clone, Debug)]
pub struct LogarithmicFit {
    pub model: LogReg,
    pub goodness: Goodness,
    pub fitted: usize,
    pub scored: usize,
}

fn predict_or_sentinel(model: &LogReg, x: f64) -> f64 {
    if x <= 0.0 {
        OUT_OF_DOMAIN_PREDICTION
    } else {
        model.calculate(x)
    }
}

impl FitModel for LogarithmicFit {
    fn kind(&self) -> ModelKind {
        ModelKind::Logarithmic
    }
    fn equation(&self) -> Equation {
        Equation::Logarithmic(self.model)
    }
    fn predict(&self, x: f64) -> f64 {
        predict_or_sentinel(&self.model, x)
    }
    fn goodness(&self) -> Goodness {
        self.goodness
    }
    fn fitted_len(&self) -> usize {
        self.fitted
    }
    fn scored_len(&self) -> usize {
        self.scored
    }
}

impl LogarithmicFit {
    pub fn from_samples(
        samples: &Samples,
        policy: ScorePolicy,
        sink: &mut dyn ProcessEventSink,
    ) -> FitOutcome<Self> {
        let kept = usable_indices(
            samples,
            ModelKind::Logarithmic,
            FitError::NonPositiveX,
            |x, _| x > 0.0,
            sink,
        )?;
        let (x, y) = samples.select(&kept);
        let model = LogReg::train(&x, &y)?;

        let (goodness, scored) =
            score(samples, &kept, policy, |x| predict_or_sentinel(&model, x))?;

        Ok(Self { model, goodness, fitted: kept.len(), scored })
    }
}

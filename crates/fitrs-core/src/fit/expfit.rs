use crate::fit::domain::{score, usable_indices};
use crate::fit::fiterror::{FitError, FitOutcome};
use crate::fit::fitkind::ModelKind;
use crate::fit::fitmodel::FitModel;
use crate::fit::fitresult::Equation;
use crate::fit::scorepolicy::ScorePolicy;
use crate::processevent::ProcessEventSink;
use crate::samples::Samples;
use crate::stats::{ExpReg, Goodness};

use std::fmt;

impl fmt::Display for ExponentialFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, r2: {}, len: {}", self.model, self.goodness.r2, self.fitted)
    }
}

/// y = a * exp(b * x), fitted as ln(y) = ln(a) + b * x on the samples with y > 0.
#[derive(Clone, Debug)]
pub struct ExponentialFit {
    pub model: ExpReg,
    pub goodness: Goodness,
    pub fitted: usize,
    pub scored: usize,
}

impl FitModel for ExponentialFit {
    fn kind(&self) -> ModelKind {
        ModelKind::Exponential
    }
    fn equation(&self) -> Equation {
        Equation::Exponential(self.model)
    }
    fn predict(&self, x: f64) -> f64 {
        self.model.calculate(x)
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

impl ExponentialFit {
    pub fn from_samples(
        samples: &Samples,
        policy: ScorePolicy,
        sink: &mut dyn ProcessEventSink,
    ) -> FitOutcome<Self> {
        let kept = usable_indices(
            samples,
            ModelKind::Exponential,
            FitError::NonPositiveY,
            |_, y| y > 0.0,
            sink,
        )?;
        let (x, y) = samples.select(&kept);
        let model = ExpReg::train(&x, &y)?;

        let (goodness, scored) = score(samples, &kept, policy, |x| model.calculate(x))?;

        Ok(Self { model, goodness, fitted: kept.len(), scored })
    }
}

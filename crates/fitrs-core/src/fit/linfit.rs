use crate::fit::domain::score;
use crate::fit::fiterror::FitOutcome;
use crate::fit::fitkind::ModelKind;
use crate::fit::fitmodel::FitModel;
use crate::fit::fitresult::Equation;
use crate::fit::scorepolicy::ScorePolicy;
use crate::samples::Samples;
use crate::stats::{Goodness, LinReg};

use std::fmt;

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, r2: {}, len: {}", self.model, self.goodness.r2, self.fitted)
    }
}

/// y = m * x + b fitted directly on the raw samples.
#[derive(Clone, Debug)]
pub struct LinearFit {
    pub model: LinReg,
    pub goodness: Goodness,
    pub fitted: usize,
}

impl FitModel for LinearFit {
    fn kind(&self) -> ModelKind {
        ModelKind::Linear
    }
    fn equation(&self) -> Equation {
        Equation::Linear(self.model)
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
        self.fitted
    }
}

impl LinearFit {
    pub fn from_samples(samples: &Samples) -> FitOutcome<Self> {
        let model = LinReg::train(&samples.xs, &samples.ys)?;

        let all: Vec<usize> = (0..samples.len()).collect();
        let (goodness, fitted) =
            score(samples, &all, ScorePolicy::AllSamples, |x| model.calculate(x))?;

        Ok(Self { model, goodness, fitted })
    }
}

use crate::fit::fitkind::ModelKind;
use crate::stats::{ExpReg, LinReg, LogReg};

use serde::Serialize;
use std::fmt;

/// A fitted curve in the parameterization natural to its model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Equation {
    Linear(LinReg),
    Exponential(ExpReg),
    Logarithmic(LogReg),
}

impl Equation {
    pub fn kind(&self) -> ModelKind {
        match self {
            Equation::Linear(_) => ModelKind::Linear,
            Equation::Exponential(_) => ModelKind::Exponential,
            Equation::Logarithmic(_) => ModelKind::Logarithmic,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Equation::Linear(m) => write!(f, "{m}"),
            Equation::Exponential(m) => write!(f, "{m}"),
            Equation::Logarithmic(m) => write!(f, "{m}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    #[serde(flatten)]
    pub equation: Equation,
    /// Mean squared error.
    pub ecm: f64,
    pub r2: f64,
    /// Samples the coefficients were fitted on.
    pub fitted: usize,
    /// Samples ECM and R² were computed over.
    pub scored: usize,
}

impl FitResult {
    pub fn kind(&self) -> ModelKind {
        self.equation.kind()
    }
}

impl fmt::Display for FitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ecm: {}, r2: {}", self.equation, self.ecm, self.r2)
    }
}

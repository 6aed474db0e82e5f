mod domain;
pub mod expfit;
pub mod fiterror;
pub mod fitkind;
pub mod fitmodel;
pub mod fitresult;
pub mod linfit;
pub mod logfit;
pub mod scorepolicy;

pub use expfit::ExponentialFit;
pub use fiterror::{FitError, FitOutcome};
pub use fitkind::ModelKind;
pub use fitmodel::FitModel;
pub use fitresult::{Equation, FitResult};
pub use linfit::LinearFit;
pub use logfit::LogarithmicFit;
pub use scorepolicy::ScorePolicy;

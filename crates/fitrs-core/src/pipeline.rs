use crate::fit::{
    ExponentialFit, FitError, FitModel, FitOutcome, FitResult, LinearFit, LogarithmicFit,
    ModelKind, ScorePolicy,
};
use crate::processevent::{FitEvent, ProcessEventSink};
use crate::report::Report;
use crate::samples::Samples;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModelOutcome {
    Fitted(FitResult),
    Skipped {
        kind: ModelKind,
        #[serde(serialize_with = "as_message")]
        reason: FitError,
    },
}

fn as_message<S: Serializer>(reason: &FitError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

impl ModelOutcome {
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelOutcome::Fitted(res) => res.kind(),
            ModelOutcome::Skipped { kind, .. } => *kind,
        }
    }

    pub fn fitted(&self) -> Option<&FitResult> {
        match self {
            ModelOutcome::Fitted(res) => Some(res),
            ModelOutcome::Skipped { .. } => None,
        }
    }
}

pub fn fit_model(
    kind: ModelKind,
    samples: &Samples,
    policy: ScorePolicy,
    sink: &mut dyn ProcessEventSink,
) -> FitOutcome<Box<dyn FitModel>> {
    Ok(match kind {
        ModelKind::Linear => Box::new(LinearFit::from_samples(samples)?),
        ModelKind::Exponential => Box::new(ExponentialFit::from_samples(samples, policy, sink)?),
        ModelKind::Logarithmic => Box::new(LogarithmicFit::from_samples(samples, policy, sink)?),
    })
}

/// Fits every model in [`ModelKind::all`] order.
///
/// A model that cannot be fitted becomes a skip entry and never stops the
/// models after it.
pub fn run_models(
    samples: &Samples,
    policy: ScorePolicy,
    sink: &mut dyn ProcessEventSink,
) -> Report {
    let mut outcomes = Vec::with_capacity(ModelKind::all().len());

    for &kind in ModelKind::all() {
        sink.on_fit_event(&FitEvent::Started(kind));
        let outcome = match fit_model(kind, samples, policy, sink) {
            Ok(model) => {
                sink.on_fit_event(&FitEvent::Fitted(kind));
                ModelOutcome::Fitted(model.result())
            },
            Err(reason) => {
                sink.on_fit_event(&FitEvent::Skipped { kind, reason: reason.clone() });
                ModelOutcome::Skipped { kind, reason }
            },
        };
        outcomes.push(outcome);
    }

    Report { samples: samples.len(), score_policy: policy, outcomes }
}

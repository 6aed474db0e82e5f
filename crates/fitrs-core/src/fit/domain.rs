use crate::fit::fiterror::{FitError, FitOutcome};
use crate::fit::fitkind::ModelKind;
use crate::fit::scorepolicy::ScorePolicy;
use crate::processevent::{FitEvent, ProcessEventSink};
use crate::samples::Samples;
use crate::stats::{goodness_of_fit, Goodness};

/// Indices of the samples inside the model's domain.
///
/// Every rejected sample is reported to `sink` with `reason`. Fails when fewer
/// than `kind.min_points()` samples remain.
pub(crate) fn usable_indices<F>(
    samples: &Samples,
    kind: ModelKind,
    reason: FitError,
    keep: F,
    sink: &mut dyn ProcessEventSink,
) -> FitOutcome<Vec<usize>>
where
    F: Fn(f64, f64) -> bool,
{
    let mut kept = Vec::with_capacity(samples.len());
    for (index, (&x, &y)) in samples.xs.iter().zip(&samples.ys).enumerate() {
        if keep(x, y) {
            kept.push(index);
            continue;
        }
        sink.on_fit_event(&FitEvent::SampleOmitted {
            kind,
            index,
            line: samples.line(index),
            reason: reason.clone(),
        });
    }

    if kept.len() < kind.min_points() {
        return Err(FitError::NotEnoughPoints { len: kept.len(), needed: kind.min_points() });
    }
    Ok(kept)
}

/// Scores `predict` against the observed y of the samples selected by `policy`.
///
/// Returns the goodness of fit and the number of samples it covers.
pub(crate) fn score<F>(
    samples: &Samples,
    fitted: &[usize],
    policy: ScorePolicy,
    predict: F,
) -> FitOutcome<(Goodness, usize)>
where
    F: Fn(f64) -> f64,
{
    let (xs, ys) = match policy {
        ScorePolicy::AllSamples => (samples.xs.clone(), samples.ys.clone()),
        ScorePolicy::FittedSamples => samples.select(fitted),
    };
    let y_hat: Vec<f64> = xs.iter().map(|&x| predict(x)).collect();

    let goodness = goodness_of_fit(&ys, &y_hat)?;
    Ok((goodness, ys.len()))
}

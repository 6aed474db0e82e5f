use crate::fit::fiterror::{FitError, FitOutcome};

use serde::Serialize;
use statrs::statistics::Statistics;

/// Error measures of a set of predictions against observations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Goodness {
    /// Mean squared error (ECM).
    pub ecm: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

fn check_lengths(y: &[f64], y_hat: &[f64]) -> FitOutcome<()> {
    if y.len() != y_hat.len() {
        return Err(FitError::LengthMismatch { len_x: y.len(), len_y: y_hat.len() });
    }
    if y.is_empty() {
        return Err(FitError::NotEnoughPoints { len: 0, needed: 1 });
    }
    Ok(())
}

fn rss(y: &[f64], y_hat: &[f64]) -> f64 {
    y.iter().zip(y_hat).map(|(&yi, &yhi)| (yi - yhi).powi(2)).sum()
}

pub fn mse(y: &[f64], y_hat: &[f64]) -> FitOutcome<f64> {
    check_lengths(y, y_hat)?;
    Ok(rss(y, y_hat) / y.len() as f64)
}

pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> FitOutcome<f64> {
    check_lengths(y, y_hat)?;

    let y_mean = y.iter().mean();
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Err(FitError::DegenerateY);
    }

    Ok(1.0 - rss(y, y_hat) / ss_tot)
}

/// ECM and R² in one go. Fails instead of yielding NaN when y has no variance.
pub fn goodness_of_fit(y: &[f64], y_hat: &[f64]) -> FitOutcome<Goodness> {
    let ecm = mse(y, y_hat)?;
    let r2 = r2_from_predictions(y, y_hat)?;
    Ok(Goodness { ecm, r2 })
}

#[cfg(test)]
mod tests {
    use super::{goodness_of_fit, mse, r2_from_predictions};
    use crate::fit::fiterror::FitError;

    #[test]
    fn test_perfect_prediction() {
        let y = [1., 3., 2., 7.];
        let g = goodness_of_fit(&y, &y).unwrap();

        assert_eq!(g.ecm, 0.0);
        assert_eq!(g.r2, 1.0);
    }

    #[test]
    fn test_constant_y_is_degenerate() {
        let y = [5., 5., 5.];
        let y_hat = [4., 5., 6.];

        assert_eq!(r2_from_predictions(&y, &y_hat), Err(FitError::DegenerateY));
        assert_eq!(goodness_of_fit(&y, &y_hat), Err(FitError::DegenerateY));
        // mse alone is still defined
        assert!((mse(&y, &y_hat).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_prediction_scores_zero() {
        let y = [1., 2., 3., 4.];
        let y_hat = [2.5; 4];

        let g = goodness_of_fit(&y, &y_hat).unwrap();
        assert!(g.r2.abs() < 1e-12);
        assert!((g.ecm - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        let y = [1., 2., 3.];
        let y_hat = [1.5, 2., 2.5];

        let g = goodness_of_fit(&y, &y_hat).unwrap();
        assert!((g.ecm - 0.5 / 3.0).abs() < 1e-12);
        assert!((g.r2 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            mse(&[1., 2.], &[1.]),
            Err(FitError::LengthMismatch { len_x: 2, len_y: 1 })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(mse(&[], &[]), Err(FitError::NotEnoughPoints { len: 0, needed: 1 }));
    }
}

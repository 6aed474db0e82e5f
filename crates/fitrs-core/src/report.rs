use crate::fit::ScorePolicy;
use crate::pipeline::ModelOutcome;
use crate::stats::linreg::num;

use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseOutputFormatError(String);

impl fmt::Display for ParseOutputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseOutputFormatError {}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseOutputFormatError(format!("invalid output format: {other}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Everything one run produced, one outcome per model in fitting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub samples: usize,
    pub score_policy: ScorePolicy,
    pub outcomes: Vec<ModelOutcome>,
}

impl Report {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            // writing into a String cannot fail
            let _ = match outcome {
                ModelOutcome::Fitted(res) => writeln!(
                    out,
                    "{} model: {}\nECM: {}, R^2: {}\nfitted on {} of {} samples, scored on {}\n",
                    res.kind(),
                    res.equation,
                    num(res.ecm),
                    num(res.r2),
                    res.fitted,
                    self.samples,
                    res.scored,
                ),
                ModelOutcome::Skipped { kind, reason } => {
                    writeln!(out, "{} model: skipped ({})\n", kind, reason)
                },
            };
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json().map(|mut s| {
                s.push('\n');
                s
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{Equation, FitError, FitResult, ModelKind};
    use crate::stats::{ExpReg, LinReg};

    fn sample_report() -> Report {
        Report {
            samples: 4,
            score_policy: ScorePolicy::AllSamples,
            outcomes: vec![
                ModelOutcome::Fitted(FitResult {
                    equation: Equation::Linear(LinReg::from_val(0.0, 2.0)),
                    ecm: 0.0,
                    r2: 1.0,
                    fitted: 4,
                    scored: 4,
                }),
                ModelOutcome::Fitted(FitResult {
                    equation: Equation::Exponential(ExpReg::from_val(1.5, -0.25)),
                    ecm: 0.125,
                    r2: 0.9,
                    fitted: 3,
                    scored: 4,
                }),
                ModelOutcome::Skipped {
                    kind: ModelKind::Logarithmic,
                    reason: FitError::NotEnoughPoints { len: 1, needed: 2 },
                },
            ],
        }
    }

    #[test]
    fn test_render_text() {
        let text = sample_report().render_text();
        let expected = "\
Linear model: y = 2.000000 * x + 0.000000
ECM: 0.000000, R^2: 1.000000
fitted on 4 of 4 samples, scored on 4

Exponential model: y = 1.500000 * exp(-0.250000 * x)
ECM: 0.125000, R^2: 0.900000
fitted on 3 of 4 samples, scored on 4

Logarithmic model: skipped (not enough points: got 1, need at least 2)

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_json() {
        let json = sample_report().render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["samples"], 4);
        assert_eq!(value["score_policy"], "all");
        assert_eq!(value["outcomes"][0]["status"], "fitted");
        assert_eq!(value["outcomes"][0]["model"], "linear");
        assert_eq!(value["outcomes"][0]["slope"], 2.0);
        assert_eq!(value["outcomes"][1]["model"], "exponential");
        assert_eq!(value["outcomes"][1]["b"], -0.25);
        assert_eq!(value["outcomes"][2]["status"], "skipped");
        assert_eq!(value["outcomes"][2]["kind"], "logarithmic");
        assert_eq!(value["outcomes"][2]["reason"], "not enough points: got 1, need at least 2");
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}

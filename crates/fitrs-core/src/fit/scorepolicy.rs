use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseScorePolicyError(String);

impl fmt::Display for ParseScorePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseScorePolicyError {}

// which samples ECM and R² are computed over for models that filter their input
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum ScorePolicy {
    /// Every loaded sample, including the ones a model could not be fitted on.
    #[serde(rename = "all")]
    AllSamples,
    /// Only the samples that went into the fit.
    #[serde(rename = "fitted")]
    FittedSamples,
}

impl FromStr for ScorePolicy {
    type Err = ParseScorePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ScorePolicy::AllSamples),
            "fitted" => Ok(ScorePolicy::FittedSamples),
            other => Err(ParseScorePolicyError(format!(
                "invalid score policy: {other} (expected 'all' or 'fitted')"
            ))),
        }
    }
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::AllSamples
    }
}

impl fmt::Display for ScorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorePolicy::AllSamples => write!(f, "all"),
            ScorePolicy::FittedSamples => write!(f, "fitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScorePolicy;

    #[test]
    fn test_parse_policy() {
        assert_eq!("all".parse::<ScorePolicy>().unwrap(), ScorePolicy::AllSamples);
        assert_eq!("Fitted".parse::<ScorePolicy>().unwrap(), ScorePolicy::FittedSamples);
        assert!("some".parse::<ScorePolicy>().is_err());
        assert_eq!(ScorePolicy::default(), ScorePolicy::AllSamples);
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Linear,
    Exponential,
    Logarithmic,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Linear => write!(f, "Linear"),
            ModelKind::Exponential => write!(f, "Exponential"),
            ModelKind::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Exponential => "exponential",
            ModelKind::Logarithmic => "logarithmic",
        }
    }

    /// Fitting order used by the pipeline.
    pub fn all() -> &'static [ModelKind] {
        use ModelKind::*;
        &[Linear, Exponential, Logarithmic]
    }

    /// Smallest number of usable samples a fit is attempted with.
    pub fn min_points(&self) -> usize {
        match self {
            ModelKind::Linear => 1,
            ModelKind::Exponential | ModelKind::Logarithmic => 2,
        }
    }
}

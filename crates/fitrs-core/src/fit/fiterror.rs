use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    LengthMismatch { len_x: usize, len_y: usize },
    NotEnoughPoints { len: usize, needed: usize },
    NonPositiveX,
    NonPositiveY,
    DegenerateX, // no variance in x
    DegenerateY, // no variance in y, R² undefined
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::LengthMismatch { len_x, len_y } => {
                write!(f, "x and y have different lengths: {len_x} vs {len_y}")
            },
            FitError::NotEnoughPoints { len, needed } => {
                write!(f, "not enough points: got {len}, need at least {needed}")
            },
            FitError::NonPositiveX => {
                write!(f, "logarithm undefined for x <= 0")
            },
            FitError::NonPositiveY => {
                write!(f, "logarithm undefined for y <= 0")
            },
            FitError::DegenerateX => {
                write!(f, "degenerate x: no variance in x")
            },
            FitError::DegenerateY => {
                write!(f, "degenerate y: no variance in y, R^2 is undefined")
            },
        }
    }
}

impl std::error::Error for FitError {}

pub type FitOutcome<T> = Result<T, FitError>;

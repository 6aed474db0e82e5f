pub mod expreg;
pub mod linreg;
pub mod logreg;
pub mod stats;

pub use expreg::ExpReg;
pub use linreg::LinReg;
pub use logreg::LogReg;
pub use stats::{goodness_of_fit, mse, r2_from_predictions, Goodness};

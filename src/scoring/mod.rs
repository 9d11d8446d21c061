pub mod criteria;
pub mod engine;
pub mod validation;

pub use criteria::Impact;
pub use engine::{score, ScoreResult};
pub use validation::{validate, ValidatedInput, ValidationError};

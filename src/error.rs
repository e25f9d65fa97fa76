use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid salary: {0:?} is not a number")]
    InvalidSalary(String),
    #[error("Invalid salary: {0} must be greater than zero")]
    NonPositiveSalary(Decimal),
    #[error("Invalid work type: {0:?}")]
    InvalidWorkMode(String),
    #[error("Salary {0} is too large to calculate with")]
    Overflow(Decimal),
    #[error("Input ended before an answer was given")]
    UnexpectedEof,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

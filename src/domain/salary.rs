use crate::error::{CalculatorError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// A total monthly salary, in whatever currency units the user thinks in.
///
/// Wraps `rust_decimal::Decimal` so every figure derived from it is computed
/// without binary floating point error. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Salary(Decimal);

impl Salary {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CalculatorError::NonPositiveSalary(value))
        }
    }

    /// Parses free text such as `"100000"`, `" 2500.50 "` or `"1e5"`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| CalculatorError::InvalidSalary(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

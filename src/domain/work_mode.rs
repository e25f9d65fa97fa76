use crate::error::CalculatorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Office,
}

impl FromStr for WorkMode {
    type Err = CalculatorError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" | "remotely" => Ok(Self::Remote),
            "office" => Ok(Self::Office),
            other => Err(CalculatorError::InvalidWorkMode(other.to_string())),
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Office => f.write_str("office"),
        }
    }
}

use super::report::PaymentReport;
use crate::error::Result;

/// The two things the calculator asks for, in the order it asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Salary,
    WorkMode,
}

impl Question {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Salary => "Enter total monthly salary (in currency units): ",
            Self::WorkMode => {
                "Do you work remotely or in office? (enter 'remote' or 'office'): "
            }
        }
    }
}

pub trait InputSource {
    /// Returns the raw answer, without its line terminator.
    fn answer(&mut self, question: Question) -> Result<String>;
}

pub trait ReportSink {
    fn write_report(&mut self, report: &PaymentReport) -> Result<()>;
    fn write_invalid_mode(&mut self) -> Result<()>;
}

pub type InputSourceBox = Box<dyn InputSource>;
pub type ReportSinkBox = Box<dyn ReportSink>;

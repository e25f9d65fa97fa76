use crate::domain::ports::{InputSource, Question, ReportSink};
use crate::domain::report::PaymentReport;
use crate::domain::salary::Salary;
use crate::domain::schedule::WorkSchedule;
use crate::domain::work_mode::WorkMode;
use crate::error::{CalculatorError, Result};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// How a single run ended when no fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Reported(PaymentReport),
    /// The work mode was not recognized; nothing was computed.
    InvalidMode,
}

/// Converts a monthly salary into hourly rates for remote and office work.
///
/// Holds no state between runs, so the same answers always produce the same
/// report.
#[derive(Debug, Clone, Copy)]
pub struct PaymentCalculator {
    remote: WorkSchedule,
    office: WorkSchedule,
}

impl Default for PaymentCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentCalculator {
    pub fn new() -> Self {
        Self {
            remote: WorkSchedule::remote(),
            office: WorkSchedule::office(),
        }
    }

    /// Derives the figures for one salary and work mode, at full precision.
    pub fn calculate(&self, salary: Salary, mode: WorkMode) -> Result<PaymentReport> {
        let total = salary.value();
        let overflow = || CalculatorError::Overflow(total);

        let remote_hourly_payment = total
            .checked_div(self.remote.total_hours())
            .ok_or_else(overflow)?;

        let report = match mode {
            WorkMode::Remote => PaymentReport::Remote {
                working_days: self.remote.working_days,
                remote_hourly_payment,
            },
            WorkMode::Office => {
                let office_total_hours = self.office.total_hours();
                let office_hourly_payment =
                    total.checked_div(office_total_hours).ok_or_else(overflow)?;
                let required_salary = remote_hourly_payment
                    .checked_mul(office_total_hours)
                    .ok_or_else(overflow)?;
                let extra_payment: Decimal =
                    required_salary.checked_sub(total).ok_or_else(overflow)?;

                PaymentReport::Office {
                    working_days: self.office.working_days,
                    office_hourly_payment,
                    required_salary,
                    extra_payment,
                }
            }
        };

        debug!(%total, %mode, ?report, "calculated payment report");
        Ok(report)
    }

    /// Runs one interactive session.
    ///
    /// An unrecognized work mode is reported through the sink and ends the run
    /// normally. Every other error is returned to the caller.
    pub fn run(
        &self,
        input: &mut dyn InputSource,
        sink: &mut dyn ReportSink,
    ) -> Result<Outcome> {
        let salary = Salary::parse(&input.answer(Question::Salary)?)?;
        debug!(salary = %salary.value(), "read salary");

        let mode = match input.answer(Question::WorkMode)?.parse::<WorkMode>() {
            Ok(mode) => mode,
            Err(CalculatorError::InvalidWorkMode(given)) => {
                info!(%given, "unrecognized work mode");
                sink.write_invalid_mode()?;
                return Ok(Outcome::InvalidMode);
            }
            Err(e) => return Err(e),
        };

        let report = self.calculate(salary, mode)?;
        sink.write_report(&report)?;
        Ok(Outcome::Reported(report))
    }
}

use crate::domain::ports::ReportSink;
use crate::domain::report::PaymentReport;
use crate::error::Result;
use std::io::Write;

pub const INVALID_MODE_MESSAGE: &str = "Invalid work type. Please enter 'remote' or 'office'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Renders payment reports to any `Write` destination.
///
/// Figures are rounded before rendering: days to one decimal place, money to two.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    fn write_text(&mut self, report: &PaymentReport) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w)?;
        writeln!(
            w,
            "An average month has {:.1} working days.",
            report.working_days()
        )?;
        match report {
            PaymentReport::Remote {
                remote_hourly_payment,
                ..
            } => {
                writeln!(
                    w,
                    "Your pay for one hour of remote work: {:.2}",
                    remote_hourly_payment
                )?;
            }
            PaymentReport::Office {
                office_hourly_payment,
                required_salary,
                extra_payment,
                ..
            } => {
                writeln!(
                    w,
                    "Your actual pay for one hour of office work (including commute): {:.2}",
                    office_hourly_payment
                )?;
                writeln!(
                    w,
                    "To match your remote hourly rate, your salary should be: {:.2}",
                    required_salary
                )?;
                writeln!(
                    w,
                    "Extra pay owed for the additional hours: {:.2}",
                    extra_payment
                )?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for ReportWriter<W> {
    fn write_report(&mut self, report: &PaymentReport) -> Result<()> {
        let report = report.rounded();
        match self.format {
            ReportFormat::Text => self.write_text(&report)?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.writer, &report)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_invalid_mode(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", INVALID_MODE_MESSAGE)?;
        self.writer.flush()?;
        Ok(())
    }
}

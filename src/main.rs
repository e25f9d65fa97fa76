use clap::{Parser, ValueEnum};
use commute_pay::application::calculator::PaymentCalculator;
use commute_pay::domain::ports::{InputSourceBox, ReportSinkBox};
use commute_pay::interfaces::console::prompt::{ConsolePrompt, PresetInput};
use commute_pay::interfaces::console::report_writer::{ReportFormat, ReportWriter};
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

/// Compares the hourly rate of remote work with office work once commute time is counted.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total monthly salary. Prompted for when omitted.
    #[arg(long)]
    salary: Option<String>,

    /// Work mode, 'remote' or 'office'. Prompted for when omitted.
    #[arg(long)]
    mode: Option<String>,

    /// Output format of the report
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let console = ConsolePrompt::new(io::stdin().lock(), io::stdout());
    let mut input: InputSourceBox = Box::new(PresetInput::new(console, cli.salary, cli.mode));
    let mut sink: ReportSinkBox = Box::new(ReportWriter::new(io::stdout(), cli.format.into()));

    PaymentCalculator::new()
        .run(input.as_mut(), sink.as_mut())
        .into_diagnostic()?;

    Ok(())
}

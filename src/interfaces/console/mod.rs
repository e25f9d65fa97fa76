//! Console adapters for the calculator's input and report ports.

pub mod prompt;
pub mod report_writer;

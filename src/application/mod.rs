//! Application layer containing the salary comparison flow.
//!
//! `PaymentCalculator` asks its `InputSource` for a salary and a work mode,
//! derives the hourly figures and hands the result to a `ReportSink`.

pub mod calculator;

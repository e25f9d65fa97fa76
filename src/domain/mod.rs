//! Domain layer: the values a salary comparison is made of.
//!
//! Nothing here performs I/O. The [`ports`] module declares the seams through
//! which the application layer talks to a console.

pub mod ports;
pub mod report;
pub mod salary;
pub mod schedule;
pub mod work_mode;

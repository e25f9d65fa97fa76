use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Average number of working days in a calendar month.
pub const AVERAGE_WORKING_DAYS: Decimal = dec!(21.8);

/// Paid hours in a working day.
pub const WORK_HOURS_PER_DAY: Decimal = dec!(8);

/// Unpaid hours spent getting to the office and back.
pub const COMMUTE_HOURS_PER_DAY: Decimal = dec!(2);

/// Hours a month actually costs for a given way of working.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkSchedule {
    pub working_days: Decimal,
    pub hours_per_day: Decimal,
}

impl WorkSchedule {
    pub fn remote() -> Self {
        Self {
            working_days: AVERAGE_WORKING_DAYS,
            hours_per_day: WORK_HOURS_PER_DAY,
        }
    }

    pub fn office() -> Self {
        Self {
            working_days: AVERAGE_WORKING_DAYS,
            hours_per_day: WORK_HOURS_PER_DAY + COMMUTE_HOURS_PER_DAY,
        }
    }

    pub fn total_hours(&self) -> Decimal {
        self.working_days * self.hours_per_day
    }
}

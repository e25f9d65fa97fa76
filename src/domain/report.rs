use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Decimal places used when presenting currency figures.
pub const MONEY_DP: u32 = 2;
/// Decimal places used when presenting day counts.
pub const DAYS_DP: u32 = 1;

/// The figures derived from one salary and work mode.
///
/// Values are kept at full precision; call [`PaymentReport::rounded`] before
/// presenting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PaymentReport {
    Remote {
        working_days: Decimal,
        remote_hourly_payment: Decimal,
    },
    Office {
        working_days: Decimal,
        office_hourly_payment: Decimal,
        required_salary: Decimal,
        extra_payment: Decimal,
    },
}

impl PaymentReport {
    pub fn working_days(&self) -> Decimal {
        match self {
            Self::Remote { working_days, .. } | Self::Office { working_days, .. } => *working_days,
        }
    }

    /// Rounds days to one place and money to two, half away from zero.
    ///
    /// Every figure comes back with exactly that scale, so `8` becomes `8.00`.
    pub fn rounded(&self) -> Self {
        match *self {
            Self::Remote {
                working_days,
                remote_hourly_payment,
            } => Self::Remote {
                working_days: round(working_days, DAYS_DP),
                remote_hourly_payment: round(remote_hourly_payment, MONEY_DP),
            },
            Self::Office {
                working_days,
                office_hourly_payment,
                required_salary,
                extra_payment,
            } => Self::Office {
                working_days: round(working_days, DAYS_DP),
                office_hourly_payment: round(office_hourly_payment, MONEY_DP),
                required_salary: round(required_salary, MONEY_DP),
                extra_payment: round(extra_payment, MONEY_DP),
            },
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

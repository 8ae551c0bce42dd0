pub mod income;
pub mod pay;
pub mod regime;
pub mod search;
pub mod warnings;

use rust_decimal::Decimal;

pub use pay::{take_home, Employment, TakeHome};
pub use regime::{lakh, Regime};
pub use search::{ctc_for_take_home, CtcQuote};
pub use warnings::Warning;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("{what} must not be negative, got {amount}")]
    NegativeAmount { what: &'static str, amount: Decimal },
    #[error("no CTC up to {limit}K gives a monthly take-home of {desired}K as {employment}")]
    Unreachable {
        desired: Decimal,
        employment: Employment,
        limit: Decimal,
    },
    #[error("invalid tax regime: {0}")]
    InvalidRegime(String),
}

pub(crate) fn ensure_non_negative(what: &'static str, amount: Decimal) -> Result<(), TaxError> {
    if amount < Decimal::ZERO {
        return Err(TaxError::NegativeAmount { what, amount });
    }
    Ok(())
}

//! Inverse of take-home: the CTC to ask for

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::pay::{take_home, Employment, TakeHome};
use super::regime::Regime;
use super::{ensure_non_negative, TaxError};

/// The smallest CTC that meets a desired monthly take-home
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtcQuote {
    pub desired: Decimal,
    pub employment: Employment,
    /// Whole thousands, annual
    pub ctc: Decimal,
    pub take_home: TakeHome,
}

/// Find the minimum whole CTC whose monthly take-home is at least `desired`.
///
/// Take-home is not monotone across the rebate and surcharge cliffs, so this
/// scans upward and returns the first hit rather than bisecting. Nothing below
/// `12 * desired` can qualify, since nothing is ever added to the CTC, so the
/// scan starts there. It gives up at `regime.max_ctc`.
pub fn ctc_for_take_home(
    regime: &Regime,
    desired: Decimal,
    employment: Employment,
) -> Result<CtcQuote, TaxError> {
    ensure_non_negative("desired take-home", desired)?;

    let unreachable = TaxError::Unreachable {
        desired,
        employment,
        limit: regime.max_ctc,
    };
    let mut ctc = match desired.checked_mul(dec!(12)) {
        Some(annual) => annual.ceil().max(Decimal::ONE),
        None => return Err(unreachable),
    };
    let mut steps = 0u64;
    while ctc <= regime.max_ctc {
        let th = take_home(regime, ctc, employment)?;
        steps += 1;
        if th.monthly >= desired {
            log::debug!(
                "{} needs CTC {} for {} a month ({} steps)",
                employment,
                ctc,
                desired,
                steps
            );
            return Ok(CtcQuote {
                desired,
                employment,
                ctc,
                take_home: th,
            });
        }
        ctc += Decimal::ONE;
    }

    Err(unreachable)
}

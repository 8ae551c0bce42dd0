pub mod ctc;
pub mod ladder;
pub mod report;
pub mod takehome;

use crate::money::parse_amount;
use crate::tax::{Regime, TaxError};
use clap::Args;
use rust_decimal::Decimal;

/// Overrides for the rates you are most likely to want to change
#[derive(Args, Debug, Clone, Default)]
pub struct RegimeArgs {
    /// Employee deductions (80C, 80D and so on), e.g. 160 or 1.6L
    #[arg(long, global = true, value_parser = parse_amount)]
    deduction: Option<Decimal>,

    /// Share of consultant receipts taxed as income, e.g. 0.5
    #[arg(long, global = true)]
    presumptive_rate: Option<Decimal>,

    /// GST rate paid out of pocket by consultants, e.g. 0.18. 0 if not registered or exporting.
    #[arg(long, global = true)]
    gst_rate: Option<Decimal>,

    /// Share of the PF wage that goes to PF and pension. 0 to leave PF out.
    #[arg(long, global = true)]
    pf_rate: Option<Decimal>,
}

impl RegimeArgs {
    /// The default regime with any overrides applied
    pub fn regime(&self) -> Result<Regime, TaxError> {
        let mut regime = Regime::fy2018_19();
        if let Some(deduction) = self.deduction {
            regime.employee_deduction = deduction;
        }
        if let Some(rate) = self.presumptive_rate {
            regime.presumptive_rate = rate;
        }
        if let Some(rate) = self.gst_rate {
            regime.gst_rate = rate;
        }
        if let Some(rate) = self.pf_rate {
            regime.pf_rate = rate;
        }
        regime.validate()?;
        log::debug!("Using {} {:?}", regime, self);
        Ok(regime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_overrides_is_default_regime() {
        assert_eq!(RegimeArgs::default().regime().unwrap(), Regime::fy2018_19());
    }

    #[test]
    fn overrides_applied() {
        let args = RegimeArgs {
            deduction: Some(dec!(200)),
            presumptive_rate: Some(dec!(0.6)),
            gst_rate: Some(dec!(0.18)),
            pf_rate: Some(Decimal::ZERO),
        };
        let regime = args.regime().unwrap();
        assert_eq!(regime.employee_deduction, dec!(200));
        assert_eq!(regime.presumptive_rate, dec!(0.6));
        assert_eq!(regime.gst_rate, dec!(0.18));
        assert_eq!(regime.pf_rate, Decimal::ZERO);
    }

    #[test]
    fn invalid_override_rejected() {
        let args = RegimeArgs {
            gst_rate: Some(dec!(18)),
            ..Default::default()
        };
        assert!(matches!(args.regime(), Err(TaxError::InvalidRegime(_))));
    }
}

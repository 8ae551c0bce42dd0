use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::TaxError;

/// One bracket of the progressive income tax schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slab {
    /// Income at or below this pays nothing in this slab
    pub lower: Decimal,
    /// Income above this is taxed by the next slab. `None` for the top slab.
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl Slab {
    /// Tax owed on the portion of `income` that falls inside this slab.
    ///
    /// Income is clamped to the upper bound before the lower bound is
    /// subtracted, so stacked slabs never tax the same rupee twice.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        if income <= self.lower {
            return Decimal::ZERO;
        }
        let capped = match self.upper {
            Some(upper) => income.min(upper),
            None => income,
        };
        (capped - self.lower) * self.rate
    }
}

/// Rates, thresholds and allowances for a fiscal year.
///
/// All amounts are in thousands of rupees, annual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regime {
    /// Display label, e.g. "2018-19"
    pub fiscal_year: &'static str,
    /// Income tax slabs, lowest first
    pub slabs: Vec<Slab>,
    /// Taxable income at or below this pays no income tax at all
    pub rebate_limit: Decimal,
    /// Health and education cess, as a fraction of slab tax
    pub cess_rate: Decimal,
    /// Taxable income from which the surcharge applies
    pub surcharge_threshold: Decimal,
    /// Surcharge as a fraction of slab tax
    pub surcharge_rate: Decimal,
    /// Taxable income from which a higher surcharge is due but not modelled
    pub unmodelled_surcharge_threshold: Decimal,
    pub professional_tax: Decimal,
    /// Deductions an employee can claim (80C, 80D and so on)
    pub employee_deduction: Decimal,
    /// Fraction of consultant receipts treated as income
    pub presumptive_rate: Decimal,
    /// GST the consultant pays out of pocket. Zero if unregistered or exporting.
    pub gst_rate: Decimal,
    /// Share of the PF wage that goes to PF and pension
    pub pf_rate: Decimal,
    /// PF is computed on salary capped at this
    pub pf_wage_ceiling: Decimal,
    /// Upper bound for the inverse CTC search
    pub max_ctc: Decimal,
}

impl Default for Regime {
    fn default() -> Self {
        Regime::fy2018_19()
    }
}

impl Regime {
    /// Resident individual, below 60, FY 2018-19
    pub fn fy2018_19() -> Self {
        Regime {
            fiscal_year: "2018-19",
            slabs: vec![
                Slab {
                    lower: dec!(250),
                    upper: Some(dec!(500)),
                    rate: dec!(0.05),
                },
                Slab {
                    lower: dec!(500),
                    upper: Some(dec!(1000)),
                    rate: dec!(0.20),
                },
                Slab {
                    lower: dec!(1000),
                    upper: None,
                    rate: dec!(0.30),
                },
            ],
            rebate_limit: dec!(500),
            cess_rate: dec!(0.04),
            surcharge_threshold: lakh(dec!(50)),
            surcharge_rate: dec!(0.10),
            unmodelled_surcharge_threshold: lakh(dec!(100)),
            professional_tax: dec!(2.5),
            employee_deduction: dec!(160),
            presumptive_rate: dec!(0.5),
            gst_rate: Decimal::ZERO,
            pf_rate: dec!(0.2561),
            pf_wage_ceiling: dec!(15),
            max_ctc: dec!(1000000),
        }
    }

    /// GST as a share of the gross amount that already includes it.
    ///
    /// Earning 100 on which 18% GST is owed from your own pocket costs about 15, not 18.
    pub fn effective_gst_rate(&self) -> Decimal {
        self.gst_rate / (Decimal::ONE + self.gst_rate)
    }

    /// Check that the rates and slabs describe a usable schedule
    pub fn validate(&self) -> Result<(), TaxError> {
        let rates = [
            ("cess rate", self.cess_rate),
            ("surcharge rate", self.surcharge_rate),
            ("presumptive rate", self.presumptive_rate),
            ("GST rate", self.gst_rate),
            ("PF rate", self.pf_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(TaxError::InvalidRegime(format!(
                    "{name} must be between 0 and 1, got {rate}"
                )));
            }
        }

        let amounts = [
            ("rebate limit", self.rebate_limit),
            ("professional tax", self.professional_tax),
            ("employee deduction", self.employee_deduction),
            ("PF wage ceiling", self.pf_wage_ceiling),
        ];
        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(TaxError::InvalidRegime(format!(
                    "{name} must not be negative, got {amount}"
                )));
            }
        }

        if self.max_ctc < Decimal::ONE {
            return Err(TaxError::InvalidRegime(format!(
                "search limit must be at least 1, got {}",
                self.max_ctc
            )));
        }

        if self.slabs.is_empty() {
            return Err(TaxError::InvalidRegime("no income tax slabs".to_string()));
        }
        for (i, slab) in self.slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(TaxError::InvalidRegime(format!(
                    "slab {} rate must be between 0 and 1, got {}",
                    i + 1,
                    slab.rate
                )));
            }
            match (slab.upper, self.slabs.get(i + 1)) {
                (Some(upper), Some(next)) if upper == next.lower && upper > slab.lower => {}
                (None, None) => {}
                _ => {
                    return Err(TaxError::InvalidRegime(format!(
                        "slab {} does not join the next slab",
                        i + 1
                    )))
                }
            }
        }

        Ok(())
    }
}

/// Convert lakh to thousands
pub fn lakh(amount: Decimal) -> Decimal {
    amount * dec!(100)
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FY {}", self.fiscal_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab(n: usize) -> Slab {
        Regime::fy2018_19().slabs[n]
    }

    #[test]
    fn first_slab_taxes_only_its_band() {
        assert_eq!(slab(0).tax_on(dec!(200)), Decimal::ZERO);
        assert_eq!(slab(0).tax_on(dec!(250)), Decimal::ZERO);
        assert_eq!(slab(0).tax_on(dec!(400)), dec!(7.5));
        assert_eq!(slab(0).tax_on(dec!(500)), dec!(12.5));
        assert_eq!(slab(0).tax_on(dec!(2000)), dec!(12.5));
    }

    #[test]
    fn second_slab_taxes_only_its_band() {
        assert_eq!(slab(1).tax_on(dec!(500)), Decimal::ZERO);
        assert_eq!(slab(1).tax_on(dec!(600)), dec!(20));
        assert_eq!(slab(1).tax_on(dec!(1000)), dec!(100));
        assert_eq!(slab(1).tax_on(dec!(3000)), dec!(100));
    }

    #[test]
    fn top_slab_is_unbounded() {
        assert_eq!(slab(2).tax_on(dec!(1000)), Decimal::ZERO);
        assert_eq!(slab(2).tax_on(dec!(1100)), dec!(30));
        assert_eq!(slab(2).tax_on(dec!(11000)), dec!(3000));
    }

    #[test]
    fn negative_income_pays_nothing() {
        for s in Regime::fy2018_19().slabs {
            assert_eq!(s.tax_on(dec!(-100)), Decimal::ZERO);
        }
    }

    #[test]
    fn default_regime_is_valid() {
        assert_eq!(Regime::default(), Regime::fy2018_19());
        assert!(Regime::default().validate().is_ok());
    }

    #[test]
    fn effective_gst_rate() {
        let mut regime = Regime::fy2018_19();
        assert_eq!(regime.effective_gst_rate(), Decimal::ZERO);

        regime.gst_rate = dec!(0.18);
        assert_eq!(regime.effective_gst_rate().round_dp(4), dec!(0.1525));
    }

    #[test]
    fn rejects_rate_above_one() {
        let regime = Regime {
            presumptive_rate: dec!(1.5),
            ..Regime::fy2018_19()
        };
        assert!(matches!(regime.validate(), Err(TaxError::InvalidRegime(_))));
    }

    #[test]
    fn rejects_negative_deduction() {
        let regime = Regime {
            employee_deduction: dec!(-1),
            ..Regime::fy2018_19()
        };
        assert!(matches!(regime.validate(), Err(TaxError::InvalidRegime(_))));
    }

    #[test]
    fn rejects_gap_between_slabs() {
        let mut regime = Regime::fy2018_19();
        regime.slabs[1].lower = dec!(600);
        assert!(matches!(regime.validate(), Err(TaxError::InvalidRegime(_))));
    }

    #[test]
    fn rejects_bounded_top_slab() {
        let mut regime = Regime::fy2018_19();
        regime.slabs[2].upper = Some(dec!(5000));
        assert!(matches!(regime.validate(), Err(TaxError::InvalidRegime(_))));
    }

    #[test]
    fn lakh_to_thousands() {
        assert_eq!(lakh(dec!(12)), dec!(1200));
        assert_eq!(lakh(dec!(0.5)), dec!(50));
    }

    #[test]
    fn regime_display() {
        assert_eq!(Regime::fy2018_19().to_string(), "FY 2018-19");
    }
}

//! The two one-line reports: take-home for a CTC, and CTC for a take-home

use crate::money::format_money;
use crate::tax::{
    ctc_for_take_home, take_home, CtcQuote, Employment, Regime, TakeHome, TaxError, Warning,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Take-home for the same CTC under both classifications
#[derive(Debug, Serialize)]
pub struct TakeHomeComparison {
    pub ctc: Decimal,
    pub employee: TakeHome,
    pub consultant: TakeHome,
}

impl TakeHomeComparison {
    pub fn calculate(regime: &Regime, ctc: Decimal) -> Result<Self, TaxError> {
        Ok(TakeHomeComparison {
            ctc,
            employee: take_home(regime, ctc, Employment::Employee)?,
            consultant: take_home(regime, ctc, Employment::Consultant)?,
        })
    }

    pub fn warnings(&self) -> Vec<&Warning> {
        dedup_warnings([self.employee.warnings(), self.consultant.warnings()])
    }

    pub fn sentence(&self) -> String {
        format!(
            "For a CTC of {}, an employee takes home {}, while a consultant takes home {}, each month.",
            format_money(self.ctc),
            format_money(self.employee.monthly),
            format_money(self.consultant.monthly)
        )
    }
}

/// CTC needed for the same take-home under both classifications
#[derive(Debug, Serialize)]
pub struct CtcComparison {
    pub desired: Decimal,
    pub employee: CtcQuote,
    pub consultant: CtcQuote,
}

impl CtcComparison {
    pub fn calculate(regime: &Regime, desired: Decimal) -> Result<Self, TaxError> {
        Ok(CtcComparison {
            desired,
            employee: ctc_for_take_home(regime, desired, Employment::Employee)?,
            consultant: ctc_for_take_home(regime, desired, Employment::Consultant)?,
        })
    }

    pub fn warnings(&self) -> Vec<&Warning> {
        dedup_warnings([
            self.employee.take_home.warnings(),
            self.consultant.take_home.warnings(),
        ])
    }

    pub fn sentence(&self) -> String {
        format!(
            "To take home {} a month, an employee should ask for a CTC of {}, while a consultant should ask for {}.",
            format_money(self.desired),
            format_money(self.employee.ctc),
            format_money(self.consultant.ctc)
        )
    }
}

fn dedup_warnings<'a>(groups: [&'a [Warning]; 2]) -> Vec<&'a Warning> {
    let mut warnings: Vec<&Warning> = Vec::new();
    for w in groups.into_iter().flatten() {
        if !warnings.contains(&w) {
            warnings.push(w);
        }
    }
    warnings
}

pub fn print_warnings(warnings: &[&Warning]) {
    for w in warnings {
        println!("Warning: {}", w);
    }
}

pub fn print_take_home_for(regime: &Regime, ctc: Decimal) -> anyhow::Result<()> {
    let comparison = TakeHomeComparison::calculate(regime, ctc)?;
    print_warnings(&comparison.warnings());
    println!("{}", comparison.sentence());
    Ok(())
}

pub fn print_ctc_for_take_home_pay(regime: &Regime, desired: Decimal) -> anyhow::Result<()> {
    let comparison = CtcComparison::calculate(regime, desired)?;
    print_warnings(&comparison.warnings());
    println!("{}", comparison.sentence());
    Ok(())
}

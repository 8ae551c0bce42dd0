//! Takehome command - CTC to ask for a monthly take-home

use crate::cmd::report::{print_warnings, CtcComparison};
use crate::money::parse_amount;
use crate::tax::Regime;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct TakeHomeCommand {
    /// Desired monthly take-home, e.g. 50 or 50K
    #[arg(value_parser = parse_amount)]
    amount: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl TakeHomeCommand {
    pub fn exec(&self, regime: &Regime) -> anyhow::Result<()> {
        let comparison = CtcComparison::calculate(regime, self.amount)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
            return Ok(());
        }

        print_warnings(&comparison.warnings());
        println!("{}", comparison.sentence());
        Ok(())
    }
}

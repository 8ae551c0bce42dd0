//! Ctc command - monthly take-home for an annual CTC

use crate::cmd::report::{print_warnings, TakeHomeComparison};
use crate::money::{format_money, parse_amount};
use crate::tax::{Regime, TakeHome};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct CtcCommand {
    /// Annual CTC, e.g. 1200, 1200K or 12L. A bare number is thousands, so 12 lakh is 12L, not 12.
    #[arg(value_parser = parse_amount)]
    ctc: Decimal,

    /// Show the tax and PF behind each figure
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CtcCommand {
    pub fn exec(&self, regime: &Regime) -> anyhow::Result<()> {
        let comparison = TakeHomeComparison::calculate(regime, self.ctc)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
            return Ok(());
        }

        print_warnings(&comparison.warnings());
        println!("{}", comparison.sentence());

        if self.breakdown {
            println!();
            print_breakdown(&comparison.employee);
            print_breakdown(&comparison.consultant);
        }
        Ok(())
    }
}

fn print_breakdown(th: &TakeHome) {
    let tax = &th.income_tax;
    println!("{}", th.employment.to_string().to_uppercase());
    println!("  Taxable income: {}", format_money(tax.taxable));
    println!(
        "  Income tax: {} (slabs {}, cess {}, surcharge {}){}",
        format_money(tax.total),
        format_money(tax.slab_tax),
        format_money(tax.cess),
        format_money(tax.surcharge),
        if tax.is_approximate() { " approx." } else { "" }
    );
    println!(
        "  Professional tax: {} | GST: {} | PF: {}",
        format_money(th.professional_tax),
        format_money(th.gst),
        format_money(th.provident_fund)
    );
    println!(
        "  Net annual: {} | Monthly: {}",
        format_money(th.net_annual),
        format_money(th.monthly)
    );
    println!();
}

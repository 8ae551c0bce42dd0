//! Ladder command - take-home across a range of CTCs

use crate::money::{format_money, parse_amount};
use crate::tax::{take_home, Employment, Regime};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const MAX_ROWS: usize = 500;

#[derive(Args, Debug)]
pub struct LadderCommand {
    /// Lowest CTC
    #[arg(long, value_parser = parse_amount, default_value = "5L")]
    from: Decimal,

    /// Highest CTC
    #[arg(long, value_parser = parse_amount, default_value = "30L")]
    to: Decimal,

    /// Increment between rows
    #[arg(long, value_parser = parse_amount, default_value = "1L")]
    step: Decimal,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

/// Row for the ladder table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LadderRow {
    #[tabled(rename = "CTC")]
    pub ctc: String,

    #[tabled(rename = "Employee")]
    pub employee: String,

    #[tabled(rename = "Consultant")]
    pub consultant: String,

    #[tabled(rename = "Difference")]
    pub difference: String,

    #[tabled(rename = "Note")]
    pub note: String,
}

/// Monthly take-home at one rung, both classifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rung {
    pub ctc: Decimal,
    pub employee: Decimal,
    pub consultant: Decimal,
    pub approximate: bool,
}

impl LadderCommand {
    pub fn exec(&self, regime: &Regime) -> anyhow::Result<()> {
        let rungs = build_ladder(regime, self.from, self.to, self.step)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rungs)?);
        } else {
            self.print_table(regime, &rungs);
        }
        Ok(())
    }

    fn print_table(&self, regime: &Regime, rungs: &[Rung]) {
        if rungs.is_empty() {
            println!("No CTCs in range");
            return;
        }

        let rows: Vec<LadderRow> = rungs.iter().map(LadderRow::from).collect();
        println!();
        println!("MONTHLY TAKE-HOME ({})", regime);
        println!();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}

impl From<&Rung> for LadderRow {
    fn from(rung: &Rung) -> Self {
        let difference = rung.consultant - rung.employee;
        LadderRow {
            ctc: format_money(rung.ctc),
            employee: format_money(rung.employee),
            consultant: format_money(rung.consultant),
            difference: if difference > Decimal::ZERO {
                format!("+{}", format_money(difference))
            } else {
                format_money(difference)
            },
            note: if rung.approximate {
                "approx.".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Take-home for each CTC from `from` to `to` inclusive
pub fn build_ladder(
    regime: &Regime,
    from: Decimal,
    to: Decimal,
    step: Decimal,
) -> anyhow::Result<Vec<Rung>> {
    anyhow::ensure!(step > Decimal::ZERO, "step must be positive");
    anyhow::ensure!(from <= to, "from ({}) is above to ({})", from, to);

    let mut rungs = Vec::new();
    let mut ctc = from;
    while ctc <= to {
        anyhow::ensure!(
            rungs.len() < MAX_ROWS,
            "more than {} rows, use a larger step",
            MAX_ROWS
        );
        let employee = take_home(regime, ctc, Employment::Employee)?;
        let consultant = take_home(regime, ctc, Employment::Consultant)?;
        rungs.push(Rung {
            ctc,
            employee: employee.monthly,
            consultant: consultant.monthly,
            approximate: employee.is_approximate() || consultant.is_approximate(),
        });
        // past the largest Decimal, so past `to` as well
        ctc = match ctc.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(rungs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn ladder_is_inclusive() {
        let rungs = build_ladder(&Regime::fy2018_19(), dec!(500), dec!(1000), dec!(100)).unwrap();
        assert_eq!(rungs.len(), 6);
        assert_eq!(rungs[0].ctc, dec!(500));
        assert_eq!(rungs[5].ctc, dec!(1000));
        assert_eq!(rungs[5].employee, dec!(75));
        assert_eq!(rungs[5].consultant, dec!(83));
    }

    #[test]
    fn rejects_zero_step() {
        assert!(build_ladder(&Regime::fy2018_19(), dec!(500), dec!(1000), Decimal::ZERO).is_err());
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(build_ladder(&Regime::fy2018_19(), dec!(1000), dec!(500), dec!(1)).is_err());
    }

    #[test]
    fn rejects_too_many_rows() {
        assert!(build_ladder(&Regime::fy2018_19(), dec!(1), dec!(100000), dec!(1)).is_err());
    }

    #[test]
    fn stops_at_largest_amount() {
        let from = Decimal::from_str("79228162514264337593543950000").unwrap();
        let rungs = build_ladder(&Regime::fy2018_19(), from, Decimal::MAX, dec!(200)).unwrap();
        assert_eq!(rungs.len(), 2);
        assert_eq!(rungs[1].ctc, from + dec!(200));
    }

    #[test]
    fn flags_approximate_rows() {
        let rungs = build_ladder(&Regime::fy2018_19(), dec!(10000), dec!(10200), dec!(100)).unwrap();
        assert!(!rungs[0].approximate);
        // employee taxable crosses a crore at 10160
        assert!(rungs[2].approximate);
    }

    #[test]
    fn row_formatting() {
        let row = LadderRow::from(&Rung {
            ctc: dec!(1000),
            employee: dec!(75),
            consultant: dec!(83),
            approximate: false,
        });
        assert_eq!(row.ctc, "10 lakh");
        assert_eq!(row.employee, "75K");
        assert_eq!(row.difference, "+8K");
        assert_eq!(row.note, "");
    }
}

use clap::{Parser, Subcommand};
use rust_decimal_macros::dec;

mod cmd;
mod money;
mod tax;

#[derive(Debug, Parser)]
#[command(name = "takehome", version)]
#[command(about = "Monthly take-home pay for an employee and a consultant in India (FY 2018-19)")]
#[command(
    long_about = "Monthly take-home pay for an employee and a consultant in India (FY 2018-19).\n\n\
                  Amounts are in thousands of rupees unless suffixed with L (lakh).\n\
                  Run without a subcommand for a sample report."
)]
struct Cli {
    #[command(flatten)]
    regime: cmd::RegimeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly take-home for an annual CTC
    Ctc(cmd::ctc::CtcCommand),
    /// CTC to ask for to take home a monthly amount
    #[command(name = "takehome", alias = "take-home")]
    TakeHome(cmd::takehome::TakeHomeCommand),
    /// Take-home across a range of CTCs
    Ladder(cmd::ladder::LadderCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let regime = cli.regime.regime()?;

    match cli.command {
        Some(Command::Ctc(cmd)) => cmd.exec(&regime),
        Some(Command::TakeHome(cmd)) => cmd.exec(&regime),
        Some(Command::Ladder(cmd)) => cmd.exec(&regime),
        None => {
            cmd::report::print_take_home_for(&regime, tax::lakh(dec!(10)))?;
            println!();
            cmd::report::print_ctc_for_take_home_pay(&regime, dec!(50))
        }
    }
}

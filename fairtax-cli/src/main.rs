use anyhow::Result;
use clap::{Parser, Subcommand};
use fairtax_core::{FairTaxCalculator, FairTaxInput, StateCode};
use fairtax_cli::report;
use tracing_subscriber::EnvFilter;

/// Fair-tax calculator: income below the state poverty line is exempt, a
/// flat marginal constant applies above it, and the effective rate is
/// capped at 50%.
#[derive(Parser, Debug)]
#[command(name = "fairtax")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute taxes for a household
    Compute {
        /// Two-letter state code (e.g. HI); see `fairtax states`
        #[arg(short, long)]
        state: String,

        /// Number of people in the family
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=99))]
        family: u32,

        /// Gross yearly income in USD (e.g. 20000 or "1,234.56")
        #[arg(short, long)]
        income: String,
    },
    /// List the supported state codes in sorted order
    States,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compute {
            state,
            family,
            income,
        } => {
            let input = FairTaxInput::from_raw(&state, family, &income)?;
            let assessment = FairTaxCalculator::default().calculate(&input)?;
            println!("{}", report::render(&input, &assessment));
        }
        Command::States => {
            for state in StateCode::ALL {
                println!("{}  {}", state, state.name());
            }
        }
    }

    Ok(())
}

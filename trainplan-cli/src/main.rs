mod client;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trainplan")]
#[command(about = "Convert a training plan into an ICS calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the scheduled plan without writing a calendar file
    Preview {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Generate an ICS calendar file
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Output path for the generated calendar
        #[arg(short, long, default_value = "training_plan.ics")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Shared training-plan URL to fetch
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Text file pasted from the plan page
    #[arg(long)]
    file: Option<PathBuf>,

    /// Plan start date (YYYY-MM-DD, default: today)
    #[arg(long)]
    start_date: Option<String>,

    /// Dictionary file translating coded workout names
    #[arg(long, default_value = "plan_dictionary.json")]
    dictionary: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { source } => commands::preview::run(source).await,
        Commands::Convert { source, output } => commands::convert::run(source, output).await,
    }
}

use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "logtriage")]
#[clap(about = "AI-assisted log triage with a keyword fallback", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

use std::path::PathBuf;
use clap::Subcommand;
use uuid::Uuid;
use crate::config::constants::DEFAULT_HISTORY_PAGE_SIZE;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze log text from a file or stdin
    Analyze {
        #[clap(short, long)]
        file: Option<PathBuf>,
        /// Skip the AI call and run the keyword scan only
        #[clap(long)]
        offline: bool,
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,
        #[clap(short, long)]
        owner: Option<String>,
        #[clap(long)]
        no_save: bool,
    },
    /// Check the configuration file
    Validate,
    /// Browse stored analyses
    History {
        #[clap(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    List {
        #[clap(short, long, default_value_t = 1)]
        page: usize,
        #[clap(long, default_value_t = DEFAULT_HISTORY_PAGE_SIZE)]
        page_size: usize,
        #[clap(short, long)]
        owner: Option<String>,
    },
    Show {
        id: Uuid,
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,
    },
    Delete {
        id: Uuid,
    },
}

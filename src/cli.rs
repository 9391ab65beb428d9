use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder holding the documents
    #[clap(default_value = ".")]
    pub path: PathBuf,

    #[clap(long, value_parser, default_value_t = false)]
    pub verbose: bool,

    /// Write the log to this file instead of stderr
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    /// Read settings from this file instead of the usual locations
    #[clap(long, value_parser)]
    pub config: Option<PathBuf>,

    #[clap(long, value_parser, default_value_t = false)]
    pub no_progress: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the documents containing a word
    Search {
        word: String,

        /// Keep only the matches that also contain this word (repeatable, applied in order)
        #[clap(long, value_parser)]
        refine: Vec<String>,

        /// Add a Yes/No column for this word and sort by it (repeatable, implies --table)
        #[clap(long, value_parser)]
        mark: Vec<String>,

        /// Show matches as a code/company/status table
        #[clap(long, value_parser, default_value_t = false)]
        table: bool,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,

        /// Copy the matching file names to the clipboard
        #[clap(long, value_parser, default_value_t = false)]
        copy: bool,
    },
    /// List the documents that would be searched
    List {
        #[clap(short, long, value_parser, default_value_t = false)]
        long: bool,
    },
    /// Prompt for words and narrow the matches step by step
    Interactive,
    /// Print shell completions
    Completions {
        #[clap(value_enum)]
        shell: Shell,
    },
}

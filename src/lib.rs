pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod interactive;
pub mod list;
pub mod output;
mod progress;
pub mod query;
pub mod record;
pub mod search;
pub mod table;
pub mod walker;

pub use crate::error::{DocsiftError, Result};
pub use clap::Parser;
pub use cli::{Cli, Commands};
pub use extractor::{DocxExtractor, TextExtractor};
pub use output::{OutputFormat, OutputFormatter, SearchReport};
pub use progress::{Progress, ProgressReporter, ProgressStats};
pub use query::Query;
pub use record::{FileRecord, project};
pub use search::{MatchSet, Searcher, refine, search};
pub use table::{ResultTable, TableLabels};
pub use walker::candidate_files;

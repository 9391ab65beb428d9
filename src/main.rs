use clap::CommandFactory;
use clap::Parser;
use colored::*;
use docsift::cli::{Cli, Commands};
use docsift::config::Config;
use docsift::error::{DocsiftError, Result as DocsiftResult};
use docsift::interactive::{InteractiveSession, TerminalPrompter};
use docsift::list::{list_documents, print_long_format, print_simple_list};
use docsift::{
    DocxExtractor, MatchSet, OutputFormat, OutputFormatter, ProgressReporter, ResultTable,
    SearchReport, Searcher, project,
};
use env_logger::{Builder, Env, Target};
use is_terminal::IsTerminal;
use log::{LevelFilter, info};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> DocsiftResult<()> {
    setup_logging(cli)?;
    let config = load_config(cli)?;

    let start_time = Instant::now();
    info!("Application started with command: {:?}", cli.command);

    match &cli.command {
        Commands::Search {
            word,
            refine,
            mark,
            table,
            output_format,
            copy,
        } => {
            let show_table = *table || !mark.is_empty() || config.display.show_table;
            let show_progress = progress_enabled(cli, &config, *output_format);

            let mut queries = vec![word.trim().to_string()];
            let mut matches = run_pass(cli, &config, show_progress, word, |searcher| {
                searcher.search(&cli.path, word)
            })?;

            for next in refine {
                queries.push(next.trim().to_string());
                matches = run_pass(cli, &config, show_progress, next, |searcher| {
                    searcher.refine(&cli.path, matches.as_slice(), next)
                })?;
            }

            let result_table = if show_table {
                let records = project(
                    matches.as_slice(),
                    &config.table.delimiter,
                    &config.search.extension,
                );
                let mut result_table = ResultTable::new(&records, config.table.labels());
                for criterion in mark {
                    let verdicts = run_pass(cli, &config, show_progress, criterion, |searcher| {
                        searcher.mark(&cli.path, matches.as_slice(), criterion)
                    })?;
                    result_table.add_criterion(criterion.trim(), &verdicts);
                }
                Some(result_table)
            } else {
                None
            };

            let report = SearchReport {
                folder: &cli.path,
                queries,
                matches: &matches,
                table: result_table.as_ref(),
            };
            print!(
                "{}",
                OutputFormatter::new(*output_format).format_report(&report)?
            );

            if *copy && !matches.is_empty() {
                copy_to_clipboard(&matches)?;
                eprintln!("\n{}", "Results copied to clipboard!".green());
            }
        }

        Commands::List { long } => {
            let documents = list_documents(&cli.path, &config.search.extension)?;
            if *long {
                print_long_format(&documents);
            } else {
                print_simple_list(&documents);
            }
            println!("\n{}: {}", "Total documents".cyan(), documents.len());
        }

        Commands::Interactive => {
            let searcher = Searcher::new(DocxExtractor::new()).extension(&config.search.extension);
            let stdout = std::io::stdout();
            InteractiveSession::new(&cli.path, searcher, TerminalPrompter, stdout.lock()).run()?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "docsift", &mut std::io::stdout());
        }
    }

    if config.display.show_timing {
        info!(
            "Application finished. Total elapsed time: {:.2?}",
            start_time.elapsed()
        );
    }
    Ok(())
}

/// Runs one search pass with a progress bar wired to the searcher.
fn run_pass<T, F>(
    cli: &Cli,
    config: &Config,
    show_progress: bool,
    word: &str,
    pass: F,
) -> DocsiftResult<T>
where
    F: FnOnce(&mut Searcher<'_, DocxExtractor>) -> DocsiftResult<T>,
    T: PassSize,
{
    let mut reporter = if show_progress {
        ProgressReporter::new(0)
    } else {
        ProgressReporter::hidden()
    };
    reporter.set_label(&format!("Searching for '{}' in {}", word.trim(), cli.path.display()));

    let result = {
        let mut searcher = Searcher::new(DocxExtractor::new())
            .extension(&config.search.extension)
            .on_progress(|progress| reporter.observe(progress));
        pass(&mut searcher)
    };

    match result {
        Ok(value) => {
            let stats = reporter.finish(value.found());
            info!(
                "'{}': {} of {} documents in {:.2?}",
                word.trim(),
                stats.matches_found,
                stats.documents_processed,
                stats.elapsed
            );
            Ok(value)
        }
        Err(e) => {
            reporter.finish(0);
            Err(e)
        }
    }
}

/// Number of documents a pass found, for the progress summary.
trait PassSize {
    fn found(&self) -> usize;
}

impl PassSize for MatchSet {
    fn found(&self) -> usize {
        self.len()
    }
}

impl PassSize for Vec<(String, bool)> {
    fn found(&self) -> usize {
        self.iter().filter(|(_, found)| *found).count()
    }
}

fn progress_enabled(cli: &Cli, config: &Config, format: OutputFormat) -> bool {
    !cli.no_progress
        && config.display.show_progress
        && format == OutputFormat::Text
        && std::io::stderr().is_terminal()
}

fn load_config(cli: &Cli) -> DocsiftResult<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.map_err(|e| DocsiftError::Config(format!("{e:#}")))
}

fn copy_to_clipboard(matches: &MatchSet) -> DocsiftResult<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(matches.as_slice().join("\n"))?;
    Ok(())
}

fn setup_logging(cli: &Cli) -> DocsiftResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        create_parent_dir(log_path)?;
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| DocsiftError::Other(e.to_string()))?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> DocsiftResult<()> {
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    Ok(())
}

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// One step of a search pass: `processed` of `total` documents tested so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct ProgressStats {
    pub documents_processed: usize,
    pub matches_found: usize,
    pub elapsed: Duration,
}

/// Terminal progress bar for one search pass.
pub struct ProgressReporter {
    bar: ProgressBar,
    documents_processed: usize,
    start_time: Instant,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents ({eta})\n{msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");

        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        Self::with_bar(bar)
    }

    /// A reporter that tracks counts without drawing anything.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            documents_processed: 0,
            start_time: Instant::now(),
        }
    }

    pub fn set_label(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    pub fn observe(&mut self, progress: Progress) {
        if self.bar.length() != Some(progress.total as u64) {
            self.bar.set_length(progress.total as u64);
        }
        self.documents_processed = progress.processed;
        self.bar.set_position(progress.processed as u64);
    }

    pub fn finish(self, matches_found: usize) -> ProgressStats {
        let stats = ProgressStats {
            documents_processed: self.documents_processed,
            matches_found,
            elapsed: self.start_time.elapsed(),
        };
        self.bar.finish_with_message(format!(
            "Completed in {:.2}s: {} documents, {} matches",
            stats.elapsed.as_secs_f64(),
            stats.documents_processed,
            stats.matches_found
        ));
        stats
    }
}

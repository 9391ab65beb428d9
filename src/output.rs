use crate::error::Result;
use crate::search::MatchSet;
use crate::table::ResultTable;
use clap::ValueEnum;
use colored::*;
use serde_json::json;
use std::fmt;
use std::path::Path;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Everything one `search` run produced, ready to render.
pub struct SearchReport<'a> {
    pub folder: &'a Path,
    /// The initial word followed by every refinement word, in order.
    pub queries: Vec<String>,
    pub matches: &'a MatchSet,
    pub table: Option<&'a ResultTable>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, report: &SearchReport<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_text(report)),
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Markdown => Ok(self.format_markdown(report)),
        }
    }

    fn format_text(&self, report: &SearchReport<'_>) -> String {
        let mut output = String::new();
        let words = quoted(&report.queries);

        if report.matches.is_empty() {
            output.push_str(&format!("{} {words}\n", "No document contains".yellow()));
            return output;
        }

        output.push_str(&format!(
            "{} {} {} {words}:\n",
            "Found".green(),
            report.matches.len(),
            "documents containing".green()
        ));
        for name in report.matches {
            output.push_str(&format!("{name}\n"));
        }

        if let Some(table) = report.table {
            output.push('\n');
            output.push_str(&text_table(table));
        }

        output
    }

    fn format_json(&self, report: &SearchReport<'_>) -> Result<String> {
        let mut result = json!({
            "folder": report.folder.to_string_lossy(),
            "queries": report.queries,
            "total_matches": report.matches.len(),
            "matches": report.matches,
        });
        if let Some(table) = report.table {
            result["table"] = serde_json::to_value(table)?;
        }
        Ok(serde_json::to_string_pretty(&result)?)
    }

    fn format_markdown(&self, report: &SearchReport<'_>) -> String {
        let mut output = format!("# Documents containing {}\n\n", quoted(&report.queries));

        if report.matches.is_empty() {
            output.push_str("_No matches._\n");
            return output;
        }

        for name in report.matches {
            output.push_str(&format!("- {}\n", escape_markdown(name)));
        }

        if let Some(table) = report.table {
            output.push('\n');
            let header: Vec<String> = table.headers.iter().map(|h| escape_markdown(h)).collect();
            output.push_str(&format!("| {} |\n", header.join(" | ")));
            output.push_str(&format!("|{}\n", " --- |".repeat(table.headers.len())));
            for row in &table.rows {
                let cells: Vec<String> = row.cells.iter().map(|c| escape_markdown(c)).collect();
                output.push_str(&format!("| {} |\n", cells.join(" | ")));
            }
        }

        output
    }
}

fn quoted(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("'{w}'"))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn text_table(table: &ResultTable) -> String {
    let widths = table.column_widths();
    let mut output = String::new();

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w).cyan().bold().to_string())
        .collect();
    output.push_str(&format!("{}\n", header.join("  ").trim_end()));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format!("{}\n", rule.join("  ").dimmed()));

    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect();
        output.push_str(&format!("{}\n", cells.join("  ").trim_end()));
    }

    output
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::project;
    use crate::table::TableLabels;

    fn matches() -> MatchSet {
        MatchSet::from(vec![
            "A - Acme - Aprovado.docx".to_string(),
            "XYZ.docx".to_string(),
        ])
    }

    fn report<'a>(matches: &'a MatchSet, table: Option<&'a ResultTable>) -> SearchReport<'a> {
        SearchReport {
            folder: Path::new("/docs"),
            queries: vec!["aprovado".to_string()],
            matches,
            table,
        }
    }

    #[test]
    fn text_lists_every_match_even_outside_the_table() {
        let matches = matches();
        let records = project(matches.as_slice(), "-", "docx");
        let table = ResultTable::new(&records, TableLabels::default());

        let text = OutputFormatter::new(OutputFormat::Text)
            .format_report(&report(&matches, Some(&table)))
            .unwrap();
        assert!(text.contains("XYZ.docx"));
        assert!(text.contains("A - Acme - Aprovado.docx"));
        assert!(text.contains("A     Acme     Aprovado"));
    }

    #[test]
    fn text_reports_no_matches() {
        let empty = MatchSet::default();
        let text = OutputFormatter::new(OutputFormat::Text)
            .format_report(&report(&empty, None))
            .unwrap();
        assert!(text.contains("No document contains"));
        assert!(text.contains("'aprovado'"));
    }

    #[test]
    fn json_carries_matches_and_table() {
        let matches = matches();
        let records = project(matches.as_slice(), "-", "docx");
        let mut table = ResultTable::new(&records, TableLabels::default());
        table.add_criterion("urgente", &[("A - Acme - Aprovado.docx".to_string(), true)]);

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_report(&report(&matches, Some(&table)))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_matches"], 2);
        assert_eq!(value["matches"][1], "XYZ.docx");
        assert_eq!(value["table"]["headers"][3], "urgente");
        assert_eq!(value["table"]["rows"][0]["cells"][3], "Yes");
    }

    #[test]
    fn markdown_escapes_pipes() {
        let matches = MatchSet::from(vec!["a|b.docx".to_string()]);
        let md = OutputFormatter::new(OutputFormat::Markdown)
            .format_report(&report(&matches, None))
            .unwrap();
        assert!(md.contains("- a\\|b.docx"));
    }
}

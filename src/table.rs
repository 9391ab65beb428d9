use crate::record::FileRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub file_name: String,
    pub cells: Vec<String>,
    #[serde(skip)]
    verdicts: Vec<bool>,
}

/// Labels used when rendering the table.
#[derive(Debug, Clone)]
pub struct TableLabels {
    pub headers: [String; 3],
    pub yes: String,
    pub no: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            headers: [
                "Code".to_string(),
                "Company".to_string(),
                "Status".to_string(),
            ],
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}

/// The structured view of a match set: one row per conforming file name,
/// plus one Yes/No column per extra criterion.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    #[serde(skip)]
    labels: TableLabels,
}

impl ResultTable {
    pub fn new(records: &[FileRecord], labels: TableLabels) -> Self {
        let rows = records
            .iter()
            .map(|r| TableRow {
                file_name: r.file_name.clone(),
                cells: vec![r.code.clone(), r.company.clone(), r.status.clone()],
                verdicts: Vec::new(),
            })
            .collect();

        Self {
            headers: labels.headers.to_vec(),
            rows,
            labels,
        }
    }

    /// Appends a column titled `word` and sorts rows with a "yes" in it first.
    ///
    /// Verdicts are joined by file name. A row without a verdict counts as "no".
    pub fn add_criterion(&mut self, word: &str, verdicts: &[(String, bool)]) {
        let by_name: HashMap<&str, bool> = verdicts
            .iter()
            .map(|(name, found)| (name.as_str(), *found))
            .collect();

        self.headers.push(word.to_string());
        for row in &mut self.rows {
            let found = by_name.get(row.file_name.as_str()).copied().unwrap_or(false);
            let label = if found { &self.labels.yes } else { &self.labels.no };
            row.cells.push(label.clone());
            row.verdicts.push(found);
        }

        // Stable: ties keep the order of the previous sort.
        self.rows
            .sort_by(|a, b| b.verdicts.last().cmp(&a.verdicts.last()));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(3)
    }

    /// Width of every column, in characters, for aligned text output.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::project;

    fn table() -> ResultTable {
        let records = project(
            &[
                "A - Acme - Aprovado.docx",
                "B - Beta - Pendente.docx",
                "C - Gamma - Aprovado.docx",
            ],
            "-",
            "docx",
        );
        ResultTable::new(&records, TableLabels::default())
    }

    fn verdicts(pairs: &[(&str, bool)]) -> Vec<(String, bool)> {
        pairs.iter().map(|(n, f)| (n.to_string(), *f)).collect()
    }

    fn codes(table: &ResultTable) -> Vec<&str> {
        table.rows.iter().map(|r| r.cells[0].as_str()).collect()
    }

    #[test]
    fn base_columns() {
        let table = table();
        assert_eq!(table.headers, vec!["Code", "Company", "Status"]);
        assert_eq!(table.rows[1].cells, vec!["B", "Beta", "Pendente"]);
        assert_eq!(table.criteria_count(), 0);
    }

    #[test]
    fn criterion_sorts_yes_first_and_keeps_ties_in_order() {
        let mut table = table();
        table.add_criterion(
            "urgente",
            &verdicts(&[
                ("A - Acme - Aprovado.docx", false),
                ("B - Beta - Pendente.docx", true),
                ("C - Gamma - Aprovado.docx", false),
            ]),
        );

        assert_eq!(table.headers.last().unwrap(), "urgente");
        assert_eq!(codes(&table), vec!["B", "A", "C"]);
        assert_eq!(table.rows[0].cells[3], "Yes");
        assert_eq!(table.rows[1].cells[3], "No");
    }

    #[test]
    fn verdicts_follow_file_names_not_positions() {
        let mut table = table();
        table.add_criterion(
            "x",
            &verdicts(&[
                ("XYZ.docx", true),
                ("C - Gamma - Aprovado.docx", true),
            ]),
        );
        assert_eq!(codes(&table), vec!["C", "A", "B"]);
    }

    #[test]
    fn each_criterion_adds_a_column() {
        let mut table = table();
        table.add_criterion("one", &verdicts(&[("A - Acme - Aprovado.docx", true)]));
        table.add_criterion("two", &verdicts(&[("C - Gamma - Aprovado.docx", true)]));

        assert_eq!(table.criteria_count(), 2);
        assert_eq!(codes(&table), vec!["C", "A", "B"]);
        assert_eq!(table.rows[0].cells[3..], ["No", "Yes"]);
    }

    #[test]
    fn widths_cover_headers_and_cells() {
        let table = table();
        assert_eq!(table.column_widths(), vec![4, 7, 8]);
    }
}

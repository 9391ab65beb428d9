use crate::error::{DocsiftError, Result};
use log::warn;
use serde::Serialize;

pub const DEFAULT_DELIMITER: &str = "-";

/// A file name of the form `code - company - status.ext`, split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub file_name: String,
    pub code: String,
    pub company: String,
    pub status: String,
}

impl FileRecord {
    pub fn parse(file_name: &str, delimiter: &str, extension: &str) -> Result<Self> {
        let fields: Vec<&str> = file_name.split(delimiter).collect();
        let [code, company, status] = fields.as_slice() else {
            return Err(DocsiftError::UnexpectedFilenameShape(file_name.to_string()));
        };

        let suffix = format!(".{extension}");
        let status = status.trim();
        let status = status.strip_suffix(&suffix).unwrap_or(status).trim_end();

        Ok(Self {
            file_name: file_name.to_string(),
            code: code.trim().to_string(),
            company: company.trim().to_string(),
            status: status.to_string(),
        })
    }
}

/// Records for every conforming name in `matches`; the rest are reported and left out.
pub fn project<S: AsRef<str>>(matches: &[S], delimiter: &str, extension: &str) -> Vec<FileRecord> {
    matches
        .iter()
        .filter_map(|name| match FileRecord::parse(name.as_ref(), delimiter, extension) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("{e}: not shown in the table");
                None
            }
        })
        .collect()
}

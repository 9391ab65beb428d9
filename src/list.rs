use crate::error::Result;
use crate::walker::candidate_files;
use byte_unit::{Byte, UnitType};
use std::fs;
use std::path::Path;

pub struct DocumentInfo {
    pub name: String,
    pub size: u64,
}

/// The candidate documents of `folder`, in search order.
pub fn list_documents(folder: &Path, extension: &str) -> Result<Vec<DocumentInfo>> {
    let names = candidate_files(folder, extension)?;
    let mut documents = Vec::with_capacity(names.len());
    for name in names {
        let size = fs::metadata(folder.join(&name))?.len();
        documents.push(DocumentInfo { name, size });
    }
    Ok(documents)
}

pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.2} {}", adjusted.get_value(), adjusted.get_unit())
}

pub fn print_simple_list(documents: &[DocumentInfo]) {
    for doc in documents {
        println!("{}", doc.name);
    }
}

pub fn print_long_format(documents: &[DocumentInfo]) {
    for doc in documents {
        println!("{:<60} {:>12}", doc.name, format_size(doc.size));
    }
}

#![allow(dead_code)]

use docx_rs::{Docx, Paragraph, Run};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }
    let file = File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

/// An archive whose only part is `word/document.xml` with the given content.
pub fn write_document_part(path: &Path, document_xml: &str) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// The folder used by the worked examples: three well-formed names, one
/// name without fields, one corrupt document and one non-document file.
pub fn sample_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_docx(&root.join("A - Acme - Aprovado.docx"), &["Relatório final aprovado"]);
    write_docx(&root.join("B - Beta - Pendente.docx"), &["Em análise"]);
    write_docx(
        &root.join("C - Gamma - Aprovado.docx"),
        &["Parecer", "", "APROVADO com ressalvas, urgente"],
    );
    write_docx(&root.join("XYZ.docx"), &["Aprovado sem número de código"]);
    fs::write(root.join("D - Delta - Aprovado.docx"), b"not really a docx").unwrap();
    fs::write(root.join("notes.txt"), "aprovado").unwrap();
    dir
}

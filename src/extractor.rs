//! Paragraph text extraction from Word documents.

use crate::error::{DocsiftError, Result};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use xml::reader::{EventReader, XmlEvent};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Source of paragraph text for one document.
///
/// Implementations must not modify the file they read.
pub trait TextExtractor {
    /// Returns the document's paragraphs in stored order.
    ///
    /// Any failure to open or parse the file is reported as
    /// [`DocsiftError::DocumentUnreadable`].
    fn extract(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads `.docx` files through `docx-rs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|e| unreadable(path, e.to_string()))?;
        check_document_part(&bytes).map_err(|reason| unreadable(path, reason))?;
        let docx =
            docx_rs::read_docx(&bytes).map_err(|e| unreadable(path, format!("{e:?}")))?;

        // Body-level paragraphs only; tables, headers and footers are skipped.
        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs)
    }
}

fn unreadable(path: &Path, reason: String) -> DocsiftError {
    DocsiftError::DocumentUnreadable {
        path: path.to_path_buf(),
        reason,
    }
}

/// The main part must be well-formed XML with a root element before it reaches
/// `docx_rs::read_docx`, which loops on a truncated body and accepts an empty one.
fn check_document_part(bytes: &[u8]) -> std::result::Result<(), String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("{DOCUMENT_PART}: {e}"))?;
    let mut xml = Vec::new();
    part.read_to_end(&mut xml)
        .map_err(|e| format!("{DOCUMENT_PART}: {e}"))?;

    let mut has_root = false;
    for event in EventReader::new(xml.as_slice()) {
        match event {
            Ok(XmlEvent::StartElement { .. }) => has_root = true,
            Ok(XmlEvent::EndDocument) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("{DOCUMENT_PART}: {e}")),
        }
    }

    if has_root {
        Ok(())
    } else {
        Err(format!("{DOCUMENT_PART}: no root element"))
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}

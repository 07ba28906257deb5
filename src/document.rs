//! Document Building
//!
//! Packages normalized text into a downloadable Word document. One docx
//! paragraph per reconstructed Paragraph, no styling or metadata.

use crate::error::{ScribeError, ScribeResult};
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The final downloadable artifact: ordered, non-blank paragraphs
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentArtifact {
    pub file_name: String,
    pub paragraphs: Vec<String>,
}

impl DocumentArtifact {
    /// Assemble sections of normalized text into one artifact.
    ///
    /// Sections are concatenated in input order. Paragraphs that are blank
    /// after trimming are dropped; an all-blank input yields a valid
    /// zero-paragraph artifact and the caller sends it as-is.
    pub fn build(sections: &[Vec<String>]) -> Self {
        let paragraphs = sections
            .iter()
            .flat_map(|section| section.iter())
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            file_name: "extracted-text.docx".to_string(),
            paragraphs,
        }
    }

    /// Serialize to docx bytes
    pub fn to_docx_bytes(&self) -> ScribeResult<Vec<u8>> {
        let mut docx = Docx::new();
        for text in &self.paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())));
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| ScribeError::Document(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

//! OCR (Optical Character Recognition) Module
//!
//! Provides multiple OCR backends:
//! - Tesseract: in-process recognition via leptonica/tesseract bindings
//! - Cli: spawns the `tesseract` binary, for hosts without the shared libs

pub mod cli;
pub mod tesseract;

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;

// Re-export main types
pub use cli::TesseractCli;
pub use tesseract::TesseractOcr;

/// Trait for OCR engines
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognize text in the image, one fragment per detected line,
    /// in reading order. No bounding-box detail.
    async fn recognize(&self, image: &[u8]) -> Result<Vec<String>>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured OCR engine
pub fn create_engine(config: &Config) -> Result<Box<dyn TextRecognizer>> {
    match config.ocr_engine.as_str() {
        "tesseract" => Ok(Box::new(tesseract::TesseractOcr::new(&config.ocr_languages)?)),
        "cli" => Ok(Box::new(cli::TesseractCli::new(&config.ocr_languages))),
        other => {
            tracing::warn!("Unknown OCR engine '{}', falling back to tesseract", other);
            Ok(Box::new(tesseract::TesseractOcr::new(&config.ocr_languages)?))
        }
    }
}

/// Split an engine's flat text output into per-line fragments
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.trim().lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_interior_blanks() {
        let lines = split_lines("first\n\nsecond\n");
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_split_lines_empty_text() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("  \n  ").is_empty());
    }
}

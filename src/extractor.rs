//! Text Extraction
//!
//! Adapter between the controller and the OCR backends. Runs the engine
//! with a time bound, recovers from engine failure, and normalizes the raw
//! line output into paragraphs.

use crate::normalizer::merge_fragments;
use crate::ocr::TextRecognizer;
use std::time::Duration;
use tracing::error;

pub struct TextExtractor {
    engine: Box<dyn TextRecognizer>,
    timeout: Duration,
}

impl TextExtractor {
    pub fn new(engine: Box<dyn TextRecognizer>, timeout: Duration) -> Self {
        Self { engine, timeout }
    }

    /// Extract paragraphs of text from an image.
    ///
    /// Never fails: an engine error or timeout is logged and reported as
    /// zero paragraphs. Callers must treat "no text" as a valid outcome.
    pub async fn extract(&self, image: &[u8]) -> Vec<String> {
        let fragments = match tokio::time::timeout(self.timeout, self.engine.recognize(image)).await
        {
            Ok(Ok(fragments)) => fragments,
            Ok(Err(e)) => {
                error!("OCR failed ({}): {}", self.engine.name(), e);
                return Vec::new();
            }
            Err(_) => {
                error!(
                    "OCR timed out after {}s ({})",
                    self.timeout.as_secs(),
                    self.engine.name()
                );
                return Vec::new();
            }
        };

        merge_fragments(&fragments)
    }
}

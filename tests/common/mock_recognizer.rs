//! Mock OCR Engine for Testing
//!
//! Provides controlled recognition output for integration tests.

use anyhow::Result;
use async_trait::async_trait;
use snapscribe::ocr::TextRecognizer;
use std::sync::{Arc, Mutex};

/// Mock recognizer that returns predetermined line fragments
pub struct MockRecognizer {
    pub lines: Vec<String>,
    pub fail: bool,
    /// Record all images received (for verification)
    pub received_images: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockRecognizer {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            fail: false,
            received_images: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock whose recognition always errors
    pub fn failing() -> Self {
        Self {
            lines: Vec::new(),
            fail: true,
            received_images: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextRecognizer for MockRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<Vec<String>> {
        if let Ok(mut images) = self.received_images.lock() {
            images.push(image.to_vec());
        }

        if self.fail {
            anyhow::bail!("mock recognition failure");
        }
        Ok(self.lines.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_recognizer_returns_lines() {
        let mock = MockRecognizer::with_lines(&["hello", "world."]);
        let lines = tokio_test::block_on(mock.recognize(&[0u8; 8])).unwrap();
        assert_eq!(lines, vec!["hello", "world."]);
        assert_eq!(mock.received_images.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_mock_recognizer_failure() {
        let mock = MockRecognizer::failing();
        assert!(tokio_test::block_on(mock.recognize(&[0u8; 8])).is_err());
    }
}

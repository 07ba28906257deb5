//! In-process Tesseract backend
//!
//! Wraps the leptonica/tesseract bindings. The engine object is stateful
//! and not thread-safe, so it lives behind a mutex and every recognition
//! runs on the blocking pool.

use super::{split_lines, TextRecognizer};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use leptess::LepTess;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct TesseractOcr {
    engine: Arc<Mutex<LepTess>>,
}

impl TesseractOcr {
    /// Initialize the engine with fixed language hints, e.g. `"rus+eng"`
    pub fn new(languages: &str) -> Result<Self> {
        let engine = LepTess::new(None, languages)
            .map_err(|e| anyhow!("failed to initialize tesseract for '{languages}': {e}"))?;
        tracing::info!(languages, "Tesseract OCR initialized");
        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
        })
    }
}

#[async_trait]
impl TextRecognizer for TesseractOcr {
    async fn recognize(&self, image: &[u8]) -> Result<Vec<String>> {
        let bytes = image.to_vec();
        let engine = Arc::clone(&self.engine);

        let text = tokio::task::spawn_blocking(move || {
            let mut engine = engine.blocking_lock();
            engine
                .set_image_from_mem(&bytes)
                .map_err(|e| anyhow!("failed to load image: {e}"))?;
            engine
                .get_utf8_text()
                .map_err(|e| anyhow!("failed to read recognized text: {e}"))
        })
        .await
        .map_err(|e| anyhow!("OCR task panicked: {e}"))??;

        Ok(split_lines(&text))
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}

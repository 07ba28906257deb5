//! Subprocess Tesseract backend
//!
//! Pipes the image bytes to a spawned `tesseract` process and captures the
//! recognized text from stdout. Useful where the tesseract shared libraries
//! are not installed but the binary is.

use super::{split_lines, TextRecognizer};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub struct TesseractCli {
    languages: String,
}

impl TesseractCli {
    pub fn new(languages: &str) -> Self {
        Self {
            languages: languages.to_string(),
        }
    }
}

#[async_trait]
impl TextRecognizer for TesseractCli {
    async fn recognize(&self, image: &[u8]) -> Result<Vec<String>> {
        let mut child = Command::new("tesseract")
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to spawn tesseract; is the binary on PATH?")?;

        let mut stdin = child
            .stdin
            .take()
            .context("no stdin handle on tesseract process")?;
        stdin.write_all(image).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("tesseract exited with {}: {}", output.status, stderr.trim());
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_lines(&text))
    }

    fn name(&self) -> &str {
        "cli"
    }
}

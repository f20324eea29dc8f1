//! OCR Providers
//!
//! Defines the recognition engine trait and the Tesseract command-line adapter.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::error::RecognitionError;
use super::types::{ImageReference, PageSegmentation, RecognitionConfiguration, RecognitionOutput};
use crate::config::OcrConfig;

/// Recognition engine capability.
///
/// Implementations translate a [`RecognitionConfiguration`] into their own
/// parameter format and return the raw recognized text. They must not trim,
/// classify or retry.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Engine name for diagnostics
    fn name(&self) -> &'static str;

    /// Check if the engine can be invoked
    async fn is_available(&self) -> bool;

    /// Recognize text in an image
    async fn recognize(
        &self,
        image: &ImageReference,
        language: &str,
        configuration: &RecognitionConfiguration,
    ) -> Result<RecognitionOutput, RecognitionError>;
}

/// Tesseract OCR provider driving the `tesseract` executable
pub struct TesseractProvider {
    binary: String,
    tessdata_dir: PathBuf,
    /// Where in-memory images are written for the engine to read
    staging_dir: PathBuf,
}

impl TesseractProvider {
    /// Create a provider, checking the language-data directory once up front
    pub fn new(config: &OcrConfig) -> Result<Self, RecognitionError> {
        if !config.tessdata_path.is_dir() {
            return Err(RecognitionError::LanguageDataNotFound(
                config.tessdata_path.clone(),
            ));
        }

        Ok(Self {
            binary: config.tesseract_bin.clone(),
            tessdata_dir: config.tessdata_path.clone(),
            staging_dir: std::env::temp_dir(),
        })
    }

    /// Stage byte images somewhere other than the system temp directory
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    async fn run(
        &self,
        input: &std::path::Path,
        language: &str,
        configuration: &RecognitionConfiguration,
    ) -> Result<RecognitionOutput, RecognitionError> {
        let output = Command::new(&self.binary)
            .arg(input)
            .arg("stdout")
            .arg("--tessdata-dir")
            .arg(&self.tessdata_dir)
            .arg("-l")
            .arg(language)
            .args(engine_args(configuration))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    RecognitionError::EngineUnavailable(format!("{}: {}", self.binary, e))
                }
                _ => RecognitionError::ProcessingError(format!("Failed to run tesseract: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::ProcessingError(format!(
                "Tesseract failed ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(RecognitionOutput {
            text: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[async_trait]
impl RecognitionEngine for TesseractProvider {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    async fn recognize(
        &self,
        image: &ImageReference,
        language: &str,
        configuration: &RecognitionConfiguration,
    ) -> Result<RecognitionOutput, RecognitionError> {
        match image {
            ImageReference::Path(path) => self.run(path, language, configuration).await,
            ImageReference::Bytes { data, .. } => {
                // Removed on drop, including when the caller abandons the call
                let staged = tempfile::Builder::new()
                    .prefix("inkscan_ocr_")
                    .tempfile_in(&self.staging_dir)?;
                tokio::fs::write(staged.path(), data).await?;

                self.run(staged.path(), language, configuration).await
            }
        }
    }
}

/// Tesseract page segmentation mode. Sparse text is psm 11 (no layout
/// assumption) rather than psm 13, which treats the image as one raw line.
fn psm(segmentation: PageSegmentation) -> u8 {
    match segmentation {
        PageSegmentation::UniformBlock => 6,
        PageSegmentation::SparseText => 11,
    }
}

/// Command-line flags for a configuration
fn engine_args(configuration: &RecognitionConfiguration) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--psm".into(),
        psm(configuration.page_segmentation()).to_string().into(),
    ];

    if configuration.preserve_interword_spacing() {
        args.push("-c".into());
        args.push("preserve_interword_spaces=1".into());
    }

    if let Some(whitelist) = configuration.character_whitelist() {
        args.push("-c".into());
        args.push(format!("tessedit_char_whitelist={}", whitelist.to_engine_string()).into());
    }

    args
}

/// Call recorded by [`MockProvider`]
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub image: String,
    pub language: String,
    pub configuration: RecognitionConfiguration,
}

/// Mock provider for testing; replays scripted responses in call order
#[cfg(test)]
pub(crate) struct MockProvider {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<String, RecognitionError>>>,
    calls: std::sync::Mutex<Vec<RecordedCall>>,
}

#[cfg(test)]
impl MockProvider {
    pub fn new(responses: Vec<Result<&str, RecognitionError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(
                responses
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl RecognitionEngine for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn recognize(
        &self,
        image: &ImageReference,
        language: &str,
        configuration: &RecognitionConfiguration,
    ) -> Result<RecognitionOutput, RecognitionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            image: image.to_string(),
            language: language.to_string(),
            configuration: configuration.clone(),
        });

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(RecognitionOutput { text }),
            Some(Err(e)) => Err(e),
            None => Err(RecognitionError::ProcessingError(
                "no scripted response".to_string(),
            )),
        }
    }
}

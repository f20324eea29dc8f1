//! OCR Service
//!
//! Runs the two-pass extraction pipeline: draft recognition, classification,
//! configuration selection, final recognition.

use std::sync::Arc;

use super::{
    classifier,
    error::{ExtractionError, RecognitionError},
    provider::{RecognitionEngine, TesseractProvider},
    selector::{draft_configuration, select_configuration},
    types::{ExtractionResult, ImageReference, RecognitionPass},
};
use crate::config::OcrConfig;

/// Extraction pipeline over an injected recognition engine.
///
/// Holds no per-run state, so one service can serve concurrent extractions.
pub struct OcrService {
    engine: Arc<dyn RecognitionEngine>,
    draft_language: String,
    final_language: String,
}

impl OcrService {
    /// Create a service over any engine
    pub fn new(engine: Arc<dyn RecognitionEngine>, config: &OcrConfig) -> Self {
        Self {
            engine,
            draft_language: config.draft_language.clone(),
            final_language: config.final_language.clone(),
        }
    }

    /// Create a service backed by the Tesseract executable
    pub fn from_config(config: &OcrConfig) -> Result<Self, RecognitionError> {
        let engine = TesseractProvider::new(config)?;
        tracing::info!(
            tessdata = %config.tessdata_path.display(),
            binary = %config.tesseract_bin,
            "OCR service initialized"
        );
        Ok(Self::new(Arc::new(engine), config))
    }

    /// Check whether the underlying engine can be invoked
    pub async fn is_available(&self) -> bool {
        self.engine.is_available().await
    }

    /// Extract text from an image.
    ///
    /// The returned text always comes from the final pass; the draft text is
    /// only used to pick the content type. Any engine failure aborts the run
    /// without a partial result.
    #[tracing::instrument(skip(self, image), fields(image = %image, engine = self.engine.name()))]
    pub async fn extract(&self, image: &ImageReference) -> Result<ExtractionResult, ExtractionError> {
        let fail = |pass: RecognitionPass| {
            move |source: RecognitionError| ExtractionError::EngineFailure {
                image: image.to_string(),
                pass,
                source,
            }
        };

        let draft = self
            .engine
            .recognize(image, &self.draft_language, &draft_configuration())
            .await
            .map_err(fail(RecognitionPass::Draft))?;

        let signals = classifier::measure(&draft.text);
        let mode = signals.mode();
        tracing::debug!(
            lines = signals.non_empty_lines,
            avg_line_length = signals.avg_line_length,
            punctuation = signals.punctuation_count,
            %mode,
            "Draft pass classified"
        );

        let configuration = select_configuration(mode);
        let final_output = self
            .engine
            .recognize(image, &self.final_language, &configuration)
            .await
            .map_err(fail(RecognitionPass::Final))?;

        let text = final_output.text.trim().to_string();
        tracing::debug!(chars = text.chars().count(), %mode, "Final pass complete");

        Ok(ExtractionResult { text, mode })
    }
}

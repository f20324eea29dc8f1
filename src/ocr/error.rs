//! OCR error types

use std::path::PathBuf;

use thiserror::Error;

use super::types::RecognitionPass;

/// Failures raised by a recognition engine
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("OCR engine not available: {0}")]
    EngineUnavailable(String),

    #[error("Language data not found at: {0}")]
    LanguageDataNotFound(PathBuf),

    #[error("Failed to stage image: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),
}

/// Pipeline failure surfaced to callers.
///
/// Both passes fail the same way; `pass` is carried for diagnostics only.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("OCR failed for image: {image}")]
    EngineFailure {
        image: String,
        pass: RecognitionPass,
        #[source]
        source: RecognitionError,
    },
}

impl ExtractionError {
    /// Image the failed run was processing
    pub fn image(&self) -> &str {
        match self {
            Self::EngineFailure { image, .. } => image,
        }
    }

    /// Recognition call that failed
    pub fn pass(&self) -> RecognitionPass {
        match self {
            Self::EngineFailure { pass, .. } => *pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_engine_failure_message_names_image() {
        let err = ExtractionError::EngineFailure {
            image: "uploads/note.jpg".to_string(),
            pass: RecognitionPass::Final,
            source: RecognitionError::ProcessingError("exit status 1".to_string()),
        };

        assert_eq!(err.to_string(), "OCR failed for image: uploads/note.jpg");
        assert_eq!(err.image(), "uploads/note.jpg");
        assert_eq!(err.pass(), RecognitionPass::Final);
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("OCR processing failed: exit status 1".to_string())
        );
    }
}

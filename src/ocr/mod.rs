//! OCR Module
//!
//! Two-pass text extraction for uploaded document images.
//!
//! The pipeline runs a permissive draft pass, classifies the draft text as
//! typed or handwritten, picks a recognition configuration for that content
//! type and runs the final pass whose text is returned.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkscan::config::Config;
//! use inkscan::ocr::{ImageReference, OcrService};
//!
//! let config = Config::load()?;
//! let service = OcrService::from_config(&config.ocr)?;
//!
//! let result = service
//!     .extract(&ImageReference::from_path("uploads/page-1.png"))
//!     .await?;
//!
//! println!("{} ({})", result.text, result.mode);
//! ```

mod classifier;
mod error;
mod provider;
mod selector;
mod service;
mod types;

pub use classifier::{classify, measure, TextSignals, MIN_AVG_LINE_LENGTH, MIN_PUNCTUATION_COUNT};
pub use error::{ExtractionError, RecognitionError};
pub use provider::{RecognitionEngine, TesseractProvider};
pub use selector::{draft_configuration, select_configuration, TYPED_WHITELIST};
pub use service::OcrService;
pub use types::{
    CharacterWhitelist, ContentTypeMode, ExtractionResult, ImageReference, PageSegmentation,
    RecognitionConfiguration, RecognitionOutput, RecognitionPass,
};

//! Inkscan Library
//!
//! Extracts text from document images of unknown provenance. A cheap draft
//! recognition pass classifies the page as typed or handwritten, and a second
//! pass tuned for that content type produces the returned text.
//!
//! # Modules
//!
//! - `ocr`: Classifier, configuration selector, recognition engines and the
//!   extraction pipeline
//! - `config`: Environment-driven configuration
//! - `telemetry`: Tracing subscriber setup for the embedding process

pub mod config;
pub mod ocr;
pub mod telemetry;

pub use config::{Config, ConfigError, OcrConfig};
pub use ocr::{ExtractionError, ExtractionResult, ImageReference, OcrService};

//! Configuration management for Inkscan

use std::env;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Directory holding the engine's `*.traineddata` language models
    pub tessdata_path: PathBuf,
    /// Engine executable, resolved through `PATH` unless absolute
    pub tesseract_bin: String,
    /// Language model for the draft pass (broad, orientation-aware)
    pub draft_language: String,
    /// Language model for the final pass
    pub final_language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            tessdata_path: PathBuf::from("/usr/share/tesseract-ocr/5/tessdata"),
            tesseract_bin: "tesseract".to_string(),
            draft_language: "eng+osd".to_string(),
            final_language: "eng".to_string(),
        }
    }
}

impl Config {
    /// Read `.env` (if present) and then the process environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = OcrConfig::default();

        let tessdata_path = lookup("TESSDATA_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("TESSDATA_PATH"))?;

        Ok(Config {
            ocr: OcrConfig {
                tessdata_path,
                tesseract_bin: lookup("TESSERACT_BIN").unwrap_or(defaults.tesseract_bin),
                draft_language: language(&lookup, "OCR_DRAFT_LANGUAGE", defaults.draft_language)?,
                final_language: language(&lookup, "OCR_FINAL_LANGUAGE", defaults.final_language)?,
            },
        })
    }
}

/// Language identifiers look like `eng` or `eng+osd`
fn language(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: String,
) -> Result<String, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    let valid = !value.is_empty()
        && value
            .split('+')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));

    if valid {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            name,
            reason: format!("'{}' is not a language identifier", value),
        })
    }
}

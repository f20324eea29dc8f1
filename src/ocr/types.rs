//! OCR Types
//!
//! Defines the values that flow through the extraction pipeline.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Handle to a source image, owned by the caller for the pipeline's duration
#[derive(Debug, Clone)]
pub enum ImageReference {
    /// Image file on disk (e.g. an uploaded file)
    Path(PathBuf),
    /// In-memory image with a label used in diagnostics
    Bytes { label: String, data: Arc<[u8]> },
}

impl ImageReference {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn from_bytes(label: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes {
            label: label.into(),
            data: data.into(),
        }
    }

    /// Path on disk, if this reference points at a file
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bytes { .. } => None,
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Bytes { label, .. } => f.write_str(label),
        }
    }
}

/// Content type assigned to an image for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentTypeMode {
    /// Typeset text (long, punctuated lines)
    Typed,
    /// Freeform handwriting (short, sparse lines)
    Handwritten,
}

impl fmt::Display for ContentTypeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed => f.write_str("TYPED"),
            Self::Handwritten => f.write_str("HANDWRITTEN"),
        }
    }
}

/// Layout assumption handed to the recognition engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSegmentation {
    /// A single coherent block of prose
    UniformBlock,
    /// No layout assumption; tolerant of irregular line placement
    SparseText,
}

/// Restricted set of characters the engine may output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterWhitelist(BTreeSet<char>);

impl CharacterWhitelist {
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Characters concatenated in code point order
    pub fn to_engine_string(&self) -> String {
        self.0.iter().collect()
    }
}

impl FromIterator<char> for CharacterWhitelist {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Recognition tuning for one engine call.
///
/// Only the selector builds these, so spacing is always preserved and a
/// whitelist is present exactly when the configuration targets typed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfiguration {
    page_segmentation: PageSegmentation,
    preserve_interword_spacing: bool,
    character_whitelist: Option<CharacterWhitelist>,
}

impl RecognitionConfiguration {
    pub(crate) fn new(
        page_segmentation: PageSegmentation,
        character_whitelist: Option<CharacterWhitelist>,
    ) -> Self {
        Self {
            page_segmentation,
            preserve_interword_spacing: true,
            character_whitelist,
        }
    }

    pub fn page_segmentation(&self) -> PageSegmentation {
        self.page_segmentation
    }

    pub fn preserve_interword_spacing(&self) -> bool {
        self.preserve_interword_spacing
    }

    pub fn character_whitelist(&self) -> Option<&CharacterWhitelist> {
        self.character_whitelist.as_ref()
    }
}

/// Raw engine output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOutput {
    /// Recognized text, untrimmed
    pub text: String,
}

/// Which recognition call of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionPass {
    /// Permissive pass used only for classification
    Draft,
    /// Tuned pass whose text is returned
    Final,
}

impl fmt::Display for RecognitionPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => f.write_str("draft"),
            Self::Final => f.write_str("final"),
        }
    }
}

/// Pipeline output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Trimmed text from the final pass
    pub text: String,
    /// Content type detected from the draft pass
    pub mode: ContentTypeMode,
}

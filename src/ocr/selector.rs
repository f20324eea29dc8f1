//! Recognition configuration selection
//!
//! Maps a content type to the engine tuning used for the final pass.

use super::types::{CharacterWhitelist, ContentTypeMode, PageSegmentation, RecognitionConfiguration};

/// Characters allowed when recognizing typed content
pub const TYPED_WHITELIST: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,:;-()[]{}!?'\" ";

/// Configuration for the final pass.
///
/// Typed pages are read as one uniform block with a restricted alphabet,
/// which keeps clean fonts from drifting into look-alike glyphs. Handwriting
/// gets sparse segmentation and an unconstrained alphabet.
pub fn select_configuration(mode: ContentTypeMode) -> RecognitionConfiguration {
    match mode {
        ContentTypeMode::Typed => RecognitionConfiguration::new(
            PageSegmentation::UniformBlock,
            Some(TYPED_WHITELIST.chars().collect::<CharacterWhitelist>()),
        ),
        ContentTypeMode::Handwritten => {
            RecognitionConfiguration::new(PageSegmentation::SparseText, None)
        }
    }
}

/// Permissive, layout-agnostic configuration for the draft pass
pub fn draft_configuration() -> RecognitionConfiguration {
    RecognitionConfiguration::new(PageSegmentation::SparseText, None)
}

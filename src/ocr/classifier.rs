//! Content-type classification
//!
//! Coarse heuristic over draft OCR text: typed prose tends to produce long,
//! punctuated lines while handwritten notes come back short and sparse.

use super::types::ContentTypeMode;

/// Average non-empty line length must exceed this for typed content
pub const MIN_AVG_LINE_LENGTH: f64 = 40.0;

/// Punctuation count must exceed this for typed content
pub const MIN_PUNCTUATION_COUNT: usize = 5;

const PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Measurements the classifier decides on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSignals {
    /// Lines that are not blank after trimming
    pub non_empty_lines: usize,
    /// Mean length of non-empty lines, in characters (untrimmed)
    pub avg_line_length: f64,
    /// Occurrences of `. , ; : ! ?` across the whole text
    pub punctuation_count: usize,
}

impl TextSignals {
    pub fn mode(&self) -> ContentTypeMode {
        if self.avg_line_length > MIN_AVG_LINE_LENGTH
            && self.punctuation_count > MIN_PUNCTUATION_COUNT
        {
            ContentTypeMode::Typed
        } else {
            ContentTypeMode::Handwritten
        }
    }
}

/// Compute the classifier's inputs for a draft text
pub fn measure(text: &str) -> TextSignals {
    let (non_empty_lines, total_length) = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .fold((0usize, 0usize), |(count, total), line| {
            (count + 1, total + line.chars().count())
        });

    // Zero lines divides by one, giving an average of zero
    let avg_line_length = total_length as f64 / non_empty_lines.max(1) as f64;

    let punctuation_count = text.chars().filter(|c| PUNCTUATION.contains(c)).count();

    TextSignals {
        non_empty_lines,
        avg_line_length,
        punctuation_count,
    }
}

/// Classify draft text as typed or handwritten. Total over all strings.
pub fn classify(text: &str) -> ContentTypeMode {
    measure(text).mode()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "The committee met on Tuesday, and agreed on three points: budget, \
                         staffing, and schedule. Everyone signed off; nobody objected!";

    #[test]
    fn test_empty_text_is_handwritten() {
        let signals = measure("");
        assert_eq!(signals.non_empty_lines, 0);
        assert_eq!(signals.avg_line_length, 0.0);
        assert_eq!(signals.punctuation_count, 0);
        assert_eq!(classify(""), ContentTypeMode::Handwritten);
    }

    #[test]
    fn test_whitespace_only_is_handwritten() {
        assert_eq!(classify("   \n\t\n  \n"), ContentTypeMode::Handwritten);
        assert_eq!(measure("   \n\t\n").non_empty_lines, 0);
    }

    #[test]
    fn test_long_punctuated_prose_is_typed() {
        let signals = measure(PROSE);
        assert!(signals.avg_line_length > MIN_AVG_LINE_LENGTH);
        assert!(signals.punctuation_count > MIN_PUNCTUATION_COUNT);
        assert_eq!(classify(PROSE), ContentTypeMode::Typed);
    }

    #[test]
    fn test_short_lines_are_handwritten() {
        assert_eq!(classify("hi\nmom"), ContentTypeMode::Handwritten);
    }

    #[test]
    fn test_long_lines_without_punctuation_are_handwritten() {
        let text = "this line is definitely longer than forty characters in total\n\
                    and so is this one but there is no punctuation at all here";
        assert!(measure(text).avg_line_length > MIN_AVG_LINE_LENGTH);
        assert_eq!(classify(text), ContentTypeMode::Handwritten);
    }

    #[test]
    fn test_short_lines_with_heavy_punctuation_are_handwritten() {
        let text = "a, b.\nc; d!\ne? f:\ng.";
        assert!(measure(text).punctuation_count > MIN_PUNCTUATION_COUNT);
        assert_eq!(classify(text), ContentTypeMode::Handwritten);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Long enough, but only five punctuation marks
        let signals = measure("abcdefghijklmnopqrstuvwxyzabcdefghij.,;:!");
        assert_eq!(signals.avg_line_length, 41.0);
        assert_eq!(signals.punctuation_count, 5);
        assert_eq!(signals.mode(), ContentTypeMode::Handwritten);

        let signals = measure("abcdefghijklmnopqrstuvwxyzabcdefghi.,;:!?");
        assert_eq!(signals.avg_line_length, 41.0);
        assert_eq!(signals.punctuation_count, 6);
        assert_eq!(signals.mode(), ContentTypeMode::Typed);

        // Six marks, but exactly forty characters
        let signals = measure("abcdefghijklmnopqrstuvwxyzabcd.,;:!?1234");
        assert_eq!(signals.avg_line_length, 40.0);
        assert_eq!(signals.mode(), ContentTypeMode::Handwritten);
    }

    #[test]
    fn test_blank_lines_do_not_dilute_average() {
        let line = "a long typed sentence, with commas, and more: words here.";
        let spaced = format!("{line}\n\n   \n{line}\n");
        let signals = measure(&spaced);
        assert_eq!(signals.non_empty_lines, 2);
        assert_eq!(signals.avg_line_length, line.chars().count() as f64);
    }

    #[test]
    fn test_line_length_is_untrimmed() {
        let signals = measure("  ab  ");
        assert_eq!(signals.non_empty_lines, 1);
        assert_eq!(signals.avg_line_length, 6.0);
    }

    #[test]
    fn test_carriage_return_counts_toward_length() {
        let signals = measure("ab\r\ncd\r\n");
        assert_eq!(signals.non_empty_lines, 2);
        assert_eq!(signals.avg_line_length, 3.0);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let signals = measure("café");
        assert_eq!(signals.avg_line_length, 4.0);
    }

    #[test]
    fn test_only_listed_punctuation_counts() {
        let signals = measure("- ( ) [ ] { } ' \" / @ #");
        assert_eq!(signals.punctuation_count, 0);
        let signals = measure(". , ; : ! ?");
        assert_eq!(signals.punctuation_count, 6);
    }

    #[test]
    fn test_well_formed_paragraph_sits_on_punctuation_boundary() {
        // Five marks: one short of the typed threshold
        let text = "This is a well-formed paragraph, with several commas, periods, and colons: written clearly.";
        let signals = measure(text);
        assert_eq!(signals.punctuation_count, 5);
        assert!(signals.avg_line_length > MIN_AVG_LINE_LENGTH);
        assert_eq!(classify(text), ContentTypeMode::Handwritten);

        let with_sixth = text.replace("clearly.", "clearly; truly.");
        assert_eq!(classify(&with_sixth), ContentTypeMode::Typed);
    }
}

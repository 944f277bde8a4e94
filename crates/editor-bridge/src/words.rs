//! Identifier lookup under a caret offset.
//!
//! Hosts use this before issuing an occurrence or hover request: if the caret is not on an
//! identifier-like word there is nothing to ask the service about.

use unicode_segmentation::UnicodeSegmentation;

fn is_identifier_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch == '_' || ch.is_alphanumeric())
}

/// Find the identifier-like word containing the character offset `offset`.
///
/// Returns the word's character span `(start, end)` (end-exclusive). Adjacent identifier
/// segments merge into one word, so ideograph sequences (which segment per character) behave
/// like ASCII identifiers. A caret sitting directly after a word still counts as being on it,
/// matching how editors treat a caret at a word's right edge. Offsets anywhere else on
/// whitespace or punctuation, and offsets past the end of `text`, return `None`.
pub fn word_range_at(text: &str, offset: usize) -> Option<(usize, usize)> {
    if offset > text.chars().count() {
        return None;
    }

    let mut run_start: Option<usize> = None;
    let mut char_start = 0;
    for (_, word) in text.split_word_bound_indices() {
        let char_end = char_start + word.chars().count();
        if is_identifier_word(word) {
            run_start.get_or_insert(char_start);
        } else {
            if let Some(start) = run_start.take()
                && start <= offset
                && offset <= char_start
            {
                return Some((start, char_start));
            }
            if char_start > offset {
                return None;
            }
        }
        char_start = char_end;
    }

    if let Some(start) = run_start
        && start <= offset
        && offset <= char_start
    {
        return Some((start, char_start));
    }

    None
}

/// The identifier-like word containing the character offset, if any.
pub fn word_at(text: &str, offset: usize) -> Option<&str> {
    let (start, end) = word_range_at(text, offset)?;

    let byte_start = text.char_indices().nth(start).map(|(b, _)| b)?;
    let byte_end = match text.char_indices().nth(end) {
        Some((b, _)) => b,
        None => text.len(),
    };

    text.get(byte_start..byte_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_in_middle() {
        let text = "let count = 0;";
        assert_eq!(word_range_at(text, 5), Some((4, 9)));
        assert_eq!(word_at(text, 5), Some("count"));
    }

    #[test]
    fn test_caret_at_word_edges() {
        let text = "foo bar";
        // Left edge and right edge both count as on the word.
        assert_eq!(word_range_at(text, 0), Some((0, 3)));
        assert_eq!(word_range_at(text, 3), Some((0, 3)));
        assert_eq!(word_range_at(text, 4), Some((4, 7)));
        assert_eq!(word_range_at(text, 7), Some((4, 7)));
    }

    #[test]
    fn test_underscore_is_part_of_word() {
        let text = "max_undo = 1";
        assert_eq!(word_at(text, 4), Some("max_undo"));
    }

    #[test]
    fn test_non_word_offsets() {
        let text = "a + b";
        // Directly after "a" is still its right edge; one step further is not.
        assert_eq!(word_range_at(text, 1), Some((0, 1)));
        assert_eq!(word_range_at(text, 2), None);
        assert_eq!(word_at(text, 2), None);
        assert_eq!(word_range_at(text, 3), None);
    }

    #[test]
    fn test_offset_past_end() {
        assert_eq!(word_range_at("abc", 4), None);
    }

    #[test]
    fn test_multibyte_words() {
        let text = "名前 = value";
        assert_eq!(word_range_at(text, 1), Some((0, 2)));
        assert_eq!(word_at(text, 1), Some("名前"));
        assert_eq!(word_at(text, 6), Some("value"));
    }

    #[test]
    fn test_ideographs_merge_into_one_word() {
        // Ideographs segment per character; adjacent segments still read as one word.
        let text = "漢字テスト";
        assert_eq!(word_range_at(text, 2), Some((0, 5)));
        assert_eq!(word_at(text, 0), Some("漢字テスト"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(word_range_at("", 0), None);
    }
}

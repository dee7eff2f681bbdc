//! Word/separator tokenization.
//!
//! Splits text into maximal runs of characters that agree on separator
//! membership. A run is either entirely separator characters or entirely
//! word characters; the partition has no gaps and no overlaps.

/// Characters that delimit words: whitespace plus a fixed punctuation set.
pub const SEPARATORS: &str = " \t\n\r,-.!?[]';:/()`*\"";

/// Returns `true` if `ch` is a word delimiter.
///
/// Anything outside the fixed set, including all non-ASCII characters,
/// counts as a word character.
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}

/// Return the maximal run starting at byte offset `position` that is
/// homogeneous with respect to separator membership.
///
/// The run is either entirely separator characters or entirely word
/// characters, ending at end-of-string or at the first character whose
/// membership differs from the first character's. Calling repeatedly and
/// advancing `position` by `next_token(..).len()` partitions `text` exactly.
///
/// # Panics
///
/// Panics if `position >= text.len()` or `position` is not a char boundary.
pub fn next_token(text: &str, position: usize) -> &str {
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let (_, first) = chars
        .next()
        .expect("position must be strictly inside the text");
    let in_separators = is_separator(first);

    for (offset, ch) in chars {
        if is_separator(ch) != in_separators {
            return &rest[..offset];
        }
    }
    rest
}

/// Iterate over the full word/separator partition of `text`.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, position: 0 }
}

/// Iterator over the maximal homogeneous runs of a text.
///
/// Yields words and separator runs alike, in order; concatenating every
/// item reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = next_token(self.text, self.position);
        self.position += token.len();
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_run_stops_at_separator() {
        assert_eq!(next_token("hello, world", 0), "hello");
    }

    #[test]
    fn separator_run_stops_at_word() {
        assert_eq!(next_token("hello, world", 5), ", ");
    }

    #[test]
    fn run_extends_to_end_of_text() {
        assert_eq!(next_token("hello", 0), "hello");
        assert_eq!(next_token("...", 0), "...");
    }

    #[test]
    fn hyphen_is_a_separator() {
        let parts: Vec<&str> = tokens("well-known").collect();
        assert_eq!(parts, vec!["well", "-", "known"]);
    }

    #[test]
    fn partition_has_no_gaps_or_overlaps() {
        let text = "The cat sat on the mat. The cat ran.\r\n\t(again)";
        let rebuilt: String = tokens(text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn tokens_never_mix_membership() {
        for token in tokens("one, two; three -- four!") {
            let first = is_separator(token.chars().next().unwrap());
            assert!(token.chars().all(|c| is_separator(c) == first));
        }
    }

    #[test]
    fn non_ascii_is_word_material() {
        let parts: Vec<&str> = tokens("café crème").collect();
        assert_eq!(parts, vec!["café", " ", "crème"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(tokens("").count(), 0);
    }
}

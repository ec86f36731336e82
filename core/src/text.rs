//! Small text helpers shared across the extraction rules.

/// Whole-word containment check, equivalent to a `\bword\b` regex but without
/// compiling a pattern per keyword. Word characters are ASCII alphanumerics
/// and underscore; everything else is a boundary.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(word) {
        let start = search_from + rel;
        let end = start + word.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let after_ok = text[end..].chars().next().is_none_or(|c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        search_from = start + 1;
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Uppercase the first character, lowercase the rest (Python `str.capitalize`).
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-separated word (Python `str.title`, close enough
/// for the single- and double-word names we feed it).
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The last `width` bytes of `text` before `end`, snapped to a char boundary.
pub(crate) fn window_before(text: &str, end: usize, width: usize) -> &str {
    let mut start = end.saturating_sub(width);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..end]
}

/// The first `width` bytes of `text` after `start`, snapped to a char boundary.
pub(crate) fn window_after(text: &str, start: usize, width: usize) -> &str {
    let mut end = (start + width).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}

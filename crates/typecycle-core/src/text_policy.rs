//! UTF-8 aware stepping and bounded copies for displayed text.

use heapless::String;

/// Byte offset just past the character that starts at `len`.
///
/// Returns `word.len()` when `len` is already at (or past) the end.
pub fn next_char_end(word: &str, len: usize) -> usize {
    if len >= word.len() {
        return word.len();
    }

    let start = floor_char_boundary(word, len);
    match word[start..].chars().next() {
        Some(ch) => start + ch.len_utf8(),
        None => word.len(),
    }
}

/// Byte offset where the last character of `text[..len]` starts.
pub fn prev_char_start(text: &str, len: usize) -> usize {
    let end = floor_char_boundary(text, len.min(text.len()));
    match text[..end].chars().next_back() {
        Some(ch) => end - ch.len_utf8(),
        None => 0,
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Replace `out` with as many whole characters of `source` as fit.
///
/// Returns `true` when `source` had to be truncated.
pub fn copy_bounded<const N: usize>(source: &str, out: &mut String<N>) -> bool {
    out.clear();
    for ch in source.chars() {
        if out.push(ch).is_err() {
            return true;
        }
    }
    false
}

/// Window size used by the bigram search fields.
pub const BIGRAM: usize = 2;

/// Split `text` into overlapping substrings of `n` characters.
///
/// Rules:
/// - `n == 0` yields nothing
/// - text shorter than `n` is returned whole, unpadded
/// - otherwise a sliding window over every offset, left to right,
///   duplicates preserved
///
/// Length is measured in `char`s (Unicode scalar values), so multi-byte
/// scripts are never split inside a character.
pub fn ngram(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    // Byte offset of every char start, plus the end of the string.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    if char_count < n {
        return vec![text.to_string()];
    }

    bounds
        .windows(n + 1)
        .map(|w| text[w[0]..w[n]].to_string())
        .collect()
}

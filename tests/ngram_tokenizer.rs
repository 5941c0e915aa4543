use index_derive::tokenize::{ngram, BIGRAM};

#[test]
fn sliding_window_overlaps_left_to_right() {
    assert_eq!(ngram("abcd", 2), vec!["ab", "bc", "cd"]);
    assert_eq!(ngram("abcd", 3), vec!["abc", "bcd"]);
}

#[test]
fn window_equal_to_length_yields_whole_text() {
    assert_eq!(ngram("abc", 3), vec!["abc"]);
}

#[test]
fn short_text_is_returned_unmodified() {
    assert_eq!(ngram("ab", 3), vec!["ab"]);
    assert_eq!(ngram("a", BIGRAM), vec!["a"]);
    // Empty text is still shorter than any window
    assert_eq!(ngram("", BIGRAM), vec![""]);
}

#[test]
fn zero_window_yields_nothing() {
    assert!(ngram("abc", 0).is_empty());
    assert!(ngram("", 0).is_empty());
}

#[test]
fn repeated_substrings_are_not_deduplicated() {
    assert_eq!(ngram("aaa", 2), vec!["aa", "aa"]);
    assert_eq!(ngram("abab", 2), vec!["ab", "ba", "ab"]);
}

#[test]
fn multibyte_text_is_windowed_by_character() {
    assert_eq!(ngram("伏見稲荷", 2), vec!["伏見", "見稲", "稲荷"]);
    assert_eq!(ngram("神社", 3), vec!["神社"]);
    assert_eq!(ngram("aé神", 2), vec!["aé", "é神"]);
}

#[test]
fn output_is_deterministic() {
    let first = ngram("八坂神社", BIGRAM);
    let second = ngram("八坂神社", BIGRAM);
    assert_eq!(first, second);
}

use std::collections::HashMap;

use crate::models::Transcript;

use super::keywords::STOP_WORDS;

/// Total whitespace-separated word count across all segments
pub fn count_total_words(transcript: &Transcript) -> usize {
    transcript.total_words()
}

/// Token counts in first-encountered order.
///
/// The order is what makes frequency ranking stable: ties in
/// [`most_common`] resolve to whichever token appeared first.
pub fn counts_in_order<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in tokens {
        match index.get(token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts
}

/// Top `n` tokens by count, count-descending, stable for ties
pub fn most_common(counts: &[(&str, usize)], n: usize) -> Vec<(String, usize)> {
    let mut ranked = counts.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

/// Most frequent content words: unicode word tokens, stop words and
/// tokens of two characters or fewer dropped
pub fn frequent_words(transcript: &Transcript, top_n: usize) -> Vec<(String, usize)> {
    let text = transcript.combined_text();
    let tokens: Vec<&str> = word_tokens(&text)
        .filter(|t| !STOP_WORDS.contains(t) && t.chars().count() > 2)
        .collect();
    most_common(&counts_in_order(tokens), top_n)
}

/// Split into unicode word tokens (alphanumeric runs, underscore included)
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

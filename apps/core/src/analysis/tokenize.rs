//! Word and sentence tokenization.
//!
//! Regex-driven and fully deterministic: identical input always yields
//! identical output. Punctuation becomes standalone tokens and English
//! contraction suffixes are split from their stems, so `"I'm"` tokenizes
//! as `["I", "'m"]` and `"don't"` as `["do", "n't"]`.

use regex::Regex;
use std::sync::LazyLock;

/// Word-ish chunks (letters/digits with internal apostrophes) or a single
/// non-whitespace punctuation character.
static CHUNKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z0-9]+)*|[^\sA-Za-z0-9]")
        .expect("Invalid regex: token chunk pattern")
});

/// A sentence is a maximal run of non-terminator text plus its trailing
/// terminal punctuation, if any.
static SENTENCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]+[.!?]*").expect("Invalid regex: sentence pattern")
});

/// Contraction suffixes split off as their own tokens. `n't` is handled
/// separately because it consumes the stem's final `n`.
const CONTRACTION_SUFFIXES: &[&str] = &["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Tokenize text into word-level tokens.
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in CHUNKS.find_iter(text) {
        split_chunk(chunk.as_str(), &mut tokens);
    }
    tokens
}

/// Split text into sentences, keeping the terminal punctuation attached.
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCES
        .find_iter(text)
        .filter_map(|m| {
            let sentence = m.as_str().trim();
            (!sentence.is_empty()).then(|| sentence.to_string())
        })
        .collect()
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    if ends_with_ignore_case(chunk, "n't") {
        let cut = chunk.len() - 3;
        out.push(chunk[..cut].to_string());
        out.push(chunk[cut..].to_string());
        return;
    }
    for suffix in CONTRACTION_SUFFIXES {
        if ends_with_ignore_case(chunk, suffix) {
            let cut = chunk.len() - suffix.len();
            out.push(chunk[..cut].to_string());
            out.push(chunk[cut..].to_string());
            return;
        }
    }
    out.push(chunk.to_string());
}

fn ends_with_ignore_case(chunk: &str, suffix: &str) -> bool {
    chunk.len() > suffix.len()
        && chunk.is_char_boundary(chunk.len() - suffix.len())
        && chunk[chunk.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

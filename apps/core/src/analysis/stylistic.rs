//! Stylistic metrics over a single utterance.
//!
//! Every ratio-style metric guards its own zero-denominator case and returns
//! 0 instead of propagating a division error, so no profile field is ever NaN.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::tokenize::{sentences, word_tokens};

/// ASCII punctuation characters counted by the punctuation-density metric.
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Tallies of the five tracked dependency-relation labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationCounts {
    /// Nominal subjects.
    pub nsubj: usize,
    /// Direct objects.
    pub obj: usize,
    /// Indirect objects.
    pub iobj: usize,
    /// Nominal modifiers.
    pub nmod: usize,
    /// Adjectival modifiers.
    pub amod: usize,
}

/// Per-utterance stylistic aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylisticProfile {
    /// Unique tokens / total tokens, in [0, 1].
    pub type_token_ratio: f64,
    /// Average word tokens per sentence, >= 0.
    pub tokens_per_sentence: f64,
    /// Dependency-relation tallies for the utterance.
    pub relations: RelationCounts,
    /// Average whitespace-delimited words per clause-like segment, >= 0.
    pub words_per_segment: f64,
    /// Punctuation characters / total characters, in [0, 1].
    pub punctuation_density: f64,
}

/// Stylistic feature extractor.
pub struct StylisticAnalyzer {
    punctuation: HashSet<char>,
}

impl Default for StylisticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StylisticAnalyzer {
    /// Create a new stylistic analyzer.
    pub fn new() -> Self {
        Self {
            punctuation: ASCII_PUNCTUATION.chars().collect(),
        }
    }

    /// Type-token ratio: unique tokens over total tokens. 0 for no tokens.
    pub fn type_token_ratio(&self, text: &str) -> f64 {
        let tokens = word_tokens(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let unique: HashSet<&String> = tokens.iter().collect();
        unique.len() as f64 / tokens.len() as f64
    }

    /// Average word tokens per sentence. 0 for no sentences.
    pub fn tokens_per_sentence(&self, text: &str) -> f64 {
        let sentences = sentences(text);
        if sentences.is_empty() {
            return 0.0;
        }
        let total: usize = sentences
            .iter()
            .map(|sentence| word_tokens(sentence).len())
            .sum();
        total as f64 / sentences.len() as f64
    }

    /// Custom feature 1: average whitespace-delimited word count across
    /// clause-like segments split on `.`, `!`, `?`. 0 for no segments.
    pub fn words_per_segment(&self, text: &str) -> f64 {
        let word_counts: Vec<usize> = text
            .split(['.', '!', '?'])
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| segment.split_whitespace().count())
            .collect();
        if word_counts.is_empty() {
            return 0.0;
        }
        word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
    }

    /// Custom feature 2: punctuation characters over total characters.
    /// 0 for empty text.
    pub fn punctuation_density(&self, text: &str) -> f64 {
        let total = text.chars().count();
        if total == 0 {
            return 0.0;
        }
        let punctuation = text
            .chars()
            .filter(|c| self.punctuation.contains(c))
            .count();
        punctuation as f64 / total as f64
    }

    /// Assemble the full stylistic profile from the four local metrics plus
    /// externally supplied relation counts.
    pub fn profile(&self, text: &str, relations: RelationCounts) -> StylisticProfile {
        StylisticProfile {
            type_token_ratio: self.type_token_ratio(text),
            tokens_per_sentence: self.tokens_per_sentence(text),
            relations,
            words_per_segment: self.words_per_segment(text),
            punctuation_density: self.punctuation_density(text),
        }
    }
}

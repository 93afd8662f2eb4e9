//! # Analysis Module
//!
//! Fast, deterministic text analysis for SentiBot.
//! Turns raw user utterances into the features the dialogue engine needs.
//!
//! ## Components
//! - `tokenize`: word and sentence tokenization
//! - `stylistic`: lexical-diversity and stylistic metrics
//! - `dependency`: remote dependency parsing + relation tallies

pub mod dependency;
pub mod stylistic;
pub mod tokenize;

// Re-export main types for convenience
pub use dependency::{relation_counts, CoreNlpClient, DepToken, DependencyParse};
pub use stylistic::{RelationCounts, StylisticAnalyzer, StylisticProfile};
pub use tokenize::{sentences, word_tokens};

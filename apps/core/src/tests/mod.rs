//! Test Module
//!
//! Cross-module test suite for SentiBot.
//!
//! ## Test Categories
//! - `analysis_tests`: featurize-then-classify pipeline properties
//! - `dialogue_tests`: scripted end-to-end dialogue sessions
//! - `transcript_tests`: transcript logging and splitting round trips

pub mod dialogue_tests;
pub mod transcript_tests;

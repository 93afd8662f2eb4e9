//! SentiBot core.
//!
//! Feature extraction, sentiment classification, and the finite-state
//! dialogue engine behind the `sentibot` CLI. The binary wires these
//! together: load dataset + embeddings, train one classifier, run the
//! dialogue loop, close the transcript.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod dialogue;
pub mod embedding;
pub mod error;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use error::{AppError, Result};

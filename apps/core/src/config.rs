//! Runtime configuration.
//!
//! All settings come from environment variables (loaded from a `.env` file
//! when one is present), with defaults suited to a local setup. No
//! command-line flags are part of the contract.

use std::env;
use std::path::PathBuf;

const DEFAULT_DATASET: &str = "dataset.csv";
const DEFAULT_EMBEDDINGS: &str = "w2v.txt";
const DEFAULT_PARSER_URL: &str = "http://localhost:9000";
const DEFAULT_TRANSCRIPT_DIR: &str = ".";

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file with `review`/`label` columns used to train the classifier.
    pub dataset_path: PathBuf,
    /// Word2vec-style text file, one `token v1 .. v300` row per line.
    pub embedding_path: PathBuf,
    /// Base URL of the CoreNLP-compatible dependency-parse server.
    pub parser_url: String,
    /// Directory that receives the timestamped transcript file.
    pub transcript_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            dataset_path: env::var("SENTIBOT_DATASET")
                .unwrap_or_else(|_| DEFAULT_DATASET.to_string())
                .into(),
            embedding_path: env::var("SENTIBOT_EMBEDDINGS")
                .unwrap_or_else(|_| DEFAULT_EMBEDDINGS.to_string())
                .into(),
            parser_url: env::var("SENTIBOT_PARSER_URL")
                .unwrap_or_else(|_| DEFAULT_PARSER_URL.to_string()),
            transcript_dir: env::var("SENTIBOT_TRANSCRIPT_DIR")
                .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_DIR.to_string())
                .into(),
        }
    }
}

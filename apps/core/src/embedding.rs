//! Pretrained word-embedding table.
//!
//! A read-only token -> vector mapping loaded once at startup and shared by
//! every feature computation for the rest of the process. Lookups for
//! unknown tokens fall back to the zero vector; that is documented behavior,
//! not an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::analysis::tokenize::word_tokens;
use crate::error::{AppError, Result};

/// Dimensionality of every vector in the table.
pub const EMBEDDING_DIM: usize = 300;

/// Fixed-dimensionality embedding lookup table.
pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
    zero: Vec<f32>,
}

impl EmbeddingTable {
    /// Load a word2vec-style text file: one `token v1 .. v300` row per line,
    /// with an optional `count dim` header row.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| AppError::Load(format!("cannot open embeddings {}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);

        let mut vectors = HashMap::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue; // blank line
            };
            let values: Vec<&str> = fields.collect();

            // Word2vec text exports lead with a "<count> <dim>" header row.
            if line_no == 0 && values.len() == 1 && token.parse::<usize>().is_ok() {
                continue;
            }

            if values.len() != EMBEDDING_DIM {
                return Err(AppError::Load(format!(
                    "{} line {}: expected {} components, found {}",
                    path.display(),
                    line_no + 1,
                    EMBEDDING_DIM,
                    values.len()
                )));
            }

            let mut vector = Vec::with_capacity(EMBEDDING_DIM);
            for value in values {
                let component: f32 = value.parse().map_err(|_| {
                    AppError::Load(format!(
                        "{} line {}: malformed float {:?}",
                        path.display(),
                        line_no + 1,
                        value
                    ))
                })?;
                vector.push(component);
            }
            vectors.insert(token.to_string(), vector);
        }

        info!(tokens = vectors.len(), "loaded embedding table");
        Ok(Self {
            vectors,
            zero: vec![0.0; EMBEDDING_DIM],
        })
    }

    /// Build a table from in-memory pairs. Every vector must have exactly
    /// [`EMBEDDING_DIM`] components.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut vectors = HashMap::new();
        for (token, vector) in pairs {
            if vector.len() != EMBEDDING_DIM {
                return Err(AppError::Load(format!(
                    "vector for {:?} has {} components, expected {}",
                    token,
                    vector.len(),
                    EMBEDDING_DIM
                )));
            }
            vectors.insert(token, vector);
        }
        Ok(Self {
            vectors,
            zero: vec![0.0; EMBEDDING_DIM],
        })
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the table holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Per-token lookup. Unknown tokens resolve to the zero vector.
    pub fn vector(&self, token: &str) -> &[f32] {
        self.vectors.get(token).map_or(&self.zero, Vec::as_slice)
    }

    /// Averaged embedding for a whole text: tokenize, look up each token,
    /// arithmetic-mean across tokens. Texts with no tokens yield the zero
    /// vector, so the result always has exactly [`EMBEDDING_DIM`] components.
    pub fn average(&self, text: &str) -> Vec<f32> {
        let tokens = word_tokens(text);
        if tokens.is_empty() {
            return self.zero.clone();
        }

        let mut sum = vec![0.0f32; EMBEDDING_DIM];
        for token in &tokens {
            for (acc, component) in sum.iter_mut().zip(self.vector(token)) {
                *acc += component;
            }
        }
        let count = tokens.len() as f32;
        for acc in &mut sum {
            *acc /= count;
        }
        sum
    }
}

//! Remote dependency parsing.
//!
//! The parser runs as a separate CoreNLP-compatible server; this module is
//! the narrow client seam so tests can mock it and the dialogue engine never
//! touches the wire format. An unreachable server surfaces as
//! [`AppError::ParseUnavailable`] rather than being silently treated as a
//! parse with zero relations.

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::stylistic::RelationCounts;
use crate::error::{AppError, Result};

const PARSE_TIMEOUT_SECS: u64 = 10;

/// One token of a dependency parse: surface form, POS tag, head index, and
/// relation label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepToken {
    pub word: String,
    pub pos: String,
    /// 1-based index of the head word; 0 for the root.
    pub head: usize,
    pub relation: String,
}

/// Text in, relation-annotated tokens out.
pub trait DependencyParse {
    fn parse(&self, text: &str) -> Result<Vec<DepToken>>;
}

// CoreNLP JSON response subset. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    sentences: Vec<ParsedSentence>,
}

#[derive(Debug, Deserialize)]
struct ParsedSentence {
    #[serde(rename = "basicDependencies", default)]
    dependencies: Vec<Dependency>,
    #[serde(default)]
    tokens: Vec<Token>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    dep: String,
    governor: usize,
    dependent: usize,
    #[serde(rename = "dependentGloss")]
    dependent_gloss: String,
}

#[derive(Debug, Deserialize)]
struct Token {
    index: usize,
    #[serde(default)]
    pos: String,
}

/// Blocking HTTP client for a CoreNLP-style dependency-parse server.
pub struct CoreNlpClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CoreNlpClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(PARSE_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DependencyParse for CoreNlpClient {
    fn parse(&self, text: &str) -> Result<Vec<DepToken>> {
        let properties = serde_json::json!({
            "annotators": "tokenize,ssplit,pos,depparse",
            "outputFormat": "json",
        });

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("properties", properties.to_string())])
            .body(text.to_string())
            .send()?;

        if !response.status().is_success() {
            return Err(AppError::ParseUnavailable(format!(
                "parse server returned {}",
                response.status()
            )));
        }

        let parsed: ParseResponse = response.json()?;

        let mut out = Vec::new();
        for sentence in parsed.sentences {
            let pos_by_index: HashMap<usize, String> = sentence
                .tokens
                .into_iter()
                .map(|token| (token.index, token.pos))
                .collect();
            for dep in sentence.dependencies {
                out.push(DepToken {
                    pos: pos_by_index.get(&dep.dependent).cloned().unwrap_or_default(),
                    word: dep.dependent_gloss,
                    head: dep.governor,
                    relation: dep.dep,
                });
            }
        }

        debug!(tokens = out.len(), "dependency parse complete");
        Ok(out)
    }
}

/// Tally exactly the five tracked relation labels; every other label is
/// ignored. Stateless across calls.
pub fn relation_counts(tokens: &[DepToken]) -> RelationCounts {
    let mut counts = RelationCounts::default();
    for token in tokens {
        match token.relation.as_str() {
            "nsubj" => counts.nsubj += 1,
            "obj" => counts.obj += 1,
            "iobj" => counts.iobj += 1,
            "nmod" => counts.nmod += 1,
            "amod" => counts.amod += 1,
            _ => {}
        }
    }
    counts
}

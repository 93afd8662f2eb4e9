//! Dialogue Tests
//!
//! Scripted end-to-end sessions through the state machine with a mocked
//! dependency parser, exercising every transition the engine can take.

use std::cell::Cell;
use std::rc::Rc;

use crate::analysis::dependency::{DepToken, DependencyParse};
use crate::classifier::LogisticRegression;
use crate::dialogue::turn_io::ScriptedIo;
use crate::dialogue::DialogueEngine;
use crate::embedding::{EmbeddingTable, EMBEDDING_DIM};
use crate::error::{AppError, Result};
use crate::transcript::TranscriptLogger;

/// Canned parse: 5 nsubj, 2 obj, 1 nmod plus ignored labels.
struct MockParser;

impl DependencyParse for MockParser {
    fn parse(&self, _text: &str) -> Result<Vec<DepToken>> {
        let relations = [
            "nsubj", "nsubj", "nsubj", "nsubj", "nsubj", "obj", "obj", "nmod", "det", "ROOT",
        ];
        Ok(relations
            .iter()
            .map(|relation| DepToken {
                word: "w".to_string(),
                pos: "NN".to_string(),
                head: 1,
                relation: relation.to_string(),
            })
            .collect())
    }
}

/// Parser that always fails, counting how often it was asked.
struct DownParser {
    calls: Rc<Cell<usize>>,
}

impl DependencyParse for DownParser {
    fn parse(&self, _text: &str) -> Result<Vec<DepToken>> {
        self.calls.set(self.calls.get() + 1);
        Err(AppError::ParseUnavailable("connection refused".to_string()))
    }
}

fn unit(index: usize, value: f32) -> Vec<f32> {
    let mut v = vec![0.0; EMBEDDING_DIM];
    v[index] = value;
    v
}

fn table_and_model() -> (EmbeddingTable, LogisticRegression) {
    let table = EmbeddingTable::from_pairs([
        ("excited".to_string(), unit(0, 1.0)),
        ("great".to_string(), unit(0, 0.8)),
        ("!".to_string(), unit(0, 0.5)),
        ("sad".to_string(), unit(0, -1.0)),
        ("awful".to_string(), unit(0, -0.8)),
        (".".to_string(), unit(0, -0.2)),
    ])
    .unwrap();
    let documents = ["excited !", "great !", "so excited", "sad .", "awful .", "so sad"];
    let labels = [1u8, 1, 1, 0, 0, 0];
    let vectors: Vec<Vec<f32>> = documents.iter().map(|doc| table.average(doc)).collect();
    let model = LogisticRegression::train(&vectors, &labels).unwrap();
    (table, model)
}

fn transcript_logger(dir: &tempfile::TempDir) -> TranscriptLogger {
    TranscriptLogger::create_at(&dir.path().join("session.txt")).unwrap()
}

#[test]
fn canonical_session_reaches_quit_through_the_positive_path() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new([
        "Natalie Parde",
        "I'm excited that it's a new semester!",
        "I'm writing a quick note. It has two sentences!",
        "I think I'd like to quit.",
    ]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    assert_eq!(engine.session().user_name, "Natalie Parde");
    assert_eq!(engine.session().sentiment_runs, 1);
    engine.finish().unwrap();

    let output = io.output();
    assert!(output.contains("Welcome to SentiBot!"));
    assert!(output.contains("Thanks Natalie Parde!  What do you want to talk about today?"));
    assert!(output.contains("It sounds like you're in a positive mood!"));
    assert!(output.contains("# Nominal Subjects: 5"));
    assert!(output.contains("# Direct Objects: 2"));
    assert!(output.contains("# Indirect Objects: 0"));
    assert!(output.contains("# Nominal Modifiers: 1"));
    assert!(output.contains("# Adjectival Modifiers: 0"));
    assert!(output.contains("Custom Feature #1:"));
    assert!(output.contains("Custom Feature #2:"));
    assert!(output.contains("Chatbot session has ended. Goodbye!"));
}

#[test]
fn negative_reply_takes_the_down_path() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new([
        "Bob Jones",
        "Everything is sad and awful today.",
        "whatever comes to mind",
        "quit",
    ]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    engine.finish().unwrap();

    assert!(io
        .output()
        .contains("Hmm, it seems like you're feeling a bit down."));
}

#[test]
fn redo_sentiment_loops_back_and_skips_stylistic() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new([
        "Ada Lovelace",
        "excited !",
        "some stylistic text here",
        // Contains "sentiment" only: precedence must pick SentimentAnalysis.
        "redo sentiment",
        "sad .",
        "quit",
    ]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    // Two sentiment rounds, and the second one went straight to
    // CheckNextAction instead of a second stylistic report.
    assert_eq!(engine.session().sentiment_runs, 2);
    engine.finish().unwrap();

    let output = io.output();
    assert!(output.contains("It sounds like you're in a positive mood!"));
    assert!(output.contains("Hmm, it seems like you're feeling a bit down."));
    assert_eq!(output.matches("Type-Token Ratio:").count(), 1);
}

#[test]
fn redo_stylistic_repeats_the_report() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new([
        "Grace Hopper",
        "great !",
        "first stylistic text",
        "styl again please",
        "second stylistic text",
        "quit",
    ]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    engine.finish().unwrap();

    assert_eq!(io.output().matches("Type-Token Ratio:").count(), 2);
}

#[test]
fn unrecognized_next_action_reprompts_until_a_keyword_arrives() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new([
        "Alan Turing",
        "great !",
        "style sample",
        "hmm, not sure",
        "still thinking",
        "ok quit",
    ]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    engine.finish().unwrap();

    assert_eq!(
        io.output().matches("Sorry, I didn't understand that.").count(),
        2
    );
}

#[test]
fn unmatched_name_leaves_user_name_empty() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new(["hello there", "great !", "style sample", "quit"]);

    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, MockParser, transcript_logger(&dir));
    engine.run().unwrap();
    assert_eq!(engine.session().user_name, "");
    engine.finish().unwrap();

    assert!(io.output().contains("Thanks !  What do you want to talk about today?"));
}

#[test]
fn parser_outage_retries_once_then_marks_counts_unavailable() {
    let (table, model) = table_and_model();
    let dir = tempfile::tempdir().unwrap();
    let mut io = ScriptedIo::new(["Ada Lovelace", "great !", "style sample", "quit"]);

    let calls = Rc::new(Cell::new(0));
    let parser = DownParser { calls: Rc::clone(&calls) };
    let mut engine =
        DialogueEngine::new(&mut io, &table, &model, parser, transcript_logger(&dir));
    engine.run().unwrap();
    engine.finish().unwrap();

    // One initial attempt plus exactly one retry.
    assert_eq!(calls.get(), 2);

    let output = io.output();
    assert!(output.contains("relation counts are unavailable"));
    assert!(!output.contains("# Nominal Subjects:"));
    // Local metrics still reported.
    assert!(output.contains("Type-Token Ratio:"));
    assert!(output.contains("Custom Feature #2:"));
    assert!(output.contains("Chatbot session has ended. Goodbye!"));
}

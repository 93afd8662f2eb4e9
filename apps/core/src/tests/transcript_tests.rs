//! Transcript Tests
//!
//! Round trips from a live scripted session through the transcript file and
//! into the three split views.

use std::fs;

use crate::analysis::dependency::{DepToken, DependencyParse};
use crate::classifier::LogisticRegression;
use crate::dialogue::turn_io::ScriptedIo;
use crate::dialogue::DialogueEngine;
use crate::embedding::{EmbeddingTable, EMBEDDING_DIM};
use crate::error::Result;
use crate::transcript::{split_transcript, Speaker, TranscriptLogger};

struct MockParser;

impl DependencyParse for MockParser {
    fn parse(&self, _text: &str) -> Result<Vec<DepToken>> {
        Ok(vec![DepToken {
            word: "w".to_string(),
            pos: "NN".to_string(),
            head: 0,
            relation: "ROOT".to_string(),
        }])
    }
}

fn unit(value: f32) -> Vec<f32> {
    let mut v = vec![0.0; EMBEDDING_DIM];
    v[0] = value;
    v
}

#[test]
fn session_transcript_splits_into_speaker_views() {
    let table = EmbeddingTable::from_pairs([
        ("excited".to_string(), unit(1.0)),
        ("sad".to_string(), unit(-1.0)),
    ])
    .unwrap();
    let vectors = vec![table.average("excited"), table.average("sad")];
    let model = LogisticRegression::train(&vectors, &[1, 0]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.txt");
    let mut io = ScriptedIo::new([
        "Natalie Parde",
        "excited",
        "A short note.",
        "I think I'd like to quit.",
    ]);

    let log = TranscriptLogger::create_at(&path).unwrap();
    let mut engine = DialogueEngine::new(&mut io, &table, &model, MockParser, log);
    engine.run().unwrap();
    let transcript = engine.finish().unwrap();

    let files = split_transcript(&transcript).unwrap();
    let all = fs::read_to_string(&files.all).unwrap();
    let chatbot = fs::read_to_string(&files.chatbot).unwrap();
    let user = fs::read_to_string(&files.user).unwrap();

    // User view: exactly the four replies, in order, without tags.
    assert_eq!(
        user.lines().collect::<Vec<_>>(),
        vec![
            "Natalie Parde",
            "excited",
            "A short note.",
            "I think I'd like to quit.",
        ]
    );

    // Chatbot view holds the prompts and the reports, tag-free.
    assert!(chatbot.contains("Welcome to SentiBot!"));
    assert!(chatbot.contains("What is your name?"));
    assert!(chatbot.contains("It sounds like you're in a positive mood!"));
    assert!(chatbot.contains("Type-Token Ratio:"));
    assert!(chatbot.contains("Chatbot session has ended. Goodbye!"));
    assert!(!chatbot.contains("CHATBOT:"));
    // The bare name reply belongs to the user view, not the chatbot view
    // (the greeting "Thanks Natalie Parde!" may still mention it).
    assert!(chatbot.lines().all(|line| line != "Natalie Parde"));

    // The all view is the union, preserving turn order.
    assert!(all.contains("What is your name?"));
    assert!(all.contains("Natalie Parde"));
    let name_prompt = all.find("What is your name?").unwrap();
    let name_reply = all.find("Natalie Parde").unwrap();
    assert!(name_prompt < name_reply);
}

#[test]
fn multiline_report_lines_stay_with_the_chatbot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    let mut logger = TranscriptLogger::create_at(&path).unwrap();
    logger
        .record(
            Speaker::Chatbot,
            "# Nominal Subjects: 5\n# Direct Objects: 2",
        )
        .unwrap();
    logger.record(Speaker::User, "quit").unwrap();
    let path = logger.finish().unwrap();

    let files = split_transcript(&path).unwrap();
    let chatbot = fs::read_to_string(&files.chatbot).unwrap();
    assert!(chatbot.contains("# Nominal Subjects: 5"));
    assert!(chatbot.contains("# Direct Objects: 2"));
    let user = fs::read_to_string(&files.user).unwrap();
    assert_eq!(user, "quit\n");
}

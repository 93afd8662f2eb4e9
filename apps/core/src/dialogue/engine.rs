//! The finite-state dialogue engine.
//!
//! Sequences welcome -> collect name -> sentiment analysis -> stylistic
//! analysis -> check next action -> quit, blocking on one user reply per
//! prompt. The embedding table and trained classifier are read-only shared
//! state; the only mutable session data is the current state, the user's
//! name, and the sentiment run counter. Every prompt and reply is recorded
//! to the transcript in turn order.

use tracing::{debug, error, info, warn};

use crate::analysis::dependency::{relation_counts, DependencyParse};
use crate::analysis::stylistic::{RelationCounts, StylisticAnalyzer};
use crate::classifier::LogisticRegression;
use crate::embedding::EmbeddingTable;
use crate::error::Result;
use crate::transcript::{Speaker, TranscriptLogger};

use super::intent::{extract_name, match_next_action};
use super::state::{transition, DialogueEvent, DialogueState};
use super::turn_io::TurnIo;

const WELCOME_MESSAGE: &str = "Welcome to SentiBot!";
const NAME_PROMPT: &str = "What is your name?";
const STYLISTIC_PROMPT: &str =
    "I'd also like to do a quick stylistic analysis. What's on your mind today?";
const NEXT_ACTION_PROMPT: &str = "What would you like to do next?  You can quit, redo the \
     sentiment analysis, or redo the stylistic analysis.";
const NEXT_ACTION_REPROMPT: &str = "Sorry, I didn't understand that.  Would you like to quit, \
     redo the sentiment analysis, or redo the stylistic analysis?";
const RELATIONS_UNAVAILABLE: &str = "I couldn't reach the dependency parse service, so the \
     relation counts are unavailable for this one.";
const FAREWELL_MESSAGE: &str = "Chatbot session has ended. Goodbye!";

/// Mutable per-conversation data.
#[derive(Debug, Default)]
pub struct Session {
    /// Extracted display name; empty until CollectName runs.
    pub user_name: String,
    /// Number of completed sentiment-analysis executions.
    pub sentiment_runs: u32,
}

/// The dialogue state machine.
///
/// Generic over the turn I/O and the dependency parser so both can be
/// scripted in tests without a terminal or a live parse server.
pub struct DialogueEngine<'a, IO: TurnIo, P: DependencyParse> {
    io: &'a mut IO,
    table: &'a EmbeddingTable,
    model: &'a LogisticRegression,
    parser: P,
    analyzer: StylisticAnalyzer,
    log: TranscriptLogger,
    session: Session,
}

impl<'a, IO: TurnIo, P: DependencyParse> DialogueEngine<'a, IO, P> {
    pub fn new(
        io: &'a mut IO,
        table: &'a EmbeddingTable,
        model: &'a LogisticRegression,
        parser: P,
        log: TranscriptLogger,
    ) -> Self {
        Self {
            io,
            table,
            model,
            parser,
            analyzer: StylisticAnalyzer::new(),
            log,
            session: Session::default(),
        }
    }

    /// Current session data (name, run counter).
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drive the conversation from Welcome to Quit.
    pub fn run(&mut self) -> Result<()> {
        let mut state = DialogueState::Welcome;
        while state != DialogueState::Quit {
            debug!(?state, "entering dialogue state");
            let event = match state {
                DialogueState::Welcome => self.welcome()?,
                DialogueState::CollectName => self.collect_name()?,
                DialogueState::SentimentAnalysis => self.sentiment_analysis()?,
                DialogueState::StylisticAnalysis => self.stylistic_analysis()?,
                DialogueState::CheckNextAction => self.check_next_action()?,
                DialogueState::Quit => break,
            };
            state = transition(state, event);
        }
        self.say(FAREWELL_MESSAGE)?;
        info!(
            sentiment_runs = self.session.sentiment_runs,
            "dialogue session ended"
        );
        Ok(())
    }

    /// Flush and close the transcript, returning its path.
    pub fn finish(self) -> Result<std::path::PathBuf> {
        self.log.finish()
    }

    /// Emit a chatbot line and record it.
    fn say(&mut self, text: &str) -> Result<()> {
        self.io.say(text)?;
        self.log.record(Speaker::Chatbot, text)?;
        Ok(())
    }

    /// Prompt, block for a reply, and record both in turn order.
    fn ask(&mut self, text: &str) -> Result<String> {
        let reply = self.io.prompt(text)?;
        self.log.record(Speaker::Chatbot, text)?;
        self.log.record(Speaker::User, &reply)?;
        Ok(reply)
    }

    fn welcome(&mut self) -> Result<DialogueEvent> {
        self.say(WELCOME_MESSAGE)?;
        Ok(DialogueEvent::Done)
    }

    fn collect_name(&mut self) -> Result<DialogueEvent> {
        let reply = self.ask(NAME_PROMPT)?;
        self.session.user_name = extract_name(&reply);
        debug!(name = %self.session.user_name, "collected user name");
        Ok(DialogueEvent::Done)
    }

    fn sentiment_analysis(&mut self) -> Result<DialogueEvent> {
        let prompt = format!(
            "Thanks {}!  What do you want to talk about today?",
            self.session.user_name
        );
        let reply = self.ask(&prompt)?;

        let embedding = self.table.average(&reply);
        let label = self.model.predict(&embedding);
        let mood = match label {
            0 => "Hmm, it seems like you're feeling a bit down.".to_string(),
            1 => "It sounds like you're in a positive mood!".to_string(),
            other => format!(
                "Hmm, that's weird.  My classifier predicted a value of: {}",
                other
            ),
        };
        self.say(&mood)?;

        self.session.sentiment_runs += 1;
        Ok(DialogueEvent::SentimentDone {
            first_run: self.session.sentiment_runs == 1,
        })
    }

    fn stylistic_analysis(&mut self) -> Result<DialogueEvent> {
        let reply = self.ask(STYLISTIC_PROMPT)?;
        let relations = self.parse_with_retry(&reply);

        self.say("Thanks!  Here's what I discovered about your writing style.")?;
        match relations {
            Ok(counts) => {
                let profile = self.analyzer.profile(&reply, counts);
                debug!(?profile, "stylistic profile computed");
                self.say(&format!("Type-Token Ratio: {}", profile.type_token_ratio))?;
                self.say(&format!(
                    "Average Tokens Per Sentence: {}",
                    profile.tokens_per_sentence
                ))?;
                self.say(&format!(
                    "# Nominal Subjects: {}\n# Direct Objects: {}\n# Indirect Objects: {}\n# Nominal Modifiers: {}\n# Adjectival Modifiers: {}",
                    counts.nsubj, counts.obj, counts.iobj, counts.nmod, counts.amod
                ))?;
                self.say(&format!("Custom Feature #1: {}", profile.words_per_segment))?;
                self.say(&format!(
                    "Custom Feature #2: {}",
                    profile.punctuation_density
                ))?;
            }
            Err(_) => {
                // The local metrics are still reportable; only the relation
                // counts depend on the remote parser.
                self.say(&format!(
                    "Type-Token Ratio: {}",
                    self.analyzer.type_token_ratio(&reply)
                ))?;
                self.say(&format!(
                    "Average Tokens Per Sentence: {}",
                    self.analyzer.tokens_per_sentence(&reply)
                ))?;
                self.say(RELATIONS_UNAVAILABLE)?;
                self.say(&format!(
                    "Custom Feature #1: {}",
                    self.analyzer.words_per_segment(&reply)
                ))?;
                self.say(&format!(
                    "Custom Feature #2: {}",
                    self.analyzer.punctuation_density(&reply)
                ))?;
            }
        }

        Ok(DialogueEvent::Done)
    }

    fn check_next_action(&mut self) -> Result<DialogueEvent> {
        let mut reply = self.ask(NEXT_ACTION_PROMPT)?;
        loop {
            if let Some(action) = match_next_action(&reply) {
                info!(%action, "next action recognized");
                return Ok(DialogueEvent::Next(action));
            }
            reply = self.ask(NEXT_ACTION_REPROMPT)?;
        }
    }

    /// One retry, then surface the outage. Relation counts are never
    /// silently zeroed on parser failure.
    fn parse_with_retry(&mut self, text: &str) -> Result<RelationCounts> {
        match self.parser.parse(text) {
            Ok(tokens) => Ok(relation_counts(&tokens)),
            Err(first) => {
                warn!(error = %first, "dependency parse failed, retrying once");
                match self.parser.parse(text) {
                    Ok(tokens) => Ok(relation_counts(&tokens)),
                    Err(second) => {
                        error!(error = %second, "dependency parse unavailable after retry");
                        Err(second)
                    }
                }
            }
        }
    }
}

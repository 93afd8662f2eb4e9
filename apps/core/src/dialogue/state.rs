//! Dialogue states and the transition function.
//!
//! The state set is a closed enum and every transition is matched
//! exhaustively, so there is no "unknown state" path at all.

use serde::{Deserialize, Serialize};

use super::intent::NextAction;

/// The closed set of dialogue states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Greet the user.
    Welcome,
    /// Ask for and extract the user's name.
    CollectName,
    /// Classify the sentiment of a free-text utterance.
    SentimentAnalysis,
    /// Compute and report the stylistic profile of an utterance.
    StylisticAnalysis,
    /// Ask what to do next until a recognized intent arrives.
    CheckNextAction,
    /// Terminal state.
    Quit,
}

/// Outcome of executing a state's entry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueEvent {
    /// The state finished with no branching outcome.
    Done,
    /// Sentiment analysis finished; the run counter selects the follow-up.
    SentimentDone { first_run: bool },
    /// CheckNextAction recognized one of the three intents.
    Next(NextAction),
}

/// Deterministic transition function.
pub fn transition(state: DialogueState, event: DialogueEvent) -> DialogueState {
    use DialogueState::*;

    match (state, event) {
        (Welcome, _) => CollectName,
        (CollectName, _) => SentimentAnalysis,
        (SentimentAnalysis, DialogueEvent::SentimentDone { first_run: true }) => StylisticAnalysis,
        (SentimentAnalysis, _) => CheckNextAction,
        (StylisticAnalysis, _) => CheckNextAction,
        (CheckNextAction, DialogueEvent::Next(NextAction::Quit)) => Quit,
        (CheckNextAction, DialogueEvent::Next(NextAction::Sentiment)) => SentimentAnalysis,
        (CheckNextAction, DialogueEvent::Next(NextAction::Stylistic)) => StylisticAnalysis,
        (CheckNextAction, _) => CheckNextAction,
        (Quit, _) => Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_always_moves_to_collect_name() {
        assert_eq!(
            transition(DialogueState::Welcome, DialogueEvent::Done),
            DialogueState::CollectName
        );
    }

    #[test]
    fn first_sentiment_run_moves_to_stylistic() {
        assert_eq!(
            transition(
                DialogueState::SentimentAnalysis,
                DialogueEvent::SentimentDone { first_run: true }
            ),
            DialogueState::StylisticAnalysis
        );
    }

    #[test]
    fn later_sentiment_runs_move_to_check_next_action() {
        assert_eq!(
            transition(
                DialogueState::SentimentAnalysis,
                DialogueEvent::SentimentDone { first_run: false }
            ),
            DialogueState::CheckNextAction
        );
    }

    #[test]
    fn stylistic_moves_to_check_next_action() {
        assert_eq!(
            transition(DialogueState::StylisticAnalysis, DialogueEvent::Done),
            DialogueState::CheckNextAction
        );
    }

    #[test]
    fn check_next_action_branches_on_intent() {
        assert_eq!(
            transition(
                DialogueState::CheckNextAction,
                DialogueEvent::Next(NextAction::Quit)
            ),
            DialogueState::Quit
        );
        assert_eq!(
            transition(
                DialogueState::CheckNextAction,
                DialogueEvent::Next(NextAction::Sentiment)
            ),
            DialogueState::SentimentAnalysis
        );
        assert_eq!(
            transition(
                DialogueState::CheckNextAction,
                DialogueEvent::Next(NextAction::Stylistic)
            ),
            DialogueState::StylisticAnalysis
        );
    }

    #[test]
    fn quit_is_terminal() {
        assert_eq!(
            transition(DialogueState::Quit, DialogueEvent::Done),
            DialogueState::Quit
        );
    }
}

use uuid::Uuid;

use crate::data::LoadError;
use crate::models::Question;

/// Player-originated commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Yes,
    No,
    Restart,
    Retry,
}

/// Everything the presenter reacts to, delivered through one channel.
#[derive(Debug)]
pub enum QuizEvent {
    /// Input from the player.
    Player(PlayerAction),
    /// The catalog finished loading.
    DataLoaded,
    /// The catalog could not be loaded.
    DataLoadFailed(LoadError),
    /// Outcome of the question request identified by `ticket`.
    QuestionLoaded {
        ticket: u64,
        result: Result<Question, LoadError>,
    },
    /// The post-answer pause of `round` is over.
    AnswerDelayElapsed { round: Uuid },
}

impl From<PlayerAction> for QuizEvent {
    fn from(action: PlayerAction) -> Self {
        QuizEvent::Player(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_action_becomes_player_event() {
        let event: QuizEvent = PlayerAction::Retry.into();
        assert!(matches!(event, QuizEvent::Player(PlayerAction::Retry)));
    }
}

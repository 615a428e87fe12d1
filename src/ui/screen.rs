//! Terminal implementation of the quiz view.

use crate::session::{AlertModel, PlayerAction, QuizStep, QuizView};

/// What the terminal is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Nothing to show yet.
    Loading,
    /// A question, with feedback once it has been answered.
    Question {
        step: QuizStep,
        feedback: Option<bool>,
        answers_enabled: bool,
    },
    /// Round summary or error, waiting for its button.
    Alert(AlertModel),
}

/// [`QuizView`] that keeps the latest screen for the render loop.
#[derive(Debug)]
pub struct TerminalView {
    screen: Screen,
    busy: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            busy: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether the busy indicator is on.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Consume a yes/no press. Returns false if answering is currently disabled.
    pub fn take_answer_turn(&mut self) -> bool {
        match &mut self.screen {
            Screen::Question {
                answers_enabled, ..
            } if *answers_enabled => {
                *answers_enabled = false;
                true
            }
            _ => false,
        }
    }

    /// Close the alert and hand back its action.
    pub fn dismiss_alert(&mut self) -> Option<PlayerAction> {
        let Screen::Alert(alert) = &self.screen else {
            return None;
        };
        let action = alert.action;
        self.screen = Screen::Loading;
        Some(action)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizView for TerminalView {
    fn show_question(&mut self, step: QuizStep) {
        self.screen = Screen::Question {
            step,
            feedback: None,
            answers_enabled: true,
        };
    }

    fn show_answer_result(&mut self, is_correct: bool) {
        if let Screen::Question { feedback, .. } = &mut self.screen {
            *feedback = Some(is_correct);
        }
    }

    fn show_results(&mut self, result: AlertModel) {
        self.screen = Screen::Alert(result);
    }

    fn show_loading_indicator(&mut self) {
        self.busy = true;
    }

    fn hide_loading_indicator(&mut self) {
        self.busy = false;
    }

    fn show_network_error(&mut self, alert: AlertModel) {
        self.busy = false;
        self.screen = Screen::Alert(alert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> QuizStep {
        QuizStep {
            image: vec![1, 2, 3],
            question: "Is the rating of this movie greater than 8.0?".to_string(),
            question_number: "1/10".to_string(),
        }
    }

    fn alert(action: PlayerAction) -> AlertModel {
        AlertModel {
            title: "Error".to_string(),
            message: "Server error: maintenance".to_string(),
            button_text: "Try again".to_string(),
            action,
        }
    }

    #[test]
    fn test_answers_disabled_after_one_press() {
        let mut view = TerminalView::new();
        assert!(!view.take_answer_turn());

        view.show_question(step());
        assert!(view.take_answer_turn());
        assert!(!view.take_answer_turn());

        view.show_answer_result(true);
        assert!(matches!(
            view.screen(),
            Screen::Question {
                feedback: Some(true),
                answers_enabled: false,
                ..
            }
        ));

        view.show_question(step());
        assert!(view.take_answer_turn());
    }

    #[test]
    fn test_alert_dismissal_returns_action() {
        let mut view = TerminalView::new();
        assert_eq!(view.dismiss_alert(), None);

        view.show_loading_indicator();
        view.show_network_error(alert(PlayerAction::Retry));
        assert!(!view.is_busy());
        assert_eq!(view.dismiss_alert(), Some(PlayerAction::Retry));
        assert_eq!(view.screen(), &Screen::Loading);
    }

    #[test]
    fn test_busy_indicator() {
        let mut view = TerminalView::new();
        view.show_loading_indicator();
        assert!(view.is_busy());
        view.hide_loading_indicator();
        assert!(!view.is_busy());
    }
}

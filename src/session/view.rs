use super::events::PlayerAction;

/// View data for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizStep {
    pub image: Vec<u8>,
    pub question: String,
    /// Progress label such as `"3/10"`.
    pub question_number: String,
}

/// A modal message with a single button.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertModel {
    pub title: String,
    pub message: String,
    pub button_text: String,
    /// Command to run when the button is pressed.
    pub action: PlayerAction,
}

/// Commands the presenter issues to whatever draws the quiz.
pub trait QuizView {
    fn show_question(&mut self, step: QuizStep);
    fn show_answer_result(&mut self, is_correct: bool);
    fn show_results(&mut self, result: AlertModel);
    fn show_loading_indicator(&mut self);
    fn hide_loading_indicator(&mut self);
    fn show_network_error(&mut self, alert: AlertModel);
}

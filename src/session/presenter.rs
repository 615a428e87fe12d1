//! The quiz round controller.

use chrono::Local;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::data::LoadError;
use crate::models::Question;
use crate::questions::QuestionFactory;
use crate::statistics::{StatisticService, Statistics};

use super::events::{PlayerAction, QuizEvent};
use super::state::{Phase, RoundState};
use super::view::{AlertModel, QuizStep, QuizView};

const RESULTS_TITLE: &str = "This round is over!";
const RESULTS_BUTTON: &str = "Play again";
const ERROR_TITLE: &str = "Error";
const ERROR_BUTTON: &str = "Try again";

/// What a retry should run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailedOperation {
    Catalog,
    Question,
}

/// Drives one player through rounds of questions.
///
/// All state changes happen in [`QuizPresenter::handle`], called from a
/// single control loop. Background work reports back through the event
/// channel; replies are matched against the outstanding request ticket and
/// the current round id, so anything from an abandoned request or round is
/// dropped.
pub struct QuizPresenter<V: QuizView> {
    view: V,
    factory: QuestionFactory,
    statistics: StatisticService,
    config: QuizConfig,
    events: mpsc::UnboundedSender<QuizEvent>,
    round: RoundState,
    round_id: Uuid,
    outstanding: Option<u64>,
    next_ticket: u64,
    prefetched: Option<Question>,
    delay_elapsed: bool,
    failed: Option<FailedOperation>,
}

impl<V: QuizView> QuizPresenter<V> {
    /// `events` must feed the receiver the control loop drains into
    /// [`QuizPresenter::handle`]; `factory` should report to the same channel.
    pub fn new(
        view: V,
        factory: QuestionFactory,
        statistics: StatisticService,
        config: QuizConfig,
        events: mpsc::UnboundedSender<QuizEvent>,
    ) -> Self {
        let round = RoundState::new(config.questions_amount);
        Self {
            view,
            factory,
            statistics,
            config,
            events,
            round,
            round_id: Uuid::new_v4(),
            outstanding: None,
            next_ticket: 0,
            prefetched: None,
            delay_elapsed: false,
            failed: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn statistics(&self) -> &StatisticService {
        &self.statistics
    }

    /// Start loading the catalog. Only meaningful before the first round.
    pub fn load_data(&mut self) {
        if !matches!(self.round.phase(), Phase::Idle | Phase::Loading) {
            return;
        }
        self.failed = None;
        self.transition(RoundState::begin_loading);
        self.view.show_loading_indicator();
        self.factory.load_data();
    }

    pub fn yes_button_clicked(&mut self) {
        self.process_answer(true);
    }

    pub fn no_button_clicked(&mut self) {
        self.process_answer(false);
    }

    /// Start a new round. Ignored while the first catalog load is pending.
    pub fn restart_game(&mut self) {
        if matches!(self.round.phase(), Phase::Idle | Phase::Loading) {
            return;
        }

        self.round_id = Uuid::new_v4();
        self.outstanding = None;
        self.prefetched = None;
        self.delay_elapsed = false;
        self.failed = None;
        self.transition(RoundState::restart);
        self.factory.reset();
        log::info!("Starting round {}", self.round_id);

        self.view.show_loading_indicator();
        if self.factory.has_data() {
            self.transition(RoundState::loaded);
            self.request_question();
        } else {
            self.factory.load_data();
        }
    }

    /// Re-run whatever failed last.
    pub fn retry(&mut self) {
        match self.failed.take() {
            Some(FailedOperation::Catalog) => self.load_data(),
            Some(FailedOperation::Question) => {
                self.view.show_loading_indicator();
                self.request_question();
            }
            None => {}
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Player(action) => self.on_player_action(action),
            QuizEvent::DataLoaded => self.on_data_loaded(),
            QuizEvent::DataLoadFailed(err) => self.on_data_load_failed(err),
            QuizEvent::QuestionLoaded { ticket, result } => self.on_question_loaded(ticket, result),
            QuizEvent::AnswerDelayElapsed { round } => self.on_answer_delay_elapsed(round),
        }
    }

    fn on_player_action(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Yes => self.yes_button_clicked(),
            PlayerAction::No => self.no_button_clicked(),
            PlayerAction::Restart => self.restart_game(),
            PlayerAction::Retry => self.retry(),
        }
    }

    fn on_data_loaded(&mut self) {
        if self.round.phase() != Phase::Loading {
            log::debug!("Catalog loaded outside of loading phase; ignoring");
            return;
        }
        self.view.hide_loading_indicator();
        self.transition(RoundState::loaded);
        self.request_question();
    }

    fn on_data_load_failed(&mut self, err: LoadError) {
        if self.round.phase() != Phase::Loading {
            log::debug!("Dropping catalog failure outside of loading phase: {}", err);
            return;
        }
        self.show_error(&err, FailedOperation::Catalog);
    }

    fn on_question_loaded(&mut self, ticket: u64, result: Result<Question, LoadError>) {
        if self.outstanding != Some(ticket) {
            log::debug!("Dropping stale reply for question request {}", ticket);
            return;
        }
        self.outstanding = None;

        let question = match result {
            Ok(question) => question,
            Err(err) => {
                self.show_error(&err, FailedOperation::Question);
                return;
            }
        };

        match self.round.phase() {
            Phase::Ready => {
                self.view.hide_loading_indicator();
                self.transition(|round| round.receive_question(question));
                self.show_current_question();
            }
            Phase::AnswerPending => {
                self.prefetched = Some(question);
                self.try_advance();
            }
            phase => log::debug!("Dropping question received in {:?}", phase),
        }
    }

    fn on_answer_delay_elapsed(&mut self, round: Uuid) {
        if round != self.round_id || self.round.phase() != Phase::AnswerPending {
            log::debug!("Dropping stale answer delay for round {}", round);
            return;
        }
        self.delay_elapsed = true;
        self.try_advance();
    }

    fn process_answer(&mut self, answer: bool) {
        let round = std::mem::take(&mut self.round);
        let (round, outcome) = round.answer(answer);
        self.round = round;
        let Some(is_correct) = outcome else {
            return;
        };

        log::debug!(
            "Question {} answered {}",
            self.round.question_number(),
            if is_correct { "correctly" } else { "incorrectly" }
        );
        self.view.show_answer_result(is_correct);

        self.delay_elapsed = false;
        self.prefetched = None;
        self.schedule_answer_delay();
        if !self.round.is_last_question() {
            self.request_question();
        }
    }

    /// Move past `AnswerPending` once the delay is over and, unless this was
    /// the last question, the next question has arrived.
    fn try_advance(&mut self) {
        if self.round.phase() != Phase::AnswerPending || !self.delay_elapsed {
            return;
        }

        if self.round.is_last_question() {
            self.transition(RoundState::advance);
            self.finish_round();
            return;
        }

        match self.prefetched.take() {
            Some(question) => {
                self.delay_elapsed = false;
                self.transition(|round| round.advance().receive_question(question));
                self.view.hide_loading_indicator();
                self.show_current_question();
            }
            None if self.failed.is_none() => self.view.show_loading_indicator(),
            None => {}
        }
    }

    fn finish_round(&mut self) {
        let correct = to_count(self.round.correct_answers());
        let total = to_count(self.round.total());

        let statistics = match self.statistics.store(correct, total) {
            Ok(statistics) => Some(statistics),
            Err(err) => {
                log::error!("Failed to store game result: {}", err);
                self.statistics.snapshot().ok()
            }
        };

        self.view.hide_loading_indicator();
        self.view.show_results(AlertModel {
            title: RESULTS_TITLE.to_string(),
            message: results_message(correct, total, statistics.as_ref()),
            button_text: RESULTS_BUTTON.to_string(),
            action: PlayerAction::Restart,
        });
    }

    fn request_question(&mut self) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.outstanding = Some(ticket);
        self.factory.request_next_question(ticket);
    }

    fn schedule_answer_delay(&self) {
        let events = self.events.clone();
        let round = self.round_id;
        let delay = self.config.answer_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(QuizEvent::AnswerDelayElapsed { round });
        });
    }

    fn show_current_question(&mut self) {
        let Some(question) = self.round.active_question() else {
            return;
        };
        let step = QuizStep {
            image: question.image.clone(),
            question: question.text.clone(),
            question_number: self.round.question_number(),
        };
        self.view.show_question(step);
    }

    fn show_error(&mut self, err: &LoadError, operation: FailedOperation) {
        log::warn!("{:?} failed: {}", operation, err);
        self.failed = Some(operation);
        self.view.hide_loading_indicator();
        self.view.show_network_error(AlertModel {
            title: ERROR_TITLE.to_string(),
            message: err.user_message(),
            button_text: ERROR_BUTTON.to_string(),
            action: PlayerAction::Retry,
        });
    }

    fn transition(&mut self, step: impl FnOnce(RoundState) -> RoundState) {
        let round = std::mem::take(&mut self.round);
        self.round = step(round);
    }
}

fn to_count(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Body of the end-of-round summary.
fn results_message(correct: u32, total: u32, statistics: Option<&Statistics>) -> String {
    let mut message = format!("Your result: {}/{}", correct, total);
    if let Some(stats) = statistics {
        let best = &stats.best_game;
        message.push_str(&format!(
            "\nQuizzes played: {}\nRecord: {}/{} ({})\nAverage accuracy: {:.2}%",
            stats.games_count,
            best.correct,
            best.total,
            best.date.with_timezone(&Local).format("%d.%m.%y %H:%M"),
            stats.total_accuracy()
        ));
    }
    message
}

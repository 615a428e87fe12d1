//! Round state as a value: every transition consumes the old state and
//! returns the next one.

use crate::config::DEFAULT_QUESTIONS_AMOUNT;
use crate::models::Question;

/// Where the round currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing requested yet.
    Idle,
    /// Waiting for the catalog (or for a restart to settle).
    Loading,
    /// Showing, or waiting for, the question at `index`.
    Ready,
    /// The question at `index` was answered; waiting out the feedback delay.
    AnswerPending,
    /// All questions answered.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    phase: Phase,
    index: usize,
    correct: usize,
    total: usize,
    active: Option<Question>,
}

impl RoundState {
    /// A fresh round of `total` questions (at least one).
    pub fn new(total: usize) -> Self {
        Self {
            phase: Phase::Idle,
            index: 0,
            correct: 0,
            total: total.max(1),
            active: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 0-based index of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_answers(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn active_question(&self) -> Option<&Question> {
        self.active.as_ref()
    }

    pub fn is_last_question(&self) -> bool {
        self.index == self.total - 1
    }

    /// Progress label for the current question, e.g. `"1/10"`.
    pub fn question_number(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }

    pub fn begin_loading(self) -> Self {
        match self.phase {
            Phase::Idle | Phase::Loading => Self {
                phase: Phase::Loading,
                ..self
            },
            _ => self,
        }
    }

    /// The catalog is available: wait for question 0.
    pub fn loaded(self) -> Self {
        if self.phase != Phase::Loading {
            return self;
        }
        Self {
            phase: Phase::Ready,
            index: 0,
            active: None,
            ..self
        }
    }

    pub fn receive_question(self, question: Question) -> Self {
        if self.phase != Phase::Ready {
            return self;
        }
        Self {
            active: Some(question),
            ..self
        }
    }

    /// Score `answer` against the active question.
    ///
    /// Returns whether it was correct, or `None` when there was nothing to
    /// answer; in that case the state is returned untouched.
    pub fn answer(mut self, answer: bool) -> (Self, Option<bool>) {
        if self.phase != Phase::Ready {
            return (self, None);
        }
        let Some(question) = self.active.take() else {
            return (self, None);
        };

        let is_correct = question.is_correct(answer);
        if is_correct {
            self.correct += 1;
        }
        self.phase = Phase::AnswerPending;
        (self, Some(is_correct))
    }

    /// Leave `AnswerPending`: move to the next question or finish.
    pub fn advance(self) -> Self {
        if self.phase != Phase::AnswerPending {
            return self;
        }
        if self.is_last_question() {
            Self {
                phase: Phase::Complete,
                ..self
            }
        } else {
            Self {
                phase: Phase::Ready,
                index: self.index + 1,
                active: None,
                ..self
            }
        }
    }

    /// Start over with the same length.
    pub fn restart(self) -> Self {
        Self {
            phase: Phase::Loading,
            ..Self::new(self.total)
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_AMOUNT)
    }
}

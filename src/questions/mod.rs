//! Question source: picks unused movies and turns them into rating questions.

mod factory;
mod picker;

pub use factory::{QuestionFactory, RATING_THRESHOLDS, compose_question};
pub use picker::MoviePicker;

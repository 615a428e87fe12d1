//! Round orchestration: state transitions, events and the view contract.

mod events;
mod presenter;
mod state;
mod view;

pub use events::{PlayerAction, QuizEvent};
pub use presenter::QuizPresenter;
pub use state::{Phase, RoundState};
pub use view::{AlertModel, QuizStep, QuizView};

//! Application services - use cases composed from the ports.

mod poll;

pub use poll::{
    LATEST_QUESTIONS_LIMIT, NO_CHOICE_SELECTED, PollService, QuestionWithChoices, VoteOutcome,
};

use std::sync::Arc;

use crate::domain::{Choice, Question};
use crate::error::DomainError;
use crate::ports::{ChoiceRepository, Clock, QuestionRepository};

/// Size of the index listing.
pub const LATEST_QUESTIONS_LIMIT: u64 = 5;

/// Shown on the detail page when a vote names no valid choice.
pub const NO_CHOICE_SELECTED: &str = "You did not select a choice.";

/// A question together with its choices in insertion order.
#[derive(Debug, Clone)]
pub struct QuestionWithChoices {
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// Result of a vote submission that reached an existing question.
#[derive(Debug, Clone)]
pub enum VoteOutcome {
    /// One vote was added; the caller should redirect to the results.
    Recorded { question_id: i32, choice_id: i32 },
    /// Nothing was changed; the detail page is shown again with a message.
    Rejected {
        poll: QuestionWithChoices,
        error_message: &'static str,
    },
}

/// Poll use cases: visibility-filtered reads and voting.
#[derive(Clone)]
pub struct PollService {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    clock: Arc<dyn Clock>,
}

impl PollService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            questions,
            choices,
            clock,
        }
    }

    /// Up to five published questions, newest first.
    pub async fn latest_questions(&self) -> Result<Vec<Question>, DomainError> {
        let now = self.clock.now();
        Ok(self
            .questions
            .list_published(LATEST_QUESTIONS_LIMIT, now)
            .await?)
    }

    /// A published question; unpublished ones are indistinguishable from missing.
    pub async fn published_question(&self, id: i32) -> Result<Question, DomainError> {
        let now = self.clock.now();
        self.questions
            .find_published(id, now)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Question",
                id,
            })
    }

    /// Detail view data: the published question and its choices.
    pub async fn question_detail(&self, id: i32) -> Result<QuestionWithChoices, DomainError> {
        let question = self.published_question(id).await?;
        self.with_choices(question).await
    }

    /// Results view data. Same visibility rule as the detail view; the
    /// choices carry their current vote counts.
    pub async fn question_results(&self, id: i32) -> Result<QuestionWithChoices, DomainError> {
        self.question_detail(id).await
    }

    /// Cast one vote for `raw_choice` on `question_id`.
    ///
    /// The target question is looked up by ID only, without the publish
    /// filter. A missing, malformed or foreign choice leaves every counter
    /// untouched and yields [`VoteOutcome::Rejected`].
    pub async fn cast_vote(
        &self,
        question_id: i32,
        raw_choice: Option<&str>,
    ) -> Result<VoteOutcome, DomainError> {
        let question = self
            .questions
            .find_any(question_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Question",
                id: question_id,
            })?;

        if let Some(choice_id) = raw_choice.and_then(|raw| raw.trim().parse::<i32>().ok()) {
            if self.choices.increment_votes(question.id, choice_id).await? {
                return Ok(VoteOutcome::Recorded {
                    question_id: question.id,
                    choice_id,
                });
            }
        }

        let poll = self.with_choices(question).await?;
        Ok(VoteOutcome::Rejected {
            poll,
            error_message: NO_CHOICE_SELECTED,
        })
    }

    async fn with_choices(&self, question: Question) -> Result<QuestionWithChoices, DomainError> {
        let choices = self.choices.list_for_question(question.id).await?;
        Ok(QuestionWithChoices { question, choices })
    }
}

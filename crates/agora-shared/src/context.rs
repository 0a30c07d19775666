//! Page contexts - the data each HTML page is rendered from.

use agora_core::domain::{Choice, Question};
use agora_core::services::QuestionWithChoices;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the index listing.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSummary {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl From<Question> for QuestionSummary {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
        }
    }
}

/// Context of the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexContext {
    pub latest_questions: Vec<QuestionSummary>,
}

impl IndexContext {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            latest_questions: questions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Context of the detail page, optionally carrying a vote error.
#[derive(Debug, Clone, Serialize)]
pub struct DetailContext {
    pub question: Question,
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DetailContext {
    pub fn new(poll: QuestionWithChoices) -> Self {
        Self {
            question: poll.question,
            choices: poll.choices,
            error_message: None,
        }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// Context of the results page.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsContext {
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl ResultsContext {
    pub fn new(poll: QuestionWithChoices) -> Self {
        Self {
            question: poll.question,
            choices: poll.choices,
        }
    }

    /// Sum of all vote counters.
    pub fn total_votes(&self) -> i64 {
        self.choices.iter().map(|c| i64::from(c.votes)).sum()
    }
}

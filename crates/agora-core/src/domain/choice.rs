use std::fmt;

use serde::{Deserialize, Serialize};

/// Choice entity - a selectable option of exactly one question.
///
/// `votes` never goes below zero; the only mutation is the store-level
/// increment issued by a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.choice_text)
    }
}

/// A choice that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

impl NewChoice {
    /// Create a choice for `question_id` with no votes.
    pub fn new(question_id: i32, choice_text: impl Into<String>) -> Self {
        Self {
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
        }
    }

    /// Seed the counter, e.g. when importing existing results.
    pub fn with_votes(mut self, votes: u32) -> Self {
        self.votes = i32::try_from(votes).unwrap_or(i32::MAX);
        self
    }
}

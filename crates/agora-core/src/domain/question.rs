use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Question entity - the aggregation root of a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// A question is published once its publish date is at or before `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Published within the last day. Future dates are never recent.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

/// A question that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            question_text: question_text.into(),
            pub_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's up?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn future_question_is_not_recent() {
        let now = Utc::now();
        let question = question_at(now + Duration::days(30));
        assert!(!question.was_published_recently(now));
        assert!(!question.is_published(now));
    }

    #[test]
    fn old_question_is_not_recent() {
        let now = Utc::now();
        let question = question_at(now - Duration::days(30));
        assert!(!question.was_published_recently(now));
        assert!(question.is_published(now));
    }

    #[test]
    fn question_from_last_hour_is_recent() {
        let now = Utc::now();
        let question = question_at(now - Duration::hours(1));
        assert!(question.was_published_recently(now));
    }

    #[test]
    fn recency_window_is_inclusive() {
        let now = Utc::now();
        assert!(question_at(now).was_published_recently(now));
        assert!(question_at(now - Duration::days(1)).was_published_recently(now));
        assert!(!question_at(now - Duration::days(1) - Duration::seconds(1))
            .was_published_recently(now));
    }

    #[test]
    fn publish_bound_is_inclusive() {
        let now = Utc::now();
        assert!(question_at(now).is_published(now));
    }

    #[test]
    fn displays_as_its_text() {
        let question = question_at(Utc::now());
        assert_eq!(question.to_string(), "What's up?");
    }
}

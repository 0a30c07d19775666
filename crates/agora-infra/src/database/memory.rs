//! In-memory repositories - used when no database is configured.
//!
//! Each repository keeps its rows in insertion order behind an async
//! `RwLock`. Data is lost on process restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use agora_core::domain::{Choice, NewChoice, NewQuestion, Question};
use agora_core::error::RepoError;
use agora_core::ports::{BaseRepository, ChoiceRepository, QuestionRepository};

/// In-memory question store.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    store: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn exists(&self, id: i32) -> bool {
        self.store.read().await.iter().any(|q| q.id == id)
    }
}

#[async_trait]
impl BaseRepository<Question, NewQuestion, i32> for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|q| q.id == id).cloned())
    }

    async fn insert(&self, draft: NewQuestion) -> Result<Question, RepoError> {
        let mut store = self.store.write().await;
        let question = Question {
            id: next_id(store.len())?,
            question_text: draft.question_text,
            pub_date: draft.pub_date,
        };
        store.push(question.clone());
        Ok(question)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_published(
        &self,
        limit: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, RepoError> {
        let store = self.store.read().await;
        let mut published: Vec<Question> = store
            .iter()
            .filter(|q| q.is_published(now))
            .cloned()
            .collect();

        // Stable sort: equal dates stay in insertion order.
        published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        published.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(published)
    }

    async fn find_published(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError> {
        Ok(self
            .find_by_id(id)
            .await?
            .filter(|q| q.is_published(now)))
    }
}

/// In-memory choice store.
///
/// Holds the question store to enforce the parent reference on insert,
/// the way the `choices.question_id` foreign key does in Postgres.
pub struct InMemoryChoiceRepository {
    questions: Arc<InMemoryQuestionRepository>,
    store: RwLock<Vec<Choice>>,
}

impl InMemoryChoiceRepository {
    pub fn new(questions: Arc<InMemoryQuestionRepository>) -> Self {
        Self {
            questions,
            store: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BaseRepository<Choice, NewChoice, i32> for InMemoryChoiceRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Choice>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, draft: NewChoice) -> Result<Choice, RepoError> {
        if !self.questions.exists(draft.question_id).await {
            return Err(RepoError::Constraint(format!(
                "question {} does not exist",
                draft.question_id
            )));
        }
        if draft.votes < 0 {
            return Err(RepoError::Constraint("votes must not be negative".to_string()));
        }

        let mut store = self.store.write().await;
        let choice = Choice {
            id: next_id(store.len())?,
            question_id: draft.question_id,
            choice_text: draft.choice_text,
            votes: draft.votes,
        };
        store.push(choice.clone());
        Ok(choice)
    }
}

#[async_trait]
impl ChoiceRepository for InMemoryChoiceRepository {
    async fn list_for_question(&self, question_id: i32) -> Result<Vec<Choice>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, RepoError> {
        // Lookup and increment share one write guard.
        let mut store = self.store.write().await;
        match store
            .iter_mut()
            .find(|c| c.id == choice_id && c.question_id == question_id)
        {
            Some(choice) => {
                choice.votes = choice.votes.checked_add(1).ok_or_else(|| {
                    RepoError::Constraint(format!("vote counter of choice {choice_id} is full"))
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn next_id(len: usize) -> Result<i32, RepoError> {
    i32::try_from(len + 1).map_err(|_| RepoError::Constraint("id space exhausted".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn seeded() -> (Arc<InMemoryQuestionRepository>, InMemoryChoiceRepository) {
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let choices = InMemoryChoiceRepository::new(questions.clone());
        (questions, choices)
    }

    #[tokio::test]
    async fn test_list_published_orders_and_truncates() {
        let (questions, _) = seeded();
        let now = Utc::now();
        for days in 1..=7 {
            questions
                .insert(NewQuestion::new(format!("q{days}"), now - Duration::days(days)))
                .await
                .unwrap();
        }
        questions
            .insert(NewQuestion::new("future", now + Duration::days(1)))
            .await
            .unwrap();

        let listed = questions.list_published(5, now).await.unwrap();
        let texts: Vec<_> = listed.iter().map(|q| q.question_text.as_str()).collect();
        assert_eq!(texts, vec!["q1", "q2", "q3", "q4", "q5"]);
    }

    #[tokio::test]
    async fn test_list_published_keeps_insertion_order_on_ties() {
        let (questions, _) = seeded();
        let now = Utc::now();
        let at = now - Duration::hours(2);
        questions.insert(NewQuestion::new("first", at)).await.unwrap();
        questions.insert(NewQuestion::new("second", at)).await.unwrap();

        let listed = questions.list_published(5, now).await.unwrap();
        assert_eq!(listed[0].question_text, "first");
        assert_eq!(listed[1].question_text, "second");
    }

    #[tokio::test]
    async fn test_find_published_hides_future_questions() {
        let (questions, _) = seeded();
        let now = Utc::now();
        let future = questions
            .insert(NewQuestion::new("later", now + Duration::seconds(1)))
            .await
            .unwrap();
        let exact = questions.insert(NewQuestion::new("now", now)).await.unwrap();

        assert!(questions.find_published(future.id, now).await.unwrap().is_none());
        assert!(questions.find_any(future.id).await.unwrap().is_some());
        assert!(questions.find_published(exact.id, now).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_choice_requires_existing_question() {
        let (_, choices) = seeded();
        let result = choices.insert(NewChoice::new(42, "orphan")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_increment_checks_ownership() {
        let (questions, choices) = seeded();
        let now = Utc::now();
        let q1 = questions.insert(NewQuestion::new("one", now)).await.unwrap();
        let q2 = questions.insert(NewQuestion::new("two", now)).await.unwrap();
        let c2 = choices.insert(NewChoice::new(q2.id, "theirs")).await.unwrap();

        assert!(!choices.increment_votes(q1.id, c2.id).await.unwrap());
        assert!(choices.increment_votes(q2.id, c2.id).await.unwrap());
        assert_eq!(choices.find_by_id(c2.id).await.unwrap().unwrap().votes, 1);
    }

    #[tokio::test]
    async fn test_increment_of_full_counter_is_a_constraint_error() {
        let (questions, choices) = seeded();
        let q = questions
            .insert(NewQuestion::new("busy", Utc::now()))
            .await
            .unwrap();
        let c = choices
            .insert(NewChoice::new(q.id, "popular").with_votes(u32::MAX))
            .await
            .unwrap();
        assert_eq!(c.votes, i32::MAX);

        let result = choices.increment_votes(q.id, c.id).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(choices.find_by_id(c.id).await.unwrap().unwrap().votes, i32::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_increments_are_not_lost() {
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let choices = Arc::new(InMemoryChoiceRepository::new(questions.clone()));
        let q = questions
            .insert(NewQuestion::new("race", Utc::now()))
            .await
            .unwrap();
        let c = choices.insert(NewChoice::new(q.id, "yes")).await.unwrap();
        let (question_id, choice_id) = (q.id, c.id);

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let choices = choices.clone();
                tokio::spawn(async move { choices.increment_votes(question_id, choice_id).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().unwrap());
        }

        assert_eq!(choices.find_by_id(choice_id).await.unwrap().unwrap().votes, 50);
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Choice, NewChoice, NewQuestion, Question};
use crate::error::RepoError;

/// Generic repository trait shared by every record type.
///
/// `D` is the draft type inserted into the store, `T` the stored record.
#[async_trait]
pub trait BaseRepository<T, D, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it with its store-assigned ID.
    async fn insert(&self, draft: D) -> Result<T, RepoError>;
}

/// Question repository with the visibility queries.
#[async_trait]
pub trait QuestionRepository: BaseRepository<Question, NewQuestion, i32> {
    /// Published questions (`pub_date <= now`), newest first, at most `limit`.
    /// Equal publish dates keep insertion order.
    async fn list_published(
        &self,
        limit: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, RepoError>;

    /// A question by ID, only if it is published at `now`.
    async fn find_published(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError>;

    /// A question by ID regardless of its publish date.
    async fn find_any(&self, id: i32) -> Result<Option<Question>, RepoError> {
        self.find_by_id(id).await
    }
}

/// Choice repository.
#[async_trait]
pub trait ChoiceRepository: BaseRepository<Choice, NewChoice, i32> {
    /// Choices of a question in insertion order.
    async fn list_for_question(&self, question_id: i32) -> Result<Vec<Choice>, RepoError>;

    /// Add one vote to `choice_id` if it belongs to `question_id`.
    ///
    /// Must be a single store-level relative update, never a read followed
    /// by a write. Returns `false` when no such choice exists.
    async fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, RepoError>;
}

//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use agora_core::domain::{Choice, Question};
use agora_core::error::RepoError;
use agora_core::ports::{ChoiceRepository, QuestionRepository};

use super::entity::choice::{self, Entity as ChoiceEntity};
use super::entity::question::{self, Entity as QuestionEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL question repository.
pub type PostgresQuestionRepository = PostgresBaseRepository<QuestionEntity>;

/// PostgreSQL choice repository.
pub type PostgresChoiceRepository = PostgresBaseRepository<ChoiceEntity>;

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn list_published(
        &self,
        limit: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, RepoError> {
        tracing::debug!(limit, %now, "Listing published questions");

        let result = QuestionEntity::find()
            .filter(question::Column::PubDate.lte(now))
            .order_by_desc(question::Column::PubDate)
            .order_by_asc(question::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_published(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, RepoError> {
        tracing::debug!(id, %now, "Finding published question");

        let result = QuestionEntity::find_by_id(id)
            .filter(question::Column::PubDate.lte(now))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl ChoiceRepository for PostgresChoiceRepository {
    async fn list_for_question(&self, question_id: i32) -> Result<Vec<Choice>, RepoError> {
        tracing::debug!(question_id, "Listing choices");

        let result = ChoiceEntity::find()
            .filter(choice::Column::QuestionId.eq(question_id))
            .order_by_asc(choice::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, RepoError> {
        tracing::debug!(question_id, choice_id, "Incrementing choice votes");

        // votes = votes + 1 in one statement; the ownership check rides on the same WHERE.
        let result = ChoiceEntity::update_many()
            .col_expr(
                choice::Column::Votes,
                Expr::col(choice::Column::Votes).add(1),
            )
            .filter(choice::Column::Id.eq(choice_id))
            .filter(choice::Column::QuestionId.eq(question_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use agora_core::ports::{ChoiceRepository, Clock, QuestionRepository};
use agora_core::services::PollService;
use agora_infra::database::DatabaseConfig;
use agora_infra::{InMemoryChoiceRepository, InMemoryQuestionRepository, SystemClock};

#[cfg(feature = "postgres")]
use agora_infra::database::{
    DatabaseConnections, PostgresChoiceRepository, PostgresQuestionRepository,
};

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub polls: PollService,
    pub storage: Storage,
}

impl AppState {
    /// Wire the poll service over the given repositories.
    pub fn from_repositories(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
        storage: Storage,
    ) -> Self {
        Self {
            polls: PollService::new(questions, choices, clock),
            storage,
        }
    }

    /// An empty in-memory store on the system clock.
    pub fn in_memory() -> Self {
        let questions = Arc::new(InMemoryQuestionRepository::new());
        let choices = Arc::new(InMemoryChoiceRepository::new(questions.clone()));
        Self::from_repositories(questions, choices, Arc::new(SystemClock), Storage::Memory)
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let db = Arc::new(connections.main);
                    Self::from_repositories(
                        Arc::new(PostgresQuestionRepository::new(Arc::clone(&db))),
                        Arc::new(PostgresChoiceRepository::new(db)),
                        Arc::new(SystemClock),
                        Storage::Postgres,
                    )
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_without_database_config_uses_memory() {
        let state = AppState::new(None).await;
        assert_eq!(state.storage, Storage::Memory);
    }

    #[cfg(feature = "postgres")]
    #[actix_web::test]
    async fn test_unreachable_database_falls_back_to_memory() {
        let config = DatabaseConfig {
            url: "unsupported://nowhere".to_string(),
            max_connections: 1,
            min_connections: 0,
        };

        let state = AppState::new(Some(&config)).await;
        assert_eq!(state.storage, Storage::Memory);
        assert!(state.polls.latest_questions().await.unwrap().is_empty());
    }
}

use std::sync::Arc;

use agora_core::domain::{Choice, NewQuestion, Question};
use agora_core::ports::{BaseRepository, ChoiceRepository, QuestionRepository};
use chrono::{Duration, Utc};
use sea_orm::{
    DatabaseBackend, EntityTrait, MockDatabase, MockExecResult, Statement, Transaction, Value,
};

use crate::database::entity::{choice, question};
use crate::database::postgres_base::PostgresBaseRepository;
use crate::database::postgres_repo::{PostgresChoiceRepository, PostgresQuestionRepository};

fn transaction_log<E: EntityTrait>(repo: PostgresBaseRepository<E>) -> Vec<Transaction> {
    Arc::try_unwrap(repo.db)
        .ok()
        .expect("repository holds the only connection handle")
        .into_transaction_log()
}

fn binds(statement: &Statement, value: Value) -> bool {
    statement
        .values
        .as_ref()
        .is_some_and(|values| values.0.contains(&value))
}

#[tokio::test]
async fn test_list_published_maps_rows() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            question::Model {
                id: 2,
                question_text: "Newer".to_owned(),
                pub_date: (now - Duration::hours(1)).into(),
            },
            question::Model {
                id: 1,
                question_text: "Older".to_owned(),
                pub_date: (now - Duration::days(3)).into(),
            },
        ]])
        .into_connection();

    let repo = PostgresQuestionRepository::new(Arc::new(db));
    let listed = repo.list_published(5, now).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].question_text, "Newer");
    assert_eq!(listed[1].id, 1);

    let log = transaction_log(repo);
    let statement = &log[0].statements()[0];
    let sql = &statement.sql;
    assert!(sql.contains(r#""questions"."pub_date" <= "#), "{sql}");
    assert!(
        sql.contains(r#"ORDER BY "questions"."pub_date" DESC, "questions"."id" ASC"#),
        "{sql}"
    );
    assert!(sql.contains("LIMIT"), "{sql}");
    assert!(binds(statement, Value::from(now)), "{statement:?}");
}

#[tokio::test]
async fn test_find_published_missing_row_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<question::Model>::new()])
        .into_connection();

    let now = Utc::now();
    let repo = PostgresQuestionRepository::new(Arc::new(db));
    let result = repo.find_published(9, now).await.unwrap();

    assert!(result.is_none());

    let log = transaction_log(repo);
    let statement = &log[0].statements()[0];
    let sql = &statement.sql;
    assert!(sql.contains(r#""questions"."id" = "#), "{sql}");
    assert!(sql.contains(r#""questions"."pub_date" <= "#), "{sql}");
    assert!(binds(statement, Value::from(9_i32)), "{statement:?}");
    assert!(binds(statement, Value::from(now)), "{statement:?}");
}

#[tokio::test]
async fn test_insert_question_returns_assigned_id() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![question::Model {
            id: 17,
            question_text: "What's new?".to_owned(),
            pub_date: now.into(),
        }]])
        .into_connection();

    let repo = PostgresQuestionRepository::new(Arc::new(db));
    let saved: Question = repo
        .insert(NewQuestion::new("What's new?", now))
        .await
        .unwrap();

    assert_eq!(saved.id, 17);
    assert_eq!(saved.question_text, "What's new?");
}

#[tokio::test]
async fn test_list_for_question_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            choice::Model {
                id: 1,
                question_id: 3,
                choice_text: "Yes".to_owned(),
                votes: 1,
            },
            choice::Model {
                id: 2,
                question_id: 3,
                choice_text: "No".to_owned(),
                votes: 0,
            },
        ]])
        .into_connection();

    let repo = PostgresChoiceRepository::new(Arc::new(db));
    let choices: Vec<Choice> = repo.list_for_question(3).await.unwrap();

    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].choice_text, "Yes");
    assert_eq!(choices[0].votes, 1);
}

#[tokio::test]
async fn test_increment_votes_is_a_relative_update() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresChoiceRepository::new(Arc::new(db));
    assert!(repo.increment_votes(3, 7).await.unwrap());

    let log = transaction_log(repo);
    assert_eq!(log.len(), 1);
    let statements = log[0].statements();
    assert_eq!(statements.len(), 1);
    let sql = &statements[0].sql;
    assert!(sql.starts_with(r#"UPDATE "choices""#), "{sql}");
    assert!(sql.contains(r#""votes" = "votes" + "#), "{sql}");
    assert!(sql.contains(r#""choices"."question_id" = "#), "{sql}");
}

#[tokio::test]
async fn test_increment_votes_on_foreign_choice_reports_false() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresChoiceRepository::new(Arc::new(db));
    assert!(!repo.increment_votes(3, 99).await.unwrap());
}

#[tokio::test]
async fn test_repositories_share_one_connection() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<question::Model>::new()])
            .append_query_results([Vec::<choice::Model>::new()])
            .into_connection(),
    );

    let questions = PostgresQuestionRepository::new(Arc::clone(&db));
    let choices = PostgresChoiceRepository::new(Arc::clone(&db));
    assert!(questions.list_published(5, Utc::now()).await.unwrap().is_empty());
    assert!(choices.list_for_question(1).await.unwrap().is_empty());

    drop((questions, choices));
    let log = Arc::try_unwrap(db)
        .ok()
        .expect("repositories released the connection")
        .into_transaction_log();
    assert_eq!(log.len(), 2);
    assert!(log[1].statements()[0].sql.contains(r#"FROM "choices""#));
}

//! Question entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::choice::Entity")]
    Choice,
}

impl Related<super::choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for agora_core::domain::Question {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            question_text: model.question_text,
            pub_date: model.pub_date.into(),
        }
    }
}

/// The id column is left unset so the database assigns it.
impl From<agora_core::domain::NewQuestion> for ActiveModel {
    fn from(question: agora_core::domain::NewQuestion) -> Self {
        Self {
            id: NotSet,
            question_text: Set(question.question_text),
            pub_date: Set(question.pub_date.into()),
        }
    }
}

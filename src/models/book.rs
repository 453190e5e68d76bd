use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub price: Option<i64>,
    pub publisher_id: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Publisher,
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_authors::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_authors::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Nested author reference inside a book representation. Read-only: books
/// reference authors by id, they never create or edit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub price: Option<i64>,
    pub price_with_tax: Option<i64>,
    pub publisher_name: Option<String>,
    pub authors: Vec<AuthorRef>,
    pub created_at: String,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
            price_with_tax: None,  // derived by the service
            publisher_name: None,  // fetched from relation by the service
            authors: Vec::new(),   // fetched from relation by the service
            created_at: model.created_at,
        }
    }
}

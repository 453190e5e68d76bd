//! Book Service - business logic without the HTTP layer
//!
//! Owns translation between stored book rows and their API representation
//! (derived tax-inclusive price, flattened publisher name, materialized
//! author list) and the five CRUD operations over them.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::domain::pricing::price_with_tax;
use crate::domain::validation::{check_price, check_required_text};
use crate::domain::{DomainError, ValidationErrors};
use crate::models::author::Entity as AuthorEntity;
use crate::models::book::{
    ActiveModel as BookActiveModel, AuthorRef, Book, Entity as BookEntity, Model as BookModel,
};
use crate::models::book_authors::{
    ActiveModel as BookAuthorActiveModel, Column as BookAuthorColumn, Entity as BookAuthorEntity,
};
use crate::models::publisher::Entity as PublisherEntity;
use crate::models::{author, book};

/// Inbound representation for create and full update. Every field except
/// `title` is optional; nested authors are referenced by id only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookInput {
    pub title: String,
    pub price: Option<i64>,
    pub publisher_id: Option<String>,
    pub author_ids: Vec<String>,
}

/// Inbound representation for partial update. Omitted fields stay untouched;
/// the double Option distinguishes "not sent" from an explicit null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookPatch {
    #[serde(deserialize_with = "nullable_field")]
    pub title: Option<Option<String>>,
    #[serde(deserialize_with = "nullable_field")]
    pub price: Option<Option<i64>>,
    #[serde(deserialize_with = "nullable_field")]
    pub publisher_id: Option<Option<String>>,
    pub author_ids: Option<Vec<String>>,
}

// Wraps a present value (including null) in the outer Some, so a missing
// field deserializes to None via the struct-level default.
fn nullable_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Builds the outward representation of a stored book: raw price plus the
/// derived tax-inclusive price, the related publisher's name flattened in,
/// and the full author list.
async fn to_representation(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
    model: BookModel,
) -> Result<Book, DomainError> {
    let mut dto = Book::from(model.clone());
    dto.price_with_tax = price_with_tax(dto.price, tax_rate_bps);

    if model.publisher_id.is_some() {
        dto.publisher_name = model
            .find_related(PublisherEntity)
            .one(db)
            .await?
            .map(|p| p.name);
    }

    dto.authors = model
        .find_related(AuthorEntity)
        .all(db)
        .await?
        .into_iter()
        .map(|a| AuthorRef {
            id: a.id,
            name: a.name,
        })
        .collect();

    Ok(dto)
}

/// List all books
pub async fn list_books(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
) -> Result<Vec<Book>, DomainError> {
    let models = BookEntity::find().all(db).await?;
    tracing::debug!("DB query returned {} books", models.len());

    let mut books = Vec::with_capacity(models.len());
    for model in models {
        books.push(to_representation(db, tax_rate_bps, model).await?);
    }
    Ok(books)
}

/// Get a single book by ID
pub async fn get_book(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
    id: &str,
) -> Result<Book, DomainError> {
    let model = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    to_representation(db, tax_rate_bps, model).await
}

/// Create a new book with a freshly generated id
pub async fn create_book(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
    input: BookInput,
) -> Result<Book, DomainError> {
    let author_ids = normalize_author_ids(&input.author_ids);
    validate_input(db, &input.title, input.price, &input.publisher_id, &author_ids).await?;

    let id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now();

    let txn = db.begin().await?;

    let new_book = BookActiveModel {
        id: Set(id.clone()),
        title: Set(input.title.trim().to_string()),
        price: Set(input.price),
        publisher_id: Set(input.publisher_id),
        created_at: Set(now.to_rfc3339()),
    };
    let model = new_book.insert(&txn).await?;

    link_authors(&txn, &model.id, &author_ids).await?;

    txn.commit().await?;

    tracing::info!("Created book {} ({})", model.id, model.title);
    to_representation(db, tax_rate_bps, model).await
}

/// Full update: omitted optional fields are reset to their defaults
pub async fn update_book(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
    id: &str,
    input: BookInput,
) -> Result<Book, DomainError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let author_ids = normalize_author_ids(&input.author_ids);
    validate_input(db, &input.title, input.price, &input.publisher_id, &author_ids).await?;

    let txn = db.begin().await?;

    let mut book: BookActiveModel = existing.into();
    book.title = Set(input.title.trim().to_string());
    book.price = Set(input.price);
    book.publisher_id = Set(input.publisher_id);
    // created_at and id are immutable, left as-is
    let model = book.update(&txn).await?;

    BookAuthorEntity::delete_many()
        .filter(BookAuthorColumn::BookId.eq(id))
        .exec(&txn)
        .await?;
    link_authors(&txn, id, &author_ids).await?;

    txn.commit().await?;

    to_representation(db, tax_rate_bps, model).await
}

/// Partial update: only supplied fields are merged, no defaults applied
pub async fn patch_book(
    db: &DatabaseConnection,
    tax_rate_bps: u32,
    id: &str,
    patch: BookPatch,
) -> Result<Book, DomainError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let mut errors = ValidationErrors::new();
    match &patch.title {
        // title is not nullable; an explicit null is rejected, not skipped
        Some(None) => errors.add("title", "This field may not be null."),
        Some(Some(title)) => check_required_text(&mut errors, "title", title),
        None => {}
    }
    if let Some(price) = &patch.price {
        check_price(&mut errors, "price", *price);
    }
    let author_ids = patch.author_ids.as_deref().map(normalize_author_ids);
    if let Some(ids) = &author_ids {
        check_author_ids(db, &mut errors, ids).await?;
    }
    if let Some(Some(publisher_id)) = &patch.publisher_id {
        check_publisher_id(db, &mut errors, publisher_id).await?;
    }
    errors.into_result().map_err(DomainError::Validation)?;

    let txn = db.begin().await?;

    let mut book: BookActiveModel = existing.into();
    if let Some(Some(title)) = patch.title {
        book.title = Set(title.trim().to_string());
    }
    if let Some(price) = patch.price {
        book.price = Set(price);
    }
    if let Some(publisher_id) = patch.publisher_id {
        book.publisher_id = Set(publisher_id);
    }
    let model = book.update(&txn).await?;

    if let Some(ids) = &author_ids {
        BookAuthorEntity::delete_many()
            .filter(BookAuthorColumn::BookId.eq(id))
            .exec(&txn)
            .await?;
        link_authors(&txn, id, ids).await?;
    }

    txn.commit().await?;

    to_representation(db, tax_rate_bps, model).await
}

/// Delete a book and its author associations. Not idempotent: deleting a
/// nonexistent id reports NotFound.
pub async fn delete_book(db: &DatabaseConnection, id: &str) -> Result<(), DomainError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    let txn = db.begin().await?;

    // Junction rows are removed explicitly; sqlite foreign-key cascades are
    // not guaranteed to be enabled on every connection.
    BookAuthorEntity::delete_many()
        .filter(BookAuthorColumn::BookId.eq(id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;

    txn.commit().await?;

    tracing::info!("Deleted book {}", id);
    Ok(())
}

// Association order carries no meaning; sorting makes duplicates trivial
// to drop and keeps junction inserts deterministic.
fn normalize_author_ids(ids: &[String]) -> Vec<String> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids.dedup();
    ids
}

async fn validate_input(
    db: &DatabaseConnection,
    title: &str,
    price: Option<i64>,
    publisher_id: &Option<String>,
    author_ids: &[String],
) -> Result<(), DomainError> {
    let mut errors = ValidationErrors::new();

    check_required_text(&mut errors, "title", title);
    check_price(&mut errors, "price", price);
    check_author_ids(db, &mut errors, author_ids).await?;
    if let Some(publisher_id) = publisher_id {
        check_publisher_id(db, &mut errors, publisher_id).await?;
    }

    errors.into_result().map_err(DomainError::Validation)
}

async fn check_author_ids(
    db: &DatabaseConnection,
    errors: &mut ValidationErrors,
    author_ids: &[String],
) -> Result<(), DomainError> {
    if author_ids.is_empty() {
        return Ok(());
    }

    let existing: Vec<String> = AuthorEntity::find()
        .filter(author::Column::Id.is_in(author_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();

    for id in author_ids {
        if !existing.contains(id) {
            errors.add("author_ids", format!("Author with id '{}' does not exist.", id));
        }
    }
    Ok(())
}

async fn check_publisher_id(
    db: &DatabaseConnection,
    errors: &mut ValidationErrors,
    publisher_id: &str,
) -> Result<(), DomainError> {
    if PublisherEntity::find_by_id(publisher_id).one(db).await?.is_none() {
        errors.add(
            "publisher_id",
            format!("Publisher with id '{}' does not exist.", publisher_id),
        );
    }
    Ok(())
}

async fn link_authors<C>(conn: &C, book_id: &str, author_ids: &[String]) -> Result<(), DomainError>
where
    C: sea_orm::ConnectionTrait,
{
    if author_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<BookAuthorActiveModel> = author_ids
        .iter()
        .map(|author_id| BookAuthorActiveModel {
            book_id: Set(book_id.to_string()),
            author_id: Set(author_id.clone()),
        })
        .collect();

    BookAuthorEntity::insert_many(rows).exec(conn).await?;
    Ok(())
}

/// Admin changelist rows, ordered by creation time descending
pub async fn list_books_for_admin(
    db: &DatabaseConnection,
) -> Result<Vec<book::Model>, DomainError> {
    use sea_orm::QueryOrder;

    let models = BookEntity::find()
        .order_by_desc(book::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models)
}

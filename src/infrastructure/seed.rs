use crate::auth::hash_password;
use crate::models::{author, book, book_authors, publisher, user};
use sea_orm::*;
use uuid::Uuid;

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create admin user
    let admin_password = hash_password("admin").expect("hashing a static password cannot fail");

    let admin = user::ActiveModel {
        username: Set("admin".to_owned()),
        password_hash: Set(admin_password),
        role: Set("admin".to_owned()),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };

    // Ignore conflicts so re-seeding an existing database is harmless
    let _ = user::Entity::insert(admin)
        .on_conflict(
            sea_orm::sea_query::OnConflict::column(user::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await;

    // 2. Create a publisher
    let publisher_id = Uuid::new_v4().to_string();
    let ace = publisher::ActiveModel {
        id: Set(publisher_id.clone()),
        name: Set("Ace Books".to_owned()),
    };
    ace.insert(db).await?;

    // 3. Create authors
    let mut author_ids = Vec::new();
    for name in ["Frank Herbert", "Isaac Asimov", "J.R.R. Tolkien"] {
        let id = Uuid::new_v4().to_string();
        let row = author::ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_owned()),
        };
        row.insert(db).await?;
        author_ids.push(id);
    }

    // 4. Create a book linked to the first author
    let book_id = Uuid::new_v4().to_string();
    let dune = book::ActiveModel {
        id: Set(book_id.clone()),
        title: Set("Dune".to_owned()),
        price: Set(Some(1200)),
        publisher_id: Set(Some(publisher_id)),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
    };
    dune.insert(db).await?;

    let link = book_authors::ActiveModel {
        book_id: Set(book_id),
        author_id: Set(author_ids[0].clone()),
    };
    link.insert(db).await?;

    Ok(())
}

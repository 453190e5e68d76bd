pub mod author;
pub mod book;
pub mod book_authors;
pub mod publisher;
pub mod user;

pub use book::Book;

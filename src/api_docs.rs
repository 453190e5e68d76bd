use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::get_book,
        api::books::create_book,
        api::books::update_book,
        api::books::patch_book,
        api::books::delete_book,
        api::author::list_authors,
        api::author::create_author,
        api::author::get_author,
        api::author::delete_author,
        api::auth::login,
        api::auth::register,
        api::admin::book_changelist,
    ),
    tags(
        (name = "bookstore", description = "Bookstore catalog API")
    )
)]
pub struct ApiDoc;

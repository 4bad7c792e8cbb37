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
        api::books::delete_book,
        api::sessions::add_session,
        api::sessions::delete_session,
        api::stats::reading_stats,
    ),
    tags(
        (name = "readinglog", description = "Reading Log API")
    )
)]
pub struct ApiDoc;

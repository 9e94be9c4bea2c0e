use crate::routes;

/// GET / handler for the greeting fixture
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Fixed greeting", body = String)
    ),
    tag = "fixture"
)]
pub async fn greeting_handler() -> &'static str {
    "Hello World"
}

/// GET /goodbye handler for the greeting fixture
#[utoipa::path(
    get,
    path = routes::GOODBYE,
    responses(
        (status = 200, description = "Fixed farewell", body = String)
    ),
    tag = "fixture"
)]
pub async fn goodbye_handler() -> &'static str {
    "Goodbye World"
}

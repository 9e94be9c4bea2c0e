use crate::routes;

/// GET / handler for the hello fixture
///
/// Returns the fixed greeting the deployment test harness checks for.
/// The trailing "!" distinguishes this fixture from the greeting fixture.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Fixed greeting", body = String)
    ),
    tag = "fixture"
)]
pub async fn hello_handler() -> &'static str {
    "Hello World!"
}

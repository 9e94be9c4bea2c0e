use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation for the hello fixture
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello fixture API",
        version = "1.0.0",
        description = "Static hello-world fixture deployed by an end-to-end test harness"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::health::health_handler
    ),
    components(schemas(HealthResponse)),
    tags(
        (name = "fixture", description = "Fixed-response fixture routes"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct HelloApiDoc;

/// OpenAPI documentation for the greeting fixture
#[derive(OpenApi)]
#[openapi(
    info(
        title = "greeting fixture API",
        version = "1.0.0",
        description = "Static greeting fixture with a hello and a goodbye route"
    ),
    paths(
        handlers::greeting::greeting_handler,
        handlers::greeting::goodbye_handler,
        handlers::health::health_handler
    ),
    components(schemas(HealthResponse)),
    tags(
        (name = "fixture", description = "Fixed-response fixture routes"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct GreetingApiDoc;

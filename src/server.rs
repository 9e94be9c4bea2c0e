use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{GreetingApiDoc, HelloApiDoc};
use crate::config::Config;
use crate::handlers::{goodbye_handler, greeting_handler, health_handler, hello_handler};
use crate::routes;

/// Router for the hello fixture: a single fixed greeting on `/`
pub fn hello_app() -> Router {
    Router::new()
        .route(routes::ROOT, get(hello_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", HelloApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Router for the greeting fixture: fixed greeting on `/`, farewell on `/goodbye`
pub fn greeting_app() -> Router {
    Router::new()
        .route(routes::ROOT, get(greeting_handler))
        .route(routes::GOODBYE, get(goodbye_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", GreetingApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve the app until the process is stopped.
pub async fn serve(app: Router, config: &Config) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Example app listening at http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

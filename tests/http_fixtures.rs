use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use hello_fixtures::models::HealthResponse;
use hello_fixtures::server::{greeting_app, hello_app};
use tower::ServiceExt; // for `oneshot`

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn hello_app_root_returns_exact_greeting() {
    let response = hello_app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello World!");
}

#[tokio::test]
async fn hello_app_has_no_goodbye_route() {
    let response = hello_app().oneshot(get_request("/goodbye")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn greeting_app_root_returns_exact_greeting() {
    let response = greeting_app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello World");
}

#[tokio::test]
async fn greeting_app_goodbye_returns_exact_farewell() {
    let response = greeting_app()
        .oneshot(get_request("/goodbye"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Goodbye World");
}

#[tokio::test]
async fn both_fixtures_report_healthy() {
    for app in [hello_app(), greeting_app()] {
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "healthy");
    }
}

#[tokio::test]
async fn fixtures_serve_openapi_documents() {
    let response = hello_app()
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(doc["paths"].get("/").is_some());
    assert!(doc["paths"].get("/goodbye").is_none());

    let response = greeting_app()
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(doc["paths"].get("/goodbye").is_some());
}

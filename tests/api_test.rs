use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use catalog_store::api::create_app;
use catalog_store::config::ActorConfig;
use catalog_store::lifecycle::CatalogSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

#[tokio::test]
async fn crud_flow_over_http() {
    let system = CatalogSystem::new(&ActorConfig::default());
    let app = create_app(&system);

    let (status, body) = send(&app, Method::POST, "/categories", Some(json!({"categoryName": "Tools"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Category created");
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["active"], true);

    let (status, body) = send(&app, Method::POST, "/brands", Some(json!({"brandName": "Acme"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let brand_id = body["data"]["id"].clone();

    // numeric and string ids name the same record
    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "Hammer", "price": 9.99, "categoryId": 1, "brandId": brand_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["stock"], 0);
    assert_eq!(body["data"]["categoryId"], "1");

    let (status, body) = send(&app, Method::GET, "/products/category/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/products/brand/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Hammer");

    let (status, body) = send(&app, Method::DELETE, "/categories/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("dependent products"));

    let (status, body) = send(&app, Method::DELETE, "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");
    assert_eq!(body["data"]["name"], "Hammer");

    let (status, _) = send(&app, Method::DELETE, "/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn put_and_patch_messages_and_validation() {
    let system = CatalogSystem::new(&ActorConfig::default());
    let app = create_app(&system);

    send(&app, Method::POST, "/brands", Some(json!({"brandName": "Acme", "description": "old"}))).await;

    let (status, body) = send(&app, Method::PATCH, "/brands/1", Some(json!({"description": "new"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Brand partially updated");
    assert_eq!(body["data"]["brandName"], "Acme");
    assert_eq!(body["data"]["description"], "new");

    let (status, body) = send(&app, Method::PATCH, "/brands/1", Some(json!({"brandName": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::PUT, "/brands/1", Some(json!({"active": false}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/brands/1", Some(json!({"brandName": "Acme Corp"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Brand updated");
    assert_eq!(body["data"]["description"], "new");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn patch_refuses_null_for_required_fields() {
    let system = CatalogSystem::new(&ActorConfig::default());
    let app = create_app(&system);

    send(&app, Method::POST, "/categories", Some(json!({"categoryName": "Tools"}))).await;
    send(&app, Method::POST, "/brands", Some(json!({"brandName": "Acme", "description": "old"}))).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "Hammer", "price": 9.99, "categoryId": "1", "brandId": "1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::PATCH, "/brands/1", Some(json!({"brandName": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::PATCH, "/products/1", Some(json!({"categoryId": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/products/1", Some(json!({
        "name": "Hammer", "price": null, "categoryId": "1", "brandId": "1"
    })))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // nothing was changed by the refused requests
    let (_, body) = send(&app, Method::GET, "/products/1", None).await;
    assert_eq!(body["categoryId"], "1");
    assert_eq!(body["price"], 9.99);
    let (_, body) = send(&app, Method::GET, "/brands/1", None).await;
    assert_eq!(body["brandName"], "Acme");

    // null on an optional field still reads as "unchanged"
    let (status, body) = send(&app, Method::PATCH, "/brands/1", Some(json!({"description": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "old");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn error_statuses() {
    let system = CatalogSystem::new(&ActorConfig::default());
    let app = create_app(&system);

    let (status, body) = send(&app, Method::GET, "/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found: 42");

    let (status, _) = send(&app, Method::GET, "/users/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PATCH, "/movies/9", Some(json!({"year": 2000}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/users", Some(json!({"email": "a@x.com"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, Method::POST, "/users", Some(json!({"email": "a@x.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already in use: a@x.com");

    let (status, _) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({"name": "Hammer", "price": 9.99, "categoryId": "5", "brandId": "5"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // malformed body
    let request = Request::builder()
        .method(Method::POST)
        .uri("/brands")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn service_routes() {
    let system = CatalogSystem::new(&ActorConfig::default());
    let app = create_app(&system);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().unwrap().contains("catalog"));

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/products/{id}").is_some());

    let (status, body) = send(&app, Method::POST, "/movies", Some(json!({"title": "Heat", "year": 1995, "category": "Crime"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);

    drop(app);
    system.shutdown().await.unwrap();
}

//! Handler tests for the products domain
//!
//! These tests drive the domain router directly with `tower::oneshot`:
//! status codes, the `{data, message}` / `{status, message}` envelopes,
//! content-type headers, and the auth gate layered in front of the routes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{middleware, Router};
use axum_helpers::token_auth;
use chrono::NaiveDate;
use core_config::auth::AuthConfig;
use domain_products::{handlers, MemoryProductRepository, Product, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn seeded_product() -> Product {
    Product {
        id: 1,
        name: "Product 1".to_string(),
        quantity: 10,
        code_value: "code1".to_string(),
        is_published: true,
        expiration: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
        price: 100.0,
    }
}

fn app(repo: MemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

fn secured_app(repo: MemoryProductRepository, token: &str) -> Router {
    app(repo).layer(middleware::from_fn_with_state(
        AuthConfig::new(token),
        token_auth,
    ))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn content_type(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn list_returns_the_seeded_products() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);

    let response = app(repo)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        content_type(&response).as_deref(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "data": [{
                "id": 1,
                "name": "Product 1",
                "quantity": 10,
                "code_value": "code1",
                "is_published": true,
                "expiration": "2021-12-31",
                "price": 100.0
            }],
            "message": "products"
        })
    );
}

#[tokio::test]
async fn list_returns_an_empty_array_on_an_empty_store() {
    let response = app(MemoryProductRepository::new())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"data": [], "message": "products"})
    );
}

#[tokio::test]
async fn get_by_id_returns_the_product() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);

    let response = app(repo)
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        content_type(&response).as_deref(),
        Some("application/json; charset=utf-8")
    );

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "product");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["expiration"], "2021-12-31");
}

#[tokio::test]
async fn get_by_id_on_an_empty_store_is_not_found() {
    let response = app(MemoryProductRepository::new())
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response).as_deref(), Some("application/json"));
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Not Found", "message": "Product not found"})
    );
}

#[tokio::test]
async fn get_with_a_non_integer_id_is_a_bad_request() {
    let response = app(MemoryProductRepository::new())
        .oneshot(Request::get("/test1234").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response).as_deref(), Some("application/json"));
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Bad Request", "message": "Invalid id"})
    );
}

#[tokio::test]
async fn create_assigns_id_one_on_an_empty_store() {
    let response = app(MemoryProductRepository::new())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "Product 1",
                "quantity": 10,
                "code_value": "code1",
                "is_published": true,
                "expiration": "2020-02-02",
                "price": 100.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        content_type(&response).as_deref(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "data": {
                "id": 1,
                "name": "Product 1",
                "quantity": 10,
                "code_value": "code1",
                "is_published": true,
                "expiration": "2020-02-02",
                "price": 100.0
            },
            "message": "product created"
        })
    );
}

#[tokio::test]
async fn create_without_the_configured_token_is_unauthorized() {
    let response = secured_app(MemoryProductRepository::new(), "test_token")
        .oneshot(Request::post("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(content_type(&response).as_deref(), Some("application/json"));
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Unauthorized", "message": "Unauthorized"})
    );
}

#[tokio::test]
async fn create_with_the_configured_token_succeeds() {
    let repo = MemoryProductRepository::new();

    let mut request = json_request(
        "POST",
        "/",
        json!({
            "name": "Product 1",
            "quantity": 10,
            "code_value": "code1",
            "is_published": true,
            "expiration": "2020-02-02",
            "price": 100.0
        }),
    );
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, "test_token".parse().unwrap());

    let response = secured_app(repo, "test_token")
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn create_with_a_malformed_body_is_a_bad_request() {
    let response = app(MemoryProductRepository::new())
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Bad Request", "message": "Invalid request body"})
    );
}

#[tokio::test]
async fn create_with_a_bad_expiration_is_a_bad_request() {
    let response = app(MemoryProductRepository::new())
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "Product 1",
                "quantity": 10,
                "code_value": "code1",
                "is_published": true,
                "expiration": "02/02/2020",
                "price": 100.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Bad Request");
    assert_eq!(body["message"], "expiration must be a date in YYYY-MM-DD form");
}

#[tokio::test]
async fn create_with_a_duplicate_code_value_fails_and_leaves_the_store_unchanged() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);
    let app = app(repo);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "name": "Another product",
                "quantity": 1,
                "code_value": "code1",
                "is_published": false,
                "expiration": "2022-01-01",
                "price": 5.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "Bad Request");
    assert_eq!(body["message"], "code_value 'code1' is already in use");

    // The store still holds exactly the seeded product
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn put_replaces_every_field() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);

    let response = app(repo)
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({
                "name": "Renamed",
                "quantity": 2,
                "code_value": "code2",
                "is_published": false,
                "expiration": "2022-06-30",
                "price": 50.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "data": {
                "id": 1,
                "name": "Renamed",
                "quantity": 2,
                "code_value": "code2",
                "is_published": false,
                "expiration": "2022-06-30",
                "price": 50.0
            },
            "message": "product updated"
        })
    );
}

#[tokio::test]
async fn put_with_a_non_integer_id_is_a_bad_request() {
    let response = app(MemoryProductRepository::new())
        .oneshot(json_request("PUT", "/test1234", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Bad Request", "message": "Invalid id"})
    );
}

#[tokio::test]
async fn put_on_a_missing_id_is_not_found() {
    let response = app(MemoryProductRepository::new())
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({
                "name": "Product 1",
                "quantity": 10,
                "code_value": "code1",
                "is_published": true,
                "expiration": "2021-12-31",
                "price": 100.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Not Found", "message": "Product not found"})
    );
}

#[tokio::test]
async fn patch_merges_only_the_supplied_fields() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);

    let response = app(repo)
        .oneshot(json_request("PATCH", "/1", json!({"quantity": 5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "data": {
                "id": 1,
                "name": "Product 1",
                "quantity": 5,
                "code_value": "code1",
                "is_published": true,
                "expiration": "2021-12-31",
                "price": 100.0
            },
            "message": "product updated"
        })
    );
}

#[tokio::test]
async fn patch_on_a_missing_id_is_not_found() {
    let response = app(MemoryProductRepository::new())
        .oneshot(json_request("PATCH", "/1", json!({"name": "Product 1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Not Found", "message": "Product not found"})
    );
}

#[tokio::test]
async fn patch_to_a_taken_code_value_is_rejected() {
    let mut other = seeded_product();
    other.id = 2;
    other.code_value = "code2".to_string();
    let repo = MemoryProductRepository::with_products([seeded_product(), other]);

    let response = app(repo)
        .oneshot(json_request("PATCH", "/2", json!({"code_value": "code1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "code_value 'code1' is already in use");
}

#[tokio::test]
async fn delete_returns_no_content_with_an_empty_body() {
    let repo = MemoryProductRepository::with_products([seeded_product()]);
    let app = app(repo);

    let response = app
        .clone()
        .oneshot(Request::delete("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(content_type(&response).is_none());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    // The entry is gone
    let response = app
        .oneshot(Request::get("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_a_non_integer_id_is_a_bad_request() {
    let response = app(MemoryProductRepository::new())
        .oneshot(Request::delete("/test1234").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Bad Request", "message": "Invalid id"})
    );
}

#[tokio::test]
async fn delete_on_a_missing_id_is_not_found() {
    let response = app(MemoryProductRepository::new())
        .oneshot(Request::delete("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Not Found", "message": "Product not found"})
    );
}

#[tokio::test]
async fn delete_without_the_configured_token_is_unauthorized() {
    let response = secured_app(MemoryProductRepository::new(), "test_token")
        .oneshot(Request::delete("/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "Unauthorized", "message": "Unauthorized"})
    );
}

//! Handler tests for the products domain
//!
//! These drive the full router through `oneshot`, verifying:
//! - Method dispatch, including the JSON 405 body
//! - Positional identifier extraction and its failure modes
//! - Content-type enforcement and body decoding
//! - The swap-remove deletion contract

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domain_products::{handlers, models::seed_catalog, MemoryProductStore, Product, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app_with(products: Vec<Product>) -> Router {
    let store = MemoryProductStore::new(products);
    handlers::router(ProductService::new(store))
}

fn seeded_app() -> Router {
    app_with(seed_catalog())
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// Helper to parse a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list_all(app: &Router) -> Vec<Product> {
    let response = app.clone().oneshot(request("GET", "/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn get_collection_returns_the_seed_in_order() {
    let app = seeded_app();

    let response = app.oneshot(request("GET", "/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, seed_catalog());
}

#[tokio::test]
async fn get_collection_with_trailing_slash_also_lists() {
    let app = seeded_app();

    let response = app.oneshot(request("GET", "/products/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 5);
}

#[tokio::test]
async fn get_by_id_returns_the_product_at_that_position() {
    let app = seeded_app();

    let response = app.oneshot(request("GET", "/products/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, Product::new("Short", 10.0));
}

#[tokio::test]
async fn get_with_non_numeric_id_falls_back_to_the_full_list() {
    let app = seeded_app();

    let response = app.oneshot(request("GET", "/products/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 5);
}

#[tokio::test]
async fn get_out_of_range_is_404() {
    let app = seeded_app();

    for uri in ["/products/5", "/products/-1"] {
        let response = app.clone().oneshot(request("GET", uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "doesn't exist"}));
    }
}

#[tokio::test]
async fn post_appends_and_returns_201() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products",
            json!({"name": "Keyboard", "price": 55.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Product = json_body(response.into_body()).await;
    assert_eq!(created, Product::new("Keyboard", 55.0));

    let products = list_all(&app).await;
    assert_eq!(products.len(), 6);
    assert_eq!(products[5], Product::new("Keyboard", 55.0));
}

#[tokio::test]
async fn post_to_an_id_path_ignores_the_id() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products/0",
            json!({"name": "Mat", "price": 5.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let products = list_all(&app).await;
    assert_eq!(products[5], Product::new("Mat", 5.0));
    assert_eq!(products[0], Product::new("Shoes", 25.0));
}

#[tokio::test]
async fn post_with_wrong_content_type_is_415_and_leaves_the_catalog_alone() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"name":"Keyboard","price":55.0}"#))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "content type 'application/json required");

    assert_eq!(list_all(&app).await.len(), 5);
}

#[tokio::test]
async fn post_with_content_type_parameters_is_rejected() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json; charset=utf-8")
        .body(Body::from(r#"{"name":"Keyboard","price":55.0}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn post_with_malformed_body_is_400() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(!body["error"].as_str().unwrap().is_empty());

    assert_eq!(list_all(&app).await.len(), 5);
}

#[tokio::test]
async fn put_with_name_only_keeps_the_price() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/products/0", json!({"name": "Boots"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, Product::new("Boots", 25.0));

    assert_eq!(list_all(&app).await[0], Product::new("Boots", 25.0));
}

#[tokio::test]
async fn put_with_price_only_keeps_the_name() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request("PUT", "/products/0", json!({"price": 5.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, Product::new("Shoes", 5.0));
}

#[tokio::test]
async fn put_with_zero_price_leaves_the_price_unchanged() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/products/1",
            json!({"name": "Trunks", "price": 0.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, Product::new("Trunks", 10.0));
}

#[tokio::test]
async fn patch_behaves_like_put() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request("PATCH", "/products/2", json!({"price": 42.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, Product::new("Cam", 42.0));
}

#[tokio::test]
async fn put_without_id_is_404_not_found() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request("PUT", "/products", json!({"name": "Boots"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn put_with_non_numeric_id_is_404_not_id() {
    let app = seeded_app();

    for uri in ["/products/", "/products/abc"] {
        let response = app
            .clone()
            .oneshot(json_request("PUT", uri, json!({"name": "Boots"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "not id"}));
    }
}

#[tokio::test]
async fn put_checks_the_id_before_the_content_type() {
    let app = seeded_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/products/abc")
        .header("content-type", "text/plain")
        .body(Body::from("whatever"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // 404 for the identifier, not 415 for the content type.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_out_of_range_is_404_doesnt_exist() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request("PUT", "/products/9", json!({"name": "Boots"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "doesn't exist"}));
}

#[tokio::test]
async fn put_with_wrong_content_type_is_415() {
    let app = seeded_app();

    let request = Request::builder()
        .method("PUT")
        .uri("/products/0")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"name":"Boots"}"#))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(list_all(&app).await[0], Product::new("Shoes", 25.0));
}

#[tokio::test]
async fn delete_swaps_the_last_product_into_the_vacated_position() {
    // The canonical scenario: deleting the middle of [Shoes, Short, Cam]
    // moves Cam into position 1.
    let app = app_with(vec![
        Product::new("Shoes", 25.0),
        Product::new("Short", 10.0),
        Product::new("Cam", 40.0),
    ]);

    let response = app
        .clone()
        .oneshot(request("DELETE", "/products/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let products = list_all(&app).await;
    assert_eq!(
        products,
        vec![Product::new("Shoes", 25.0), Product::new("Cam", 40.0)]
    );

    let response = app.oneshot(request("GET", "/products/1")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, Product::new("Cam", 40.0));
}

#[tokio::test]
async fn delete_of_the_last_position_only_shrinks() {
    let app = app_with(vec![Product::new("Shoes", 25.0), Product::new("Short", 10.0)]);

    let response = app
        .clone()
        .oneshot(request("DELETE", "/products/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(list_all(&app).await, vec![Product::new("Shoes", 25.0)]);
}

#[tokio::test]
async fn delete_with_bad_or_missing_id_is_404_doesnt_exist() {
    let app = seeded_app();

    for uri in ["/products", "/products/", "/products/abc", "/products/9"] {
        let response = app.clone().oneshot(request("DELETE", uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "doesn't exist"}), "uri: {uri}");
    }

    assert_eq!(list_all(&app).await.len(), 5);
}

#[tokio::test]
async fn deep_paths_behave_like_failed_identifier_extraction() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(request("GET", "/products/1/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 5);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/products/1/2", json!({"name": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "not found"}));

    let response = app
        .oneshot(request("DELETE", "/products/1/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"error": "doesn't exist"}));
}

#[tokio::test]
async fn unsupported_methods_get_the_json_405_body() {
    let app = seeded_app();

    for uri in ["/products", "/products/", "/products/1"] {
        let response = app.clone().oneshot(request("OPTIONS", uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "uri: {uri}");
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "invalid method"}), "uri: {uri}");
    }
}

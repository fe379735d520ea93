//! HTTP handlers for the products API

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use axum_helpers::{errors::ErrorBody, RawBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::service::ProductService;
use crate::store::ProductStore;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ErrorBody)),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints.
///
/// `/products` and `/products/` both address the collection; `/products/{id}`
/// addresses a single position. Each route answers unsupported methods with
/// the JSON 405 body instead of a bare status, so every route carries an
/// explicit fallback.
pub fn router<S: ProductStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/products",
            collection_routes::<S>()
                .put(update_without_id)
                .patch(update_without_id),
        )
        .route(
            "/products/",
            collection_routes::<S>()
                .put(update_with_blank_id)
                .patch(update_with_blank_id),
        )
        .route(
            "/products/{id}",
            get(get_product::<S>)
                .post(create_product::<S>)
                .put(update_product::<S>)
                .patch(update_product::<S>)
                .delete(delete_product::<S>)
                .fallback(invalid_method),
        )
        // Deeper paths carry no extractable identifier, so every verb sees
        // its failed-extraction behavior: GET lists, POST still creates.
        .route(
            "/products/{id}/{*rest}",
            get(list_products::<S>)
                .post(create_product::<S>)
                .put(update_without_id)
                .patch(update_without_id)
                .delete(delete_without_id)
                .fallback(invalid_method),
        )
        .with_state(shared_service)
}

/// Methods shared by `/products` and `/products/`: list, create, and the
/// identifier-less DELETE rejection.
fn collection_routes<S: ProductStore + 'static>() -> MethodRouter<Arc<ProductService<S>>> {
    get(list_products::<S>)
        .post(create_product::<S>)
        .delete(delete_without_id)
        .fallback(invalid_method)
}

/// Parse the identifier path segment as a base-10 integer.
fn parse_index(segment: &str) -> ProductResult<i64> {
    segment
        .parse::<i64>()
        .map_err(|_| ProductError::IdNotNumeric)
}

/// Decode a JSON product body.
///
/// The content type must equal `application/json` exactly; parameter
/// suffixes such as `; charset=utf-8` are rejected. Only then is the payload
/// parsed.
fn decode_product(headers: &HeaderMap, body: &[u8]) -> ProductResult<Product> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type != "application/json" {
        return Err(ProductError::UnsupportedMediaType);
    }

    serde_json::from_slice(body).map_err(|e| ProductError::MalformedBody(e.to_string()))
}

/// List the whole catalog
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Current catalog in positional order", body = Vec<Product>)
    )
)]
async fn list_products<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get the product at a position
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Zero-based position in the catalog")
    ),
    responses(
        (status = 200, description = "Product at the position; a non-numeric id yields the full catalog instead", body = Product),
        (status = 404, description = "Position out of range", body = ErrorBody)
    )
)]
async fn get_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    Path(raw_id): Path<String>,
) -> ProductResult<Response> {
    // A malformed identifier is indistinguishable from an absent one here:
    // both answer with the full list.
    match parse_index(&raw_id) {
        Ok(id) => Ok(Json(service.get_product(id).await?).into_response()),
        Err(_) => Ok(Json(service.list_products().await?).into_response()),
    }
}

/// Append a product to the catalog
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product appended at the last position", body = Product),
        (status = 400, description = "Body is not a product-shaped JSON object", body = ErrorBody),
        (status = 415, description = "Content type is not exactly application/json", body = ErrorBody),
        (status = 500, description = "Request body could not be read", body = ErrorBody)
    )
)]
async fn create_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> ProductResult<(StatusCode, Json<Product>)> {
    let product = decode_product(&headers, &body)?;
    let created = service.create_product(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update the product at a position
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Zero-based position in the catalog")
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Product after the merge; empty name and zero price leave fields unchanged", body = Product),
        (status = 404, description = "Bad or out-of-range identifier", body = ErrorBody),
        (status = 400, description = "Body is not a product-shaped JSON object", body = ErrorBody),
        (status = 415, description = "Content type is not exactly application/json", body = ErrorBody)
    )
)]
async fn update_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    RawBody(body): RawBody,
) -> ProductResult<Json<Product>> {
    // Identifier problems outrank body problems, so the id is checked first.
    let id = parse_index(&raw_id)?;
    let update = decode_product(&headers, &body)?;
    let updated = service.update_product(id, update).await?;
    Ok(Json(updated))
}

/// Remove the product at a position
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Zero-based position in the catalog")
    ),
    responses(
        (status = 204, description = "Product removed; the formerly-last product now holds this position"),
        (status = 404, description = "Bad or out-of-range identifier", body = ErrorBody)
    )
)]
async fn delete_product<S: ProductStore>(
    State(service): State<Arc<ProductService<S>>>,
    Path(raw_id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    let id = parse_index(&raw_id).map_err(|_| ProductError::DoesNotExist)?;
    service.delete_product(id).await?;

    // 204 advertises the JSON content type even though the body stays empty.
    Ok((
        StatusCode::NO_CONTENT,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

/// PUT/PATCH on the bare collection path carries no identifier segment.
async fn update_without_id() -> ProductError {
    ProductError::IdMissing
}

/// The trailing-slash form has an empty, unparsable identifier segment.
async fn update_with_blank_id() -> ProductError {
    ProductError::IdNotNumeric
}

/// DELETE reports every identifier failure the same way.
async fn delete_without_id() -> ProductError {
    ProductError::DoesNotExist
}

/// Any unsupported method gets the JSON 405 body.
async fn invalid_method() -> ProductError {
    ProductError::InvalidMethod
}

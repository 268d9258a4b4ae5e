//! Route handlers.
//!
//! Handlers only ever see input that already passed validation.

use axum::Json;

use crate::models::{HealthStatus, Item, ItemQuery, Message};
use crate::validation::{ValidatedBody, ValidatedParams, ValidationError};

/// Root endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Greeting", body = Message)
    )
)]
pub async fn root() -> Json<Message> {
    Json(Message::hello())
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    )
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// Read an item by ID.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ("q" = Option<String>, Query, description = "Optional search text")
    ),
    responses(
        (status = 200, description = "Item identifier and query echoed back", body = ItemQuery),
        (status = 422, description = "Validation Error", body = ValidationError)
    )
)]
pub async fn read_item(ValidatedParams(query): ValidatedParams<ItemQuery>) -> Json<ItemQuery> {
    tracing::debug!(item_id = query.item_id, q = ?query.q, "Reading item");
    Json(query)
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = Item,
    responses(
        (status = 200, description = "The validated item", body = Item),
        (status = 422, description = "Validation Error", body = ValidationError)
    )
)]
pub async fn create_item(ValidatedBody(item): ValidatedBody<Item>) -> Json<Item> {
    tracing::debug!(name = %item.name, price = item.price, "Creating item");
    Json(item)
}

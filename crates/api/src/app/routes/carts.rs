use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/add", post(add_item_to_cart))
        .route("/remove", delete(remove_item_from_cart))
        .route("/update", put(update_item_quantity))
        .route("/empty", post(empty_cart))
        .route("/items", get(get_cart_items))
        .route("/total", get(get_total))
}

/// Unwrap and validate a cart line body, or produce the 400 response.
fn cart_line(
    body: Result<Json<dto::CartLineRequest>, JsonRejection>,
) -> Result<(String, u32), axum::response::Response> {
    let Json(body) = body.map_err(errors::rejection_to_response)?;
    body.validate().map_err(errors::validation_error_to_response)
}

pub async fn add_item_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CartLineRequest>, JsonRejection>,
) -> axum::response::Response {
    let (sku, quantity) = match cart_line(body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.cart().add_item_to_cart(&sku, quantity) {
        Ok(()) => (StatusCode::OK, Json(dto::message("Item added to cart"))).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn remove_item_from_cart(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::RemoveFromCartQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::rejection_to_response(e),
    };

    match services.cart().remove_item_from_cart(&query.sku) {
        Ok(()) => (StatusCode::OK, Json(dto::message("Item removed from cart"))).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn update_item_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CartLineRequest>, JsonRejection>,
) -> axum::response::Response {
    let (sku, quantity) = match cart_line(body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.cart().update_item_quantity(&sku, quantity) {
        Ok(()) => (StatusCode::OK, Json(dto::message("Item quantity updated"))).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn empty_cart(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.cart().empty_cart() {
        Ok(()) => (StatusCode::OK, Json(dto::message("Cart emptied"))).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn get_cart_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.cart().get_cart_items() {
        Ok(lines) => (StatusCode::OK, Json(lines)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn get_total(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::TotalQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::rejection_to_response(e),
    };

    match services.cart().calculate_total(query.discount_code.as_deref()) {
        Ok(total) => (StatusCode::OK, Json(total)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

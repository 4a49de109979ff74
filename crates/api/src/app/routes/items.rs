use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_item))
        .route(
            "/:sku",
            get(get_item)
                .post(add_item_alias)
                .put(update_item)
                .delete(delete_item),
        )
}

/// Path segment accepted as a POST alias of `/items`.
const ADD_ALIAS: &str = "add";

/// `POST /items/add`. Shares the `/:sku` route so an item whose SKU is
/// `add` stays reachable through GET/PUT/DELETE.
pub async fn add_item_alias(
    services: Extension<Arc<AppServices>>,
    Path(segment): Path<String>,
    body: Result<Json<dto::ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    if segment != ADD_ALIAS {
        return errors::json_error(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            format!("POST is not supported on /items/{segment}"),
        );
    }
    add_item(services, body).await
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::rejection_to_response(e),
    };
    let item = match body.into_item() {
        Ok(i) => i,
        Err(e) => return errors::validation_error_to_response(e),
    };

    if let Err(e) = services.catalog().add_item(item) {
        return errors::catalog_error_to_response(e);
    }

    (StatusCode::CREATED, Json(dto::message("Item added successfully"))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match services.catalog().get_item(&sku) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
    body: Result<Json<dto::ItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::rejection_to_response(e),
    };
    let item = match body.into_item() {
        Ok(i) => i,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match services.catalog().update_item(&sku, item) {
        Ok(()) => {
            (StatusCode::OK, Json(dto::message("Item updated successfully"))).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match services.catalog().delete_item(&sku) {
        Ok(()) => {
            (StatusCode::OK, Json(dto::message("Item deleted successfully"))).into_response()
        }
        Err(e) => errors::catalog_error_to_response(e),
    }
}

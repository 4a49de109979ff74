use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopcart_cart::CartError;
use shopcart_catalog::CatalogError;
use shopcart_core::ValidationError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    let (status, code) = catalog_status(&err);
    tracing::warn!(error = %err, code, "catalog operation rejected");
    json_error(status, code, err.to_string())
}

pub fn cart_error_to_response(err: CartError) -> axum::response::Response {
    let (status, code) = match &err {
        CartError::Catalog(e) => catalog_status(e),
        CartError::ItemAlreadyInCart { .. } => (StatusCode::BAD_REQUEST, "item_already_in_cart"),
        CartError::ItemNotFoundInCart { .. } => (StatusCode::NOT_FOUND, "item_not_found_in_cart"),
        CartError::CartAlreadyEmpty => (StatusCode::BAD_REQUEST, "cart_already_empty"),
        CartError::InvalidDiscountCode { .. } => (StatusCode::BAD_REQUEST, "invalid_discount_code"),
    };
    tracing::warn!(error = %err, code, "cart operation rejected");
    json_error(status, code, err.to_string())
}

pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    tracing::warn!(error = %err, "request validation failed");
    json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
}

/// Malformed bodies / query strings rejected by an axum extractor.
pub fn rejection_to_response(rejection: impl std::fmt::Display) -> axum::response::Response {
    let message = rejection.to_string();
    tracing::warn!(error = %message, "request rejected by extractor");
    json_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

fn catalog_status(err: &CatalogError) -> (StatusCode, &'static str) {
    match err {
        CatalogError::ItemAlreadyExists { .. } => (StatusCode::BAD_REQUEST, "item_already_exists"),
        CatalogError::ItemNotFound { .. } => (StatusCode::NOT_FOUND, "item_not_found"),
        CatalogError::ItemSkuMismatch { .. } => (StatusCode::BAD_REQUEST, "item_sku_mismatch"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

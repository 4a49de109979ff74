use axum::Router;

pub mod carts;
pub mod items;
pub mod system;

/// Router for all catalog and cart endpoints (mounted under `/api/v1`).
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/carts", carts::router())
}

use axum::Router;

pub mod system;
pub mod wishlist;

/// Router for all wishlist endpoints.
pub fn router() -> Router {
    Router::new().nest("/wishlist", wishlist::router())
}

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use wishlist_core::ItemId;
use wishlist_infra::WishlistService;
use wishlist_items::ListQuery;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/summary", get(summary))
        .route("/items", post(create_item))
        .route("/items/:id", patch(update_item).delete(delete_item))
        .route("/export", post(export_csv))
}

pub async fn list_items(
    Extension(services): Extension<Arc<WishlistService>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    (StatusCode::OK, Json(services.list(&query))).into_response()
}

/// `null` body when the wishlist is empty.
pub async fn summary(
    Extension(services): Extension<Arc<WishlistService>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.summary())).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<WishlistService>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services.create(body.into()) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<WishlistService>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::wishlist_error_to_response(e),
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.update(&id, body.into()) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<WishlistService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::wishlist_error_to_response(e),
    };

    match services.delete(&id) {
        Ok(id) => (StatusCode::OK, Json(dto::DeletedResponse { id })).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

/// Writes to disk; runs on the blocking pool and is awaited without retry.
pub async fn export_csv(
    Extension(services): Extension<Arc<WishlistService>>,
) -> axum::response::Response {
    let result = match tokio::task::spawn_blocking(move || services.export_csv()).await {
        Ok(r) => r,
        Err(e) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "export_failed",
                format!("export task failed: {e}"),
            );
        }
    };

    match result {
        Ok(location) => (StatusCode::OK, Json(dto::ExportResponse { location })).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

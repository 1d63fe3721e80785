use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use wishlist_core::WishlistError;

pub fn wishlist_error_to_response(err: WishlistError) -> axum::response::Response {
    match err {
        WishlistError::InvalidArgument(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg)
        }
        // An id that does not parse can never be in the store.
        WishlistError::NotFound(_) | WishlistError::InvalidId(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
        }
        e @ WishlistError::ExportFailed { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_failed", e.to_string())
        }
        WishlistError::Internal(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            "internal error",
        ),
    }
}

/// Malformed query strings keep axum's status but use the JSON error body.
pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_argument", rejection.body_text())
}

/// Malformed or mistyped bodies (415, 400, 422) keep axum's status but use
/// the JSON error body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_argument", rejection.body_text())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_error_kind() {
        let cases = [
            (WishlistError::invalid_argument("bad"), StatusCode::BAD_REQUEST),
            (WishlistError::not_found("x"), StatusCode::NOT_FOUND),
            (WishlistError::invalid_id("x"), StatusCode::NOT_FOUND),
            (
                WishlistError::export_failed("out", std::io::Error::other("disk")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (WishlistError::internal("dup"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(wishlist_error_to_response(err).status(), status);
        }
    }
}

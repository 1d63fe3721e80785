//! Error model shared by every wishlist operation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the wishlist crates.
pub type WishlistResult<T> = Result<T, WishlistError>;

/// Closed set of failures an operation can report.
///
/// Validation and not-found failures are client-facing. Export failures come
/// from the environment (disk, permissions) and carry the underlying cause;
/// internal failures are never the caller's fault.
/// Mapping onto transport status codes happens at the API boundary.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// Input failed validation (e.g. non-positive price).
    #[error("{0}")]
    InvalidArgument(String),

    /// No item with the given id exists in the store.
    #[error("item not found: {0}")]
    NotFound(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Writing the CSV export failed.
    #[error("failed to generate CSV at {}: {source}", path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A broken internal invariant, such as a generated id that is already taken.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WishlistError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn export_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ExportFailed {
            path: path.into(),
            source,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for failures the caller can fix by changing its input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::ExportFailed { .. } | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_argument_displays_bare_message() {
        let err = WishlistError::invalid_argument("price must be positive");
        assert_eq!(err.to_string(), "price must be positive");
        assert!(err.is_client_error());
    }

    #[test]
    fn export_failed_keeps_io_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = WishlistError::export_failed("exports/wishlist.csv", io);

        assert!(!err.is_client_error());
        assert!(err.to_string().contains("exports/wishlist.csv"));
        assert!(err.to_string().contains("read-only"));
        assert!(err.source().is_some());
    }

    #[test]
    fn internal_is_not_a_client_error() {
        let err = WishlistError::internal("item id 1 already exists");
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "internal error: item id 1 already exists");
    }
}

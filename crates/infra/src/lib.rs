//! Infrastructure layer: item storage, CSV export, and the service that
//! composes them into the wishlist operations.

pub mod export;
pub mod service;
pub mod store;

pub use export::{CsvExporter, EXPORT_FILE_NAME};
pub use service::WishlistService;
pub use store::{InMemoryItemStore, ItemStore};

//! Wishlist domain module.
//!
//! This crate contains the business rules for wishlist items, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod csv;
pub mod item;
pub mod query;
pub mod summary;

pub use csv::{CSV_HEADER, render_csv};
pub use item::{Item, ItemPatch, NewItem};
pub use query::{DEFAULT_LIMIT, DEFAULT_PAGE, ListQuery, SortOrder};
pub use summary::Summary;

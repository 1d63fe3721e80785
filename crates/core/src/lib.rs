//! `wishlist-core`: shared building blocks for the wishlist crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod provider;

pub use entity::Entity;
pub use error::{WishlistError, WishlistResult};
pub use id::ItemId;
pub use provider::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidV7Ids};

//! Item storage abstraction.
//!
//! The store is the single source of truth for items. Every method is atomic
//! with respect to other calls on the same store.

mod in_memory;

pub use in_memory::InMemoryItemStore;

use std::sync::Arc;

use wishlist_core::{ItemId, WishlistResult};
use wishlist_items::Item;

pub trait ItemStore: Send + Sync {
    /// Copy of all items in insertion order.
    fn snapshot(&self) -> Vec<Item>;

    fn get(&self, id: &ItemId) -> Option<Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item`. Fails if an item with the same id is already stored.
    fn insert(&self, item: Item) -> WishlistResult<()>;

    /// Replace the item with `id` by `change(current)`, keeping its position.
    ///
    /// `change` runs under the store's write lock; if it fails nothing is
    /// written. Fails with `NotFound` before calling `change` if `id` is unknown.
    fn replace(
        &self,
        id: &ItemId,
        change: &dyn Fn(&Item) -> WishlistResult<Item>,
    ) -> WishlistResult<Item>;

    /// Remove and return the item with `id`.
    fn remove(&self, id: &ItemId) -> WishlistResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn snapshot(&self) -> Vec<Item> {
        (**self).snapshot()
    }

    fn get(&self, id: &ItemId) -> Option<Item> {
        (**self).get(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn insert(&self, item: Item) -> WishlistResult<()> {
        (**self).insert(item)
    }

    fn replace(
        &self,
        id: &ItemId,
        change: &dyn Fn(&Item) -> WishlistResult<Item>,
    ) -> WishlistResult<Item> {
        (**self).replace(id, change)
    }

    fn remove(&self, id: &ItemId) -> WishlistResult<Item> {
        (**self).remove(id)
    }
}

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use wishlist_core::{Entity, ItemId, WishlistError, WishlistResult};
use wishlist_items::Item;

use super::ItemStore;

/// Process-local item store. Contents live only as long as the process.
///
/// A single `RwLock` serializes all writes; readers get copies.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    // A panic while holding the lock cannot leave a half-applied change:
    // every write below is a single push/assign/remove.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(items: &[Item], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

impl ItemStore for InMemoryItemStore {
    fn snapshot(&self) -> Vec<Item> {
        self.read().clone()
    }

    fn get(&self, id: &ItemId) -> Option<Item> {
        let items = self.read();
        position(&items, id).map(|idx| items[idx].clone())
    }

    fn len(&self) -> usize {
        self.read().len()
    }

    fn insert(&self, item: Item) -> WishlistResult<()> {
        let mut items = self.write();
        if position(&items, item.id()).is_some() {
            return Err(WishlistError::internal(format!(
                "item id {} already exists",
                item.id()
            )));
        }
        items.push(item);
        Ok(())
    }

    fn replace(
        &self,
        id: &ItemId,
        change: &dyn Fn(&Item) -> WishlistResult<Item>,
    ) -> WishlistResult<Item> {
        let mut items = self.write();
        let idx = position(&items, id).ok_or_else(|| WishlistError::not_found(id))?;

        let next = change(&items[idx])?;
        if next.id() != id {
            return Err(WishlistError::internal("item id cannot change"));
        }
        items[idx] = next.clone();
        Ok(next)
    }

    fn remove(&self, id: &ItemId) -> WishlistResult<Item> {
        let mut items = self.write();
        let idx = position(&items, id).ok_or_else(|| WishlistError::not_found(id))?;
        Ok(items.remove(idx))
    }
}

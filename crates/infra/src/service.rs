//! Wishlist operations (application-level orchestration).
//!
//! `WishlistService` composes an `ItemStore`, a `CsvExporter` and the injected
//! clock/id providers into the six operations the transport exposes:
//!
//! ```text
//! list(query)        snapshot -> filter -> sort -> paginate
//! summary()          snapshot -> Summary::of
//! create(input)      validate -> stamp id + time -> append
//! update(id, patch)  lookup -> validate -> merge in place
//! delete(id)         lookup -> remove
//! export_csv()       snapshot -> render -> atomic write
//! ```
//!
//! Every failure leaves the store unchanged.

use std::sync::Arc;

use wishlist_core::{
    Clock, IdGenerator, ItemId, SystemClock, UuidV7Ids, WishlistError, WishlistResult,
};
use wishlist_items::{DEFAULT_LIMIT, Item, ItemPatch, ListQuery, NewItem, Summary, render_csv};

use crate::export::CsvExporter;
use crate::store::ItemStore;

pub struct WishlistService {
    store: Arc<dyn ItemStore>,
    exporter: CsvExporter,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    default_limit: i64,
}

impl WishlistService {
    /// Service over `store`, exporting into `exporter`, using wall-clock time
    /// and UUIDv7 ids.
    pub fn new(store: Arc<dyn ItemStore>, exporter: CsvExporter) -> Self {
        Self {
            store,
            exporter,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidV7Ids),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Page size used when a `list` request carries no `limit`.
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }

    pub fn list(&self, query: &ListQuery) -> Vec<Item> {
        query.apply(self.store.snapshot(), self.default_limit)
    }

    pub fn summary(&self) -> Option<Summary> {
        Summary::of(&self.store.snapshot())
    }

    pub fn get(&self, id: &ItemId) -> Option<Item> {
        self.store.get(id)
    }

    pub fn create(&self, input: NewItem) -> WishlistResult<Item> {
        let item = Item::create(input, self.ids.next_id(), self.clock.now())
            .inspect_err(|e| tracing::warn!(error = %e, "rejected new item"))?;

        self.store.insert(item.clone()).inspect_err(
            |e| tracing::error!(item_id = %item.id_typed(), error = %e, "failed to store new item"),
        )?;
        tracing::info!(item_id = %item.id_typed(), name = item.name(), "item created");
        Ok(item)
    }

    /// Existence is checked before the patch is validated, so an unknown id
    /// reports `NotFound` even when the patch is also invalid.
    pub fn update(&self, id: &ItemId, patch: ItemPatch) -> WishlistResult<Item> {
        let updated = self
            .store
            .replace(id, &|current| current.patched(&patch))
            .inspect_err(|e| tracing::warn!(item_id = %id, error = %e, "update rejected"))?;

        tracing::info!(item_id = %id, "item updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &ItemId) -> WishlistResult<ItemId> {
        let removed = self
            .store
            .remove(id)
            .inspect_err(|e| tracing::warn!(item_id = %id, error = %e, "delete rejected"))?;

        tracing::info!(item_id = %id, "item deleted");
        Ok(removed.id_typed())
    }

    /// Write the whole store (unfiltered, in store order) as CSV and return a
    /// human-readable location. A failed write is reported, never retried.
    pub fn export_csv(&self) -> WishlistResult<String> {
        let items = self.store.snapshot();
        let csv = render_csv(&items);

        match self.exporter.write(&csv) {
            Ok(path) => {
                tracing::info!(rows = items.len(), path = %path.display(), "csv exported");
                Ok(format!("CSV file generated at: {}", path.display()))
            }
            Err(e) => {
                if let WishlistError::ExportFailed { path, source } = &e {
                    tracing::error!(path = %path.display(), error = %source, "csv export failed");
                }
                Err(e)
            }
        }
    }
}

impl core::fmt::Debug for WishlistService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WishlistService")
            .field("items", &self.store.len())
            .field("exporter", &self.exporter)
            .field("default_limit", &self.default_limit)
            .finish()
    }
}

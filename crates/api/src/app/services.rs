use std::sync::Arc;

use wishlist_infra::{CsvExporter, InMemoryItemStore, WishlistService};

use crate::config::ApiConfig;

/// Wire the in-memory store and exporter. The store starts empty on every run.
pub fn build_services(config: &ApiConfig) -> WishlistService {
    let store = Arc::new(InMemoryItemStore::new());
    let exporter = CsvExporter::new(config.export_dir.clone());

    tracing::info!(
        export_path = %exporter.target_path().display(),
        default_page_size = config.default_page_size,
        "wishlist service ready"
    );

    WishlistService::new(store, exporter).with_default_limit(config.default_page_size)
}

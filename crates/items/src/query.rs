//! Read-side pipeline: filter by name, sort by price, paginate.
//!
//! The stages always run in that order over a snapshot of the store, so the
//! caller can never observe or cause mutation through the returned page.

use serde::{Deserialize, Serialize};

use crate::item::Item;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Price ordering requested by the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Parameters of a `list` request. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub filter_name: Option<String>,
    #[serde(default)]
    pub sort_by_price: Option<SortOrder>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Run filter, sort and paginate over `items`.
    ///
    /// `default_limit` is used when the query carries no `limit`.
    pub fn apply(&self, items: Vec<Item>, default_limit: i64) -> Vec<Item> {
        let mut items = match self.filter_name.as_deref() {
            Some(term) => filter_by_name(items, term),
            None => items,
        };
        if let Some(order) = self.sort_by_price {
            sort_by_price(&mut items, order);
        }
        paginate(
            items,
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(default_limit),
        )
    }
}

/// Keep items whose name contains `term`, ignoring case.
pub fn filter_by_name(items: Vec<Item>, term: &str) -> Vec<Item> {
    if term.is_empty() {
        return items;
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by price; equal prices keep their relative order in both directions.
pub fn sort_by_price(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::Asc => items.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortOrder::Desc => items.sort_by(|a, b| b.price().total_cmp(&a.price())),
    }
}

/// Slice out 1-indexed `page` of size `limit`.
///
/// Pages past the end, and non-positive `page` or `limit`, yield an empty page.
pub fn paginate(items: Vec<Item>, page: i64, limit: i64) -> Vec<Item> {
    if page < 1 || limit < 1 {
        return Vec::new();
    }
    let Some(start) = (page - 1).checked_mul(limit) else {
        return Vec::new();
    };
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    items.into_iter().skip(start).take(limit).collect()
}

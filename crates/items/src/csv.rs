//! CSV rendering of the full wishlist.
//!
//! Layout is fixed for compatibility with existing consumers: a header row,
//! then one row per item joined by `\n`. `name` and `store` are double-quoted
//! (embedded quotes doubled); id, numbers and the timestamp are bare.

use crate::item::Item;

pub const CSV_HEADER: &str = "ID,Name,Price,Stock,Store,Date Added";

/// Render `items` in the order given.
pub fn render_csv(items: &[Item]) -> String {
    let rows: Vec<String> = items.iter().map(render_row).collect();
    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}

fn render_row(item: &Item) -> String {
    format!(
        "{},{},{},{},{},{}",
        item.id_typed(),
        quote(item.name()),
        item.price(),
        item.stock(),
        quote(item.store()),
        item.date_added_iso(),
    )
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

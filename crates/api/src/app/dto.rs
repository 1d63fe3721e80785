use serde::{Deserialize, Serialize};

use wishlist_core::ItemId;
use wishlist_items::{ItemPatch, NewItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub store: String,
}

impl From<CreateItemRequest> for NewItem {
    fn from(body: CreateItemRequest) -> Self {
        NewItem {
            name: body.name,
            price: body.price,
            stock: body.stock,
            store: body.store,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub store: Option<String>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        ItemPatch {
            name: body.name,
            price: body.price,
            stock: body.stock,
            store: body.store,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: ItemId,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub location: String,
}

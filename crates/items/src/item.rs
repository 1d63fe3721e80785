use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use wishlist_core::{Entity, ItemId, WishlistError, WishlistResult};

/// A single wishlist record.
///
/// Fields are private so that every `Item` has passed validation: one is
/// obtained from [`Item::create`], [`Item::patched`] or deserialization, and
/// all three run the same field checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    price: f64,
    stock: i64,
    store: String,
    #[serde(with = "iso_millis")]
    date_added: DateTime<Utc>,
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub store: String,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub store: Option<String>,
}

/// Wire shape of an [`Item`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    id: ItemId,
    name: String,
    price: f64,
    stock: i64,
    store: String,
    #[serde(with = "iso_millis")]
    date_added: DateTime<Utc>,
}

impl Item {
    /// Validate `input` and build the item that will be stored under `id`.
    pub fn create(input: NewItem, id: ItemId, now: DateTime<Utc>) -> WishlistResult<Self> {
        input.validate()?;

        Ok(Self {
            id,
            name: input.name,
            price: input.price,
            stock: input.stock,
            store: input.store,
            date_added: now,
        })
    }

    /// Return a copy with `patch` merged over it. `id` and `date_added` are kept.
    pub fn patched(&self, patch: &ItemPatch) -> WishlistResult<Self> {
        patch.validate()?;

        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(stock) = patch.stock {
            next.stock = stock;
        }
        if let Some(store) = &patch.store {
            next.store = store.clone();
        }
        Ok(next)
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// `date_added` as ISO-8601 with millisecond precision (`2024-05-01T12:00:00.000Z`).
    pub fn date_added_iso(&self) -> String {
        iso_millis::format(&self.date_added)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = ItemRecord::deserialize(d)?;
        validate(Some(r.price), Some(r.stock), Some(&r.name)).map_err(serde::de::Error::custom)?;

        Ok(Self {
            id: r.id,
            name: r.name,
            price: r.price,
            stock: r.stock,
            store: r.store,
            date_added: r.date_added,
        })
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl NewItem {
    pub fn validate(&self) -> WishlistResult<()> {
        validate(Some(self.price), Some(self.stock), Some(&self.name))
    }
}

impl ItemPatch {
    pub fn validate(&self) -> WishlistResult<()> {
        validate(self.price, self.stock, self.name.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none() && self.store.is_none()
    }
}

/// Shared field checks for create and update. Only supplied fields are checked.
fn validate(price: Option<f64>, stock: Option<i64>, name: Option<&str>) -> WishlistResult<()> {
    // Written as `!(p > 0)` so NaN is rejected too.
    if let Some(p) = price {
        if !(p > 0.0) {
            return Err(WishlistError::invalid_argument("price must be positive"));
        }
        if p.is_infinite() {
            return Err(WishlistError::invalid_argument("price must be finite"));
        }
    }
    if let Some(s) = stock {
        if s < 0 {
            return Err(WishlistError::invalid_argument("stock cannot be negative"));
        }
    }
    if let Some(n) = name {
        if n.trim().is_empty() {
            return Err(WishlistError::invalid_argument("name cannot be empty"));
        }
    }
    Ok(())
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(t: &DateTime<Utc>) -> String {
        t.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn id() -> ItemId {
        ItemId::new()
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn new_item() -> NewItem {
        NewItem {
            name: "Mechanical Keyboard".to_string(),
            price: 129.5,
            stock: 3,
            store: "KeyShop".to_string(),
        }
    }

    #[test]
    fn create_keeps_input_and_stamps_id_and_time() {
        let item_id = id();
        let item = Item::create(new_item(), item_id, test_time()).unwrap();

        assert_eq!(item.id_typed(), item_id);
        assert_eq!(item.name(), "Mechanical Keyboard");
        assert_eq!(item.price(), 129.5);
        assert_eq!(item.stock(), 3);
        assert_eq!(item.store(), "KeyShop");
        assert_eq!(item.date_added(), test_time());
        assert_eq!(item.date_added_iso(), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn create_rejects_zero_price() {
        let input = NewItem {
            price: 0.0,
            ..new_item()
        };
        let err = Item::create(input, id(), test_time()).unwrap_err();
        match err {
            WishlistError::InvalidArgument(msg) => assert_eq!(msg, "price must be positive"),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_nan_price() {
        let input = NewItem {
            price: f64::NAN,
            ..new_item()
        };
        assert!(matches!(
            Item::create(input, id(), test_time()),
            Err(WishlistError::InvalidArgument(_))
        ));
    }

    #[test]
    fn create_rejects_infinite_price() {
        let input = NewItem {
            price: f64::INFINITY,
            ..new_item()
        };
        let err = Item::create(input, id(), test_time()).unwrap_err();
        assert_eq!(err.to_string(), "price must be finite");
    }

    #[test]
    fn patch_rejects_infinite_price() {
        let item = Item::create(new_item(), id(), test_time()).unwrap();
        let patch = ItemPatch {
            price: Some(f64::INFINITY),
            ..ItemPatch::default()
        };
        assert!(matches!(
            item.patched(&patch),
            Err(WishlistError::InvalidArgument(_))
        ));
    }

    #[test]
    fn create_rejects_negative_stock() {
        let input = NewItem {
            stock: -1,
            ..new_item()
        };
        let err = Item::create(input, id(), test_time()).unwrap_err();
        match err {
            WishlistError::InvalidArgument(msg) => assert_eq!(msg, "stock cannot be negative"),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn create_accepts_zero_stock() {
        let input = NewItem {
            stock: 0,
            ..new_item()
        };
        assert!(Item::create(input, id(), test_time()).is_ok());
    }

    #[test]
    fn price_is_checked_before_stock() {
        let input = NewItem {
            price: -5.0,
            stock: -5,
            ..new_item()
        };
        let err = Item::create(input, id(), test_time()).unwrap_err();
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn create_rejects_blank_name() {
        let input = NewItem {
            name: "   ".to_string(),
            ..new_item()
        };
        let err = Item::create(input, id(), test_time()).unwrap_err();
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn patch_changes_only_supplied_fields() {
        let item = Item::create(new_item(), id(), test_time()).unwrap();
        let patch = ItemPatch {
            price: Some(9.99),
            ..ItemPatch::default()
        };

        let next = item.patched(&patch).unwrap();

        assert_eq!(next.price(), 9.99);
        assert_eq!(next.id_typed(), item.id_typed());
        assert_eq!(next.date_added(), item.date_added());
        assert_eq!(next.name(), item.name());
        assert_eq!(next.stock(), item.stock());
        assert_eq!(next.store(), item.store());
    }

    #[test]
    fn patch_with_invalid_stock_is_rejected_and_item_untouched() {
        let item = Item::create(new_item(), id(), test_time()).unwrap();
        let before = item.clone();
        let patch = ItemPatch {
            name: Some("Renamed".to_string()),
            stock: Some(-2),
            ..ItemPatch::default()
        };

        assert!(matches!(
            item.patched(&patch),
            Err(WishlistError::InvalidArgument(_))
        ));
        assert_eq!(item, before);
    }

    #[test]
    fn empty_patch_is_identity() {
        let item = Item::create(new_item(), id(), test_time()).unwrap();
        let patch = ItemPatch::default();
        assert!(patch.is_empty());
        assert_eq!(item.patched(&patch).unwrap(), item);
    }

    #[test]
    fn serializes_with_camel_case_and_millis_timestamp() {
        let item = Item::create(new_item(), id(), test_time()).unwrap();
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["dateAdded"], "2024-05-01T12:00:00.000Z");
        assert_eq!(json["name"], "Mechanical Keyboard");
        assert_eq!(json["stock"], 3);

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn deserializing_invalid_fields_is_rejected() {
        let payload = |name: &str, price: f64, stock: i64| {
            serde_json::json!({
                "id": "0190a0b0-0000-7000-8000-000000000000",
                "name": name,
                "price": price,
                "stock": stock,
                "store": "Shop",
                "dateAdded": "2024-05-01T12:00:00.000Z",
            })
        };

        let negative_price = serde_json::from_value::<Item>(payload("Lamp", -5.0, 1));
        let negative_stock = serde_json::from_value::<Item>(payload("Lamp", 5.0, -3));
        let blank_name = serde_json::from_value::<Item>(payload("", 5.0, 1));

        let err = negative_price.unwrap_err();
        assert!(err.to_string().contains("price must be positive"));
        assert!(negative_stock.is_err());
        assert!(blank_name.is_err());
        assert!(serde_json::from_value::<Item>(payload("Lamp", 5.0, 1)).is_ok());
    }
}

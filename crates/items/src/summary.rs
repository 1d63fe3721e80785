//! Descriptive statistics over the whole wishlist.

use serde::Serialize;

use crate::item::Item;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_items: usize,
    pub total_cost: f64,
    pub average_price: f64,
    pub most_expensive: Item,
}

impl Summary {
    /// Reduce `items` to a summary. `None` when there is nothing to summarize.
    ///
    /// Among equally priced items the first one in store order is reported as
    /// the most expensive. `total_cost` saturates at `f64::MAX`; the average
    /// is computed from per-item shares when the plain sum overflows.
    pub fn of(items: &[Item]) -> Option<Self> {
        let (first, rest) = items.split_first()?;

        let mut total_cost = first.price();
        let mut most_expensive = first;
        for item in rest {
            total_cost += item.price();
            if item.price() > most_expensive.price() {
                most_expensive = item;
            }
        }

        let total_items = items.len();
        let n = total_items as f64;
        let average_price = if total_cost.is_finite() {
            total_cost / n
        } else {
            items.iter().map(|item| item.price() / n).sum()
        };

        Some(Self {
            total_items,
            total_cost: total_cost.min(f64::MAX),
            average_price,
            most_expensive: most_expensive.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;
    use chrono::Utc;
    use wishlist_core::ItemId;

    fn item(name: &str, price: f64) -> Item {
        let input = NewItem {
            name: name.to_string(),
            price,
            stock: 0,
            store: "Shop".to_string(),
        };
        Item::create(input, ItemId::new(), Utc::now()).unwrap()
    }

    #[test]
    fn empty_store_has_no_summary() {
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn summarizes_three_items() {
        let items = vec![item("a", 10.0), item("b", 30.0), item("c", 20.0)];
        let s = Summary::of(&items).unwrap();

        assert_eq!(s.total_items, 3);
        assert_eq!(s.total_cost, 60.0);
        assert_eq!(s.average_price, 20.0);
        assert_eq!(s.most_expensive.price(), 30.0);
        assert_eq!(s.most_expensive.name(), "b");
    }

    #[test]
    fn single_item_is_its_own_summary() {
        let items = vec![item("only", 7.5)];
        let s = Summary::of(&items).unwrap();

        assert_eq!(s.total_items, 1);
        assert_eq!(s.total_cost, 7.5);
        assert_eq!(s.average_price, 7.5);
        assert_eq!(s.most_expensive, items[0]);
    }

    #[test]
    fn tie_for_most_expensive_goes_to_first_in_order() {
        let items = vec![item("a", 5.0), item("first", 40.0), item("second", 40.0)];
        let s = Summary::of(&items).unwrap();
        assert_eq!(s.most_expensive.name(), "first");
    }

    #[test]
    fn huge_prices_do_not_overflow_average() {
        let items = vec![item("a", 1e308), item("b", 1e308)];
        let s = Summary::of(&items).unwrap();

        assert_eq!(s.average_price, 1e308);
        assert_eq!(s.total_cost, f64::MAX);

        let json = serde_json::to_value(&s).unwrap();
        assert!(json["totalCost"].is_number());
        assert!(json["averagePrice"].is_number());
    }

    #[test]
    fn serializes_camel_case() {
        let items = vec![item("a", 10.0)];
        let json = serde_json::to_value(Summary::of(&items).unwrap()).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["averagePrice"], 10.0);
        assert_eq!(json["mostExpensive"]["name"], "a");
    }
}

use log::warn;
use serde_json::Value;

use std::collections::HashMap;

use crate::fields::{self, CATALOGUE_NAME_KEYS, CATALOGUE_PRICE_KEYS};
use crate::usd::Usd;

/// A catalogue entry that resolved to a usable product name and unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub name: String,
    pub price: Usd,
}

impl CatalogueEntry {
    /// Resolves a raw catalogue record into a typed entry.
    ///
    /// The name is the first present value under [`CATALOGUE_NAME_KEYS`]
    /// and must be a string; the price comes from [`CATALOGUE_PRICE_KEYS`]
    /// and must coerce to a non-negative number. Returns `None` when either
    /// field is missing or unusable — resolution never fails loudly.
    #[must_use]
    pub fn resolve(record: &Value) -> Option<Self> {
        let name = fields::first_present(record, CATALOGUE_NAME_KEYS)?.as_str()?;
        let price = fields::as_number(fields::first_present(record, CATALOGUE_PRICE_KEYS)?)?;
        Some(Self {
            name: name.to_string(),
            price: Usd::from(price),
        })
    }
}

/// A name → unit price lookup built once per run and immutable after that.
///
/// Product names are case-sensitive and unique: when the same name appears
/// more than once in the source, the last entry wins.
#[derive(Debug, Default)]
pub struct PriceIndex(HashMap<String, Usd>);

impl PriceIndex {
    /// Builds the index from a sequence of raw catalogue records.
    ///
    /// Records that do not resolve to both a name and a price are excluded
    /// and reported at `warn` level; nothing here is fatal.
    #[must_use]
    pub fn index(entries: &[Value]) -> Self {
        let mut prices = HashMap::new();
        for entry in entries {
            match CatalogueEntry::resolve(entry) {
                Some(CatalogueEntry { name, price }) => {
                    prices.insert(name, price);
                }
                None => warn!("skipping catalogue entry with no usable name or price: {entry}"),
            }
        }
        Self(prices)
    }

    /// Returns the unit price for `product`, if the catalogue lists it.
    #[must_use]
    pub fn price(&self, product: &str) -> Option<Usd> {
        self.0.get(product).copied()
    }

    /// Returns the number of distinct products in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn index_maps_resolved_entries_to_their_prices() {
        let entries = vec![
            json!({ "title": "Apple", "price": 1.5 }),
            json!({ "name": "Bread", "price": 2.0 }),
            json!({ "product": "Milk", "price": "3.25" }),
        ];
        let index = PriceIndex::index(&entries);
        assert_eq!(index.len(), 3);
        assert_eq!(index.price("Apple"), Some(Usd::from(1.5)));
        assert_eq!(index.price("Bread"), Some(Usd::from(2.0)));
        assert_eq!(index.price("Milk"), Some(Usd::from(3.25)));
    }

    #[test]
    fn index_drops_entries_missing_either_field() {
        let entries = vec![
            json!({ "title": "Honey" }),
            json!({ "price": 6.75 }),
            json!({ "title": "", "price": 1.0 }),
            json!({ "title": "Butter", "price": null }),
            json!({ "title": "Apple", "price": 1.5 }),
        ];
        let index = PriceIndex::index(&entries);
        assert_eq!(index.len(), 1);
        assert_eq!(index.price("Apple"), Some(Usd::from(1.5)));
    }

    #[test]
    fn index_drops_entries_whose_price_does_not_coerce() {
        let entries = vec![
            json!({ "title": "Rice", "price": "n/a" }),
            json!({ "title": "Tea", "price": -2.0 }),
            json!({ "title": "Salt", "price": true }),
        ];
        let index = PriceIndex::index(&entries);
        assert!(index.is_empty());
    }

    #[test]
    fn index_drops_entries_whose_name_is_not_a_string() {
        let entries = vec![json!({ "title": 42, "price": 1.0 })];
        assert!(PriceIndex::index(&entries).is_empty());
    }

    #[test]
    fn index_tolerates_non_object_entries() {
        let entries = vec![json!(1), json!("Apple"), json!(null), json!([])];
        assert!(PriceIndex::index(&entries).is_empty());
    }

    #[test]
    fn later_duplicate_names_overwrite_earlier_ones() {
        let entries = vec![
            json!({ "title": "Apple", "price": 1.5 }),
            json!({ "title": "Apple", "price": 1.8 }),
        ];
        let index = PriceIndex::index(&entries);
        assert_eq!(index.len(), 1);
        assert_eq!(index.price("Apple"), Some(Usd::from(1.8)));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let entries = vec![json!({ "title": "Apple", "price": 1.5 })];
        let index = PriceIndex::index(&entries);
        assert_eq!(index.price("apple"), None);
        assert_eq!(index.price("APPLE"), None);
    }

    #[test]
    fn an_empty_catalogue_yields_an_empty_index() {
        assert!(PriceIndex::index(&[]).is_empty());
    }
}

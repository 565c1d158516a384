use serde_json::Value;

use std::fmt::{self, Display};

use crate::catalogue::PriceIndex;
use crate::fields::{self, SALE_PRODUCT_KEYS, SALE_QUANTITY_KEYS};
use crate::usd::Usd;

/// A sale record that passed every validation gate.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub product: String,
    pub quantity: f64,
}

impl SaleRecord {
    /// Validates a raw sale record against the catalogue.
    ///
    /// A record passes three gates, in order:
    ///
    /// 1. the product name ([`SALE_PRODUCT_KEYS`]) and the quantity
    ///    ([`SALE_QUANTITY_KEYS`]) must both resolve, and the name must be
    ///    a string — otherwise [`Reason::MissingField`];
    /// 2. the product must be listed in `index` — otherwise
    ///    [`Reason::UnknownProduct`];
    /// 3. the quantity must coerce to a non-negative number (fractional is
    ///    fine) — otherwise [`Reason::NonNumericQuantity`].
    ///
    /// The first gate that fails classifies the record. On success the
    /// validated record is returned together with its catalogued unit
    /// price.
    ///
    /// # Errors
    ///
    /// The [`Reason`] from the first failing gate.
    pub fn validate(index: &PriceIndex, record: &Value) -> Result<(Self, Usd), Reason> {
        let Some(product) = fields::first_present(record, SALE_PRODUCT_KEYS).and_then(Value::as_str)
        else {
            return Err(Reason::MissingField);
        };
        let Some(quantity) = fields::first_present(record, SALE_QUANTITY_KEYS) else {
            return Err(Reason::MissingField);
        };
        let Some(price) = index.price(product) else {
            return Err(Reason::UnknownProduct(product.to_string()));
        };
        let Some(quantity) = fields::as_number(quantity) else {
            return Err(Reason::NonNumericQuantity(product.to_string()));
        };
        Ok((
            Self {
                product: product.to_string(),
                quantity,
            },
            price,
        ))
    }
}

/// Why a sale record was excluded from the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The product name or the quantity is absent, null, or empty.
    MissingField,
    /// The named product is not in the price catalogue.
    UnknownProduct(String),
    /// The quantity does not coerce to a non-negative number.
    NonNumericQuantity(String),
}

/// A rejected sale record together with the reason it was excluded.
///
/// `record` is the raw input value, untouched, so diagnostics can show
/// exactly what was read. The [`Display`] implementation renders the
/// human-readable message the tool prints for each rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub record: Value,
    pub reason: Reason,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Reason::MissingField => {
                write!(f, "invalid or incomplete sale record: {}", self.record)
            }
            Reason::UnknownProduct(product) => {
                write!(f, "product '{product}' is not in the price catalogue")
            }
            Reason::NonNumericQuantity(product) => {
                write!(f, "non-numeric quantity for '{product}': {}", self.record)
            }
        }
    }
}

/// The outcome of reconciling a list of sale records against a catalogue.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Sum of `quantity × unit price` over the records that validated.
    pub total: Usd,
    /// The excluded records, in input order.
    pub rejected: Vec<Rejection>,
}

/// Folds `sales` into a grand total of `quantity × unit price` against the
/// prices in `index`.
///
/// Records are processed strictly in input order, and every record is
/// either priced into [`Reconciliation::total`] or classified into
/// [`Reconciliation::rejected`] (whose order mirrors the input). A bad
/// record never stops the run, and nothing is retried — reconciling the
/// same inputs twice produces identical results.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tally::{reconcile, PriceIndex, Usd};
///
/// let catalogue = vec![json!({ "title": "Apple", "price": 1.5 })];
/// let index = PriceIndex::index(&catalogue);
///
/// let sales = vec![json!({ "Product": "Apple", "Quantity": 2 })];
/// let result = reconcile(&index, &sales);
///
/// assert_eq!(result.total, Usd::from(3.0));
/// assert!(result.rejected.is_empty());
/// ```
#[must_use]
pub fn reconcile(index: &PriceIndex, sales: &[Value]) -> Reconciliation {
    let mut result = Reconciliation::default();
    for record in sales {
        match SaleRecord::validate(index, record) {
            Ok((sale, price)) => result.total += price * sale.quantity,
            Err(reason) => result.rejected.push(Rejection {
                record: record.clone(),
                reason,
            }),
        }
    }
    result
}

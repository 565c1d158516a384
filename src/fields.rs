use serde_json::Value;

/// Accepted keys for a catalogue entry's product name, in preference order.
pub const CATALOGUE_NAME_KEYS: &[&str] = &["title", "name", "product"];

/// Accepted keys for a catalogue entry's unit price.
pub const CATALOGUE_PRICE_KEYS: &[&str] = &["price"];

/// Accepted keys for a sale record's product name, in preference order.
pub const SALE_PRODUCT_KEYS: &[&str] = &["Product", "product"];

/// Accepted keys for a sale record's quantity, in preference order.
pub const SALE_QUANTITY_KEYS: &[&str] = &["Quantity", "quantity"];

/// Resolves a field from a raw record by trying `keys` in order.
///
/// Returns the value under the first key that holds something usable,
/// where JSON `null` and the empty string count as absent. Returns `None`
/// when no key does, or when `record` is not an object at all.
#[must_use]
pub fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let fields = record.as_object()?;
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Coerces a raw field to a non-negative finite number.
///
/// Accepts a JSON number or a string that parses as one; both prices and
/// quantities go through this. Anything else — including negative and
/// non-finite values — is `None`.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (number.is_finite() && number >= 0.0).then_some(number)
}

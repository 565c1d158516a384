#![doc = include_str!("../README.md")]

pub mod catalogue;
pub mod fields;
pub mod loader;
pub mod reconcile;
pub mod report;
pub mod usd;

pub use catalogue::{CatalogueEntry, PriceIndex};
pub use loader::{load_json, LoadError};
pub use reconcile::{reconcile, Reason, Reconciliation, Rejection, SaleRecord};
pub use report::{Report, RESULTS_FILE};
pub use usd::Usd;

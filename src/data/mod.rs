//! Data stores
//!
//! Ports the rebate service reads from and writes to, plus in-memory
//! implementations backed by hash maps.

use mockall::automock;
use rust_decimal::Decimal;

use crate::{products::Product, rebates::Rebate};

pub mod memory;

pub use memory::{InMemoryProductDataStore, InMemoryRebateDataStore};

/// Storage for rebates and their calculated amounts.
#[automock]
pub trait RebateDataStore {
    /// Fetch a rebate by identifier.
    fn get_rebate(&self, identifier: &str) -> Option<Rebate>;

    /// Persist the calculated amount for a rebate, replacing any earlier value.
    fn store_calculation_result(&mut self, rebate: &Rebate, amount: Decimal);

    /// The most recently stored amount for a rebate.
    fn get_stored_calculation_result(&self, identifier: &str) -> Option<Decimal>;

    /// Every stored rebate.
    fn all_rebates(&self) -> Vec<Rebate>;
}

/// Storage for products.
#[automock]
pub trait ProductDataStore {
    /// Fetch a product by identifier.
    fn get_product(&self, identifier: &str) -> Option<Product>;

    /// Every stored product.
    fn all_products(&self) -> Vec<Product>;
}

//! In-memory data stores

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    data::{ProductDataStore, RebateDataStore},
    incentives::SupportedIncentives,
    products::Product,
    rebates::Rebate,
};

/// Hash map backed [`RebateDataStore`].
///
/// Holds a single latest calculated amount per rebate identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRebateDataStore {
    rebates: FxHashMap<String, Rebate>,
    calculations: FxHashMap<String, Decimal>,
}

impl InMemoryRebateDataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in rebates.
    pub fn seeded() -> Self {
        [
            Rebate::fixed_rate_rebate("R1", Decimal::new(1, 1)),
            Rebate::amount_per_uom("R2", Decimal::new(5, 0)),
            Rebate::fixed_cash_amount("R3", Decimal::TEN),
        ]
        .into_iter()
        .collect()
    }

    /// Add or replace a rebate.
    pub fn insert(&mut self, rebate: Rebate) {
        self.rebates.insert(rebate.identifier.clone(), rebate);
    }

    /// Number of rebates held.
    pub fn len(&self) -> usize {
        self.rebates.len()
    }

    /// Returns `true` when no rebates are held.
    pub fn is_empty(&self) -> bool {
        self.rebates.is_empty()
    }
}

impl FromIterator<Rebate> for InMemoryRebateDataStore {
    fn from_iter<I: IntoIterator<Item = Rebate>>(iter: I) -> Self {
        let mut store = Self::new();

        for rebate in iter {
            store.insert(rebate);
        }

        store
    }
}

impl RebateDataStore for InMemoryRebateDataStore {
    fn get_rebate(&self, identifier: &str) -> Option<Rebate> {
        self.rebates.get(identifier).cloned()
    }

    fn store_calculation_result(&mut self, rebate: &Rebate, amount: Decimal) {
        debug!(rebate = %rebate.identifier, %amount, "storing calculation result");

        self.insert(rebate.clone());
        self.calculations.insert(rebate.identifier.clone(), amount);
    }

    fn get_stored_calculation_result(&self, identifier: &str) -> Option<Decimal> {
        self.calculations.get(identifier).copied()
    }

    fn all_rebates(&self) -> Vec<Rebate> {
        let mut rebates: Vec<Rebate> = self.rebates.values().cloned().collect();

        rebates.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        rebates
    }
}

/// Hash map backed [`ProductDataStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductDataStore {
    products: FxHashMap<String, Product>,
}

impl InMemoryProductDataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in products.
    pub fn seeded() -> Self {
        [
            Product::new("P1", Decimal::TEN, SupportedIncentives::FIXED_RATE_REBATE),
            Product::new(
                "P2",
                Decimal::new(20, 0),
                SupportedIncentives::FIXED_RATE_REBATE
                    | SupportedIncentives::FIXED_CASH_AMOUNT
                    | SupportedIncentives::AMOUNT_PER_UOM,
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Add or replace a product.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.identifier.clone(), product);
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` when no products are held.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for InMemoryProductDataStore {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut store = Self::new();

        for product in iter {
            store.insert(product);
        }

        store
    }
}

impl ProductDataStore for InMemoryProductDataStore {
    fn get_product(&self, identifier: &str) -> Option<Product> {
        self.products.get(identifier).cloned()
    }

    fn all_products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();

        products.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        products
    }
}

//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    incentives::{IncentiveType, SupportedIncentives},
    products::{DEFAULT_UOM, Product},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product identifier -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product price (e.g., "2.99")
    pub price: String,

    /// Unit of measure label
    #[serde(default)]
    pub uom: Option<String>,

    /// Supported incentive types
    #[serde(default)]
    pub incentives: Vec<IncentiveType>,
}

impl ProductFixture {
    /// Convert to a [`Product`] stored under `identifier`
    ///
    /// # Errors
    ///
    /// Returns an error if the price is not a valid decimal.
    pub fn into_product(self, identifier: String) -> Result<Product, FixtureError> {
        let price = parse_decimal(&self.price)?;
        let supported: SupportedIncentives = self.incentives.into_iter().collect();

        Ok(Product::new(identifier, price, supported)
            .with_uom(self.uom.unwrap_or_else(|| DEFAULT_UOM.to_string())))
    }
}

//! Fixtures
//!
//! Loads products and rebates from YAML files laid out as
//! `<base>/products/<set>.yml` and `<base>/rebates/<set>.yml`.

use std::{fs, path::PathBuf, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    data::{InMemoryProductDataStore, InMemoryRebateDataStore},
    fixtures::{products::ProductsFixture, rebates::RebatesFixture},
    products::Product,
    rebates::Rebate,
};

pub mod products;
pub mod rebates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid decimal format
    #[error("Invalid decimal format: {0}")]
    InvalidDecimal(String),
}

/// Products and rebates loaded from fixture files.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    products: Vec<Product>,
    rebates: Vec<Rebate>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            rebates: Vec::new(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (identifier, product_fixture) in fixture.products {
            self.products.push(product_fixture.into_product(identifier)?);
        }

        debug!(path = %file_path.display(), count = self.products.len(), "loaded products");

        Ok(self)
    }

    /// Load rebates from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_rebates(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("rebates").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: RebatesFixture = serde_norway::from_str(&contents)?;

        for (identifier, rebate_fixture) in fixture.rebates {
            self.rebates.push(rebate_fixture.into_rebate(identifier)?);
        }

        debug!(path = %file_path.display(), count = self.rebates.len(), "loaded rebates");

        Ok(self)
    }

    /// Load a complete fixture set (products and rebates with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_products(name)?.load_rebates(name)?;

        Ok(fixture)
    }

    /// Loaded products
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Loaded rebates
    pub fn rebates(&self) -> &[Rebate] {
        &self.rebates
    }

    /// Move the loaded data into in-memory stores.
    pub fn into_stores(self) -> (InMemoryRebateDataStore, InMemoryProductDataStore) {
        (
            self.rebates.into_iter().collect(),
            self.products.into_iter().collect(),
        )
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a decimal string (e.g. "0.15")
///
/// # Errors
///
/// Returns an error if the string is not a plain decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(s.trim()).map_err(|_err| FixtureError::InvalidDecimal(s.to_string()))
}

//! Products

use rust_decimal::Decimal;

use crate::incentives::{IncentiveType, SupportedIncentives};

/// Unit of measure used when none is given.
pub const DEFAULT_UOM: &str = "unit";

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product identifier
    pub identifier: String,

    /// Product price
    pub price: Decimal,

    /// Unit of measure label
    pub uom: String,

    /// Incentive types this product accepts
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    /// Creates a new product measured in the default unit.
    pub fn new(
        identifier: impl Into<String>,
        price: Decimal,
        supported_incentives: SupportedIncentives,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            price,
            uom: DEFAULT_UOM.to_string(),
            supported_incentives,
        }
    }

    /// Replace the unit of measure.
    #[must_use]
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        self.uom = uom.into();
        self
    }

    /// Returns whether the product accepts the given incentive type.
    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.supports(incentive)
    }
}

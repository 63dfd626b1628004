//! Rebate Strategies
//!
//! Each incentive type has a strategy that knows how to compute the rebate
//! amount and which products it can be claimed against.

use std::fmt;

use rust_decimal::Decimal;

use crate::{incentives::IncentiveType, products::Product, rebates::Rebate};

pub mod amount_per_uom;
pub mod fixed_cash_amount;
pub mod fixed_rate_rebate;

pub use amount_per_uom::AmountPerUomStrategy;
pub use fixed_cash_amount::FixedCashAmountStrategy;
pub use fixed_rate_rebate::FixedRateRebateStrategy;

/// Incentive-specific rebate calculation.
pub trait RebateStrategy: fmt::Debug {
    /// The incentive type this strategy handles.
    fn incentive(&self) -> IncentiveType;

    /// Compute the rebate amount for the given volume of product.
    ///
    /// Returns `None` if the amount does not fit in a [`Decimal`].
    fn compute_amount(
        &self,
        rebate: &Rebate,
        product: &Product,
        volume: Decimal,
    ) -> Option<Decimal>;

    /// Return whether the rebate can be claimed against the product.
    fn is_compatible_with_product(&self, _rebate: &Rebate, product: &Product) -> bool {
        product.supports(self.incentive())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;

    use crate::{incentives::SupportedIncentives, products::Product};

    pub(crate) fn product(price: Decimal, supported: SupportedIncentives) -> Product {
        Product::new("P1", price, supported)
    }
}

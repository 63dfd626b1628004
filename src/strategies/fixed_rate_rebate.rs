//! Fixed Rate Rebate
//!
//! A percentage of the product price for every unit purchased.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType, products::Product, rebates::Rebate,
    strategies::RebateStrategy,
};

/// Pays `price × percentage × volume`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateRebateStrategy;

impl RebateStrategy for FixedRateRebateStrategy {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedRateRebate
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        product: &Product,
        volume: Decimal,
    ) -> Option<Decimal> {
        product
            .price
            .checked_mul(rebate.percentage)?
            .checked_mul(volume)
    }
}

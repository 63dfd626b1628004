//! Amount Per Unit of Measure

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType, products::Product, rebates::Rebate,
    strategies::RebateStrategy,
};

/// Pays `rebate.amount` for every unit of measure purchased.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountPerUomStrategy;

impl RebateStrategy for AmountPerUomStrategy {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::AmountPerUom
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        _product: &Product,
        volume: Decimal,
    ) -> Option<Decimal> {
        rebate.amount.checked_mul(volume)
    }
}

//! Fixed Cash Amount
//!
//! A flat rebate paid regardless of the volume purchased.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType, products::Product, rebates::Rebate,
    strategies::RebateStrategy,
};

/// Pays `rebate.amount` once per calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCashAmountStrategy;

impl RebateStrategy for FixedCashAmountStrategy {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedCashAmount
    }

    fn compute_amount(
        &self,
        rebate: &Rebate,
        _product: &Product,
        _volume: Decimal,
    ) -> Option<Decimal> {
        Some(rebate.amount)
    }
}

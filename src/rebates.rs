//! Rebates

use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// A rebate agreement.
///
/// `amount` is read by [`IncentiveType::FixedCashAmount`] and
/// [`IncentiveType::AmountPerUom`] rebates, `percentage` by
/// [`IncentiveType::FixedRateRebate`] rebates. The unused field is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Rebate {
    /// Unique rebate identifier
    pub identifier: String,

    /// How the rebate amount is derived
    pub incentive: IncentiveType,

    /// Cash amount, either fixed or per unit of measure
    pub amount: Decimal,

    /// Fraction of the product price, e.g. `0.1` for 10%
    pub percentage: Decimal,
}

impl Rebate {
    /// Creates a fixed cash amount rebate.
    pub fn fixed_cash_amount(identifier: impl Into<String>, amount: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            incentive: IncentiveType::FixedCashAmount,
            amount,
            percentage: Decimal::ZERO,
        }
    }

    /// Creates a fixed rate rebate.
    pub fn fixed_rate_rebate(identifier: impl Into<String>, percentage: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            incentive: IncentiveType::FixedRateRebate,
            amount: Decimal::ZERO,
            percentage,
        }
    }

    /// Creates an amount per unit of measure rebate.
    pub fn amount_per_uom(identifier: impl Into<String>, amount: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            incentive: IncentiveType::AmountPerUom,
            amount,
            percentage: Decimal::ZERO,
        }
    }

    /// The name and value of the field read by this rebate's incentive type.
    pub fn incentive_value(&self) -> (&'static str, Decimal) {
        match self.incentive {
            IncentiveType::FixedCashAmount | IncentiveType::AmountPerUom => ("amount", self.amount),
            IncentiveType::FixedRateRebate => ("percentage", self.percentage),
        }
    }
}

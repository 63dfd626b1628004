//! Rebate Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    incentives::IncentiveType,
    rebates::Rebate,
};

/// Wrapper for rebates in YAML
#[derive(Debug, Deserialize)]
pub struct RebatesFixture {
    /// Map of rebate identifier -> rebate fixture
    pub rebates: FxHashMap<String, RebateFixture>,
}

/// Rebate Fixture
#[derive(Debug, Deserialize)]
pub struct RebateFixture {
    /// Incentive type
    pub incentive: IncentiveType,

    /// Cash amount (e.g., "10")
    #[serde(default)]
    pub amount: Option<String>,

    /// Percentage as a fraction (e.g., "0.1")
    #[serde(default)]
    pub percentage: Option<String>,
}

impl RebateFixture {
    /// Convert to a [`Rebate`] stored under `identifier`
    ///
    /// Absent values default to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not a valid decimal.
    pub fn into_rebate(self, identifier: String) -> Result<Rebate, FixtureError> {
        Ok(Rebate {
            identifier,
            incentive: self.incentive,
            amount: optional_decimal(self.amount.as_deref())?,
            percentage: optional_decimal(self.percentage.as_deref())?,
        })
    }
}

fn optional_decimal(value: Option<&str>) -> Result<Decimal, FixtureError> {
    value.map_or(Ok(Decimal::ZERO), parse_decimal)
}

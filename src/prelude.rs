//! Rebates prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculation::{CalculateRebateRequest, CalculateRebateResult, CalculationError, FailureKind},
    data::{InMemoryProductDataStore, InMemoryRebateDataStore, ProductDataStore, RebateDataStore},
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    registry::{RegistryError, StrategyRegistry},
    service::RebateService,
    strategies::{
        AmountPerUomStrategy, FixedCashAmountStrategy, FixedRateRebateStrategy, RebateStrategy,
    },
};

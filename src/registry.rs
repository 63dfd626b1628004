//! Strategy Registry
//!
//! Maps each incentive type to the strategy that calculates it. New incentive
//! types are added by registering a strategy, without touching the service.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    incentives::IncentiveType,
    products::Product,
    rebates::Rebate,
    strategies::{
        AmountPerUomStrategy, FixedCashAmountStrategy, FixedRateRebateStrategy, RebateStrategy,
    },
};

/// Registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A strategy is already registered for this incentive type.
    #[error("a strategy is already registered for {0}")]
    DuplicateStrategy(IncentiveType),

    /// No strategy is registered for this incentive type.
    #[error("no strategy registered for {0}")]
    NotFound(IncentiveType),
}

/// Incentive type to strategy lookup.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    strategies: FxHashMap<IncentiveType, Box<dyn RebateStrategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in strategy for every incentive type.
    pub fn with_defaults() -> Self {
        let mut strategies: FxHashMap<IncentiveType, Box<dyn RebateStrategy>> =
            FxHashMap::default();

        strategies.insert(
            IncentiveType::FixedCashAmount,
            Box::new(FixedCashAmountStrategy),
        );
        strategies.insert(
            IncentiveType::FixedRateRebate,
            Box::new(FixedRateRebateStrategy),
        );
        strategies.insert(IncentiveType::AmountPerUom, Box::new(AmountPerUomStrategy));

        Self { strategies }
    }

    /// Register a strategy under an incentive type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateStrategy`] if the incentive type already has a strategy.
    pub fn register(
        &mut self,
        incentive: IncentiveType,
        strategy: impl RebateStrategy + 'static,
    ) -> Result<(), RegistryError> {
        if self.strategies.contains_key(&incentive) {
            return Err(RegistryError::DuplicateStrategy(incentive));
        }

        debug!(%incentive, "registered rebate strategy");

        self.strategies.insert(incentive, Box::new(strategy));

        Ok(())
    }

    /// Returns whether a strategy is registered for the incentive type.
    pub fn has_strategy(&self, incentive: IncentiveType) -> bool {
        self.strategies.contains_key(&incentive)
    }

    /// Look up the strategy for an incentive type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no strategy is registered.
    pub fn resolve(&self, incentive: IncentiveType) -> Result<&dyn RebateStrategy, RegistryError> {
        self.strategies
            .get(&incentive)
            .map(Box::as_ref)
            .ok_or(RegistryError::NotFound(incentive))
    }

    /// Returns whether the rebate can be claimed against the product, according
    /// to the strategy registered for the rebate's incentive type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no strategy is registered; check
    /// [`StrategyRegistry::has_strategy`] first to avoid it.
    pub fn is_supported_by_product(
        &self,
        rebate: &Rebate,
        product: &Product,
    ) -> Result<bool, RegistryError> {
        Ok(self
            .resolve(rebate.incentive)?
            .is_compatible_with_product(rebate, product))
    }

    /// Registered incentive types, sorted.
    pub fn incentive_types(&self) -> Vec<IncentiveType> {
        let mut incentives: Vec<IncentiveType> = self.strategies.keys().copied().collect();

        incentives.sort_unstable();

        incentives
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::incentives::SupportedIncentives;

    use super::*;

    #[derive(Debug)]
    struct DoubleCash;

    impl RebateStrategy for DoubleCash {
        fn incentive(&self) -> IncentiveType {
            IncentiveType::FixedCashAmount
        }

        fn compute_amount(
            &self,
            rebate: &Rebate,
            _product: &Product,
            _volume: Decimal,
        ) -> Option<Decimal> {
            rebate.amount.checked_mul(Decimal::TWO)
        }
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = StrategyRegistry::new();

        assert!(registry.is_empty());
        assert!(!registry.has_strategy(IncentiveType::FixedCashAmount));
    }

    #[test]
    fn defaults_cover_every_incentive() {
        let registry = StrategyRegistry::with_defaults();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.incentive_types(), IncentiveType::ALL.to_vec());
    }

    #[test]
    fn resolve_returns_matching_strategy() -> TestResult {
        let registry = StrategyRegistry::with_defaults();

        for incentive in IncentiveType::ALL {
            assert_eq!(registry.resolve(incentive)?.incentive(), incentive);
        }

        Ok(())
    }

    #[test]
    fn resolve_unregistered_is_not_found() {
        let registry = StrategyRegistry::new();

        assert!(matches!(
            registry.resolve(IncentiveType::AmountPerUom),
            Err(RegistryError::NotFound(IncentiveType::AmountPerUom))
        ));
    }

    #[test]
    fn register_rejects_duplicates() -> TestResult {
        let mut registry = StrategyRegistry::new();

        registry.register(IncentiveType::FixedCashAmount, FixedCashAmountStrategy)?;

        let duplicate = registry.register(IncentiveType::FixedCashAmount, DoubleCash);

        assert_eq!(
            duplicate,
            Err(RegistryError::DuplicateStrategy(IncentiveType::FixedCashAmount))
        );

        // First registration wins.
        let rebate = Rebate::fixed_cash_amount("R1", Decimal::TEN);
        let product = Product::new("P1", Decimal::ONE, SupportedIncentives::all());
        let amount = registry
            .resolve(IncentiveType::FixedCashAmount)?
            .compute_amount(&rebate, &product, Decimal::ONE);

        assert_eq!(amount, Some(Decimal::TEN));

        Ok(())
    }

    #[test]
    fn custom_strategy_can_be_registered() -> TestResult {
        let mut registry = StrategyRegistry::new();

        registry.register(IncentiveType::FixedCashAmount, DoubleCash)?;

        let rebate = Rebate::fixed_cash_amount("R1", Decimal::TEN);
        let product = Product::new("P1", Decimal::ONE, SupportedIncentives::all());
        let amount = registry
            .resolve(IncentiveType::FixedCashAmount)?
            .compute_amount(&rebate, &product, Decimal::ONE);

        assert_eq!(amount, Some(Decimal::new(20, 0)));

        Ok(())
    }

    #[test]
    fn is_supported_by_product_delegates_to_strategy() -> TestResult {
        let registry = StrategyRegistry::with_defaults();

        let rebate = Rebate::fixed_rate_rebate("R1", Decimal::new(1, 1));
        let supported = Product::new("P1", Decimal::TEN, SupportedIncentives::FIXED_RATE_REBATE);
        let unsupported = Product::new("P2", Decimal::TEN, SupportedIncentives::AMOUNT_PER_UOM);

        assert!(registry.is_supported_by_product(&rebate, &supported)?);
        assert!(!registry.is_supported_by_product(&rebate, &unsupported)?);

        Ok(())
    }

    #[test]
    fn is_supported_by_product_without_strategy_is_not_found() {
        let registry = StrategyRegistry::new();

        let rebate = Rebate::amount_per_uom("R1", Decimal::ONE);
        let product = Product::new("P1", Decimal::ONE, SupportedIncentives::all());

        assert_eq!(
            registry.is_supported_by_product(&rebate, &product),
            Err(RegistryError::NotFound(IncentiveType::AmountPerUom))
        );
    }
}

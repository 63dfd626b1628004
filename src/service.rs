//! Rebate Service
//!
//! Looks up the rebate and product for a request, checks that the rebate
//! applies, computes the amount with the incentive's strategy and stores it.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    calculation::{CalculateRebateRequest, CalculateRebateResult, CalculationError},
    data::{ProductDataStore, RebateDataStore},
    registry::StrategyRegistry,
    validation::{product_data_valid, rebate_data_valid, request_data_valid},
};

/// Calculates and stores rebate amounts.
#[derive(Debug)]
pub struct RebateService<R, P> {
    rebates: R,
    products: P,
    registry: StrategyRegistry,
}

impl<R: RebateDataStore, P: ProductDataStore> RebateService<R, P> {
    /// Create a service using the built-in strategies.
    pub fn new(rebates: R, products: P) -> Self {
        Self::with_registry(rebates, products, StrategyRegistry::with_defaults())
    }

    /// Create a service using the given strategy registry.
    pub fn with_registry(rebates: R, products: P, registry: StrategyRegistry) -> Self {
        Self {
            rebates,
            products,
            registry,
        }
    }

    /// Calculate and store a rebate.
    ///
    /// The result is successful if and only if the amount was stored.
    pub fn calculate(&mut self, request: &CalculateRebateRequest) -> CalculateRebateResult {
        self.try_calculate(request).into()
    }

    /// Calculate and store a rebate, reporting why it failed.
    ///
    /// Nothing is stored unless every check passes.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::RebateNotFound`] / [`CalculationError::ProductNotFound`]:
    ///   an identifier does not resolve.
    /// - [`CalculationError::NoStrategy`]: the rebate's incentive type has no strategy.
    /// - [`CalculationError::IncompatibleProduct`]: the product does not accept the incentive.
    /// - [`CalculationError::InvalidRebate`], [`CalculationError::InvalidProduct`],
    ///   [`CalculationError::InvalidRequest`]: a value that must be positive is not.
    /// - [`CalculationError::AmountOverflow`]: the amount does not fit in a [`Decimal`].
    pub fn try_calculate(
        &mut self,
        request: &CalculateRebateRequest,
    ) -> Result<Decimal, CalculationError> {
        let result = self.evaluate(request);

        if let Err(error) = &result {
            debug!(
                rebate = %request.rebate_identifier,
                product = %request.product_identifier,
                volume = %request.volume,
                kind = %error.kind(),
                %error,
                "rebate calculation failed"
            );
        }

        result
    }

    fn evaluate(&mut self, request: &CalculateRebateRequest) -> Result<Decimal, CalculationError> {
        let rebate = self.rebates.get_rebate(&request.rebate_identifier);
        let product = self.products.get_product(&request.product_identifier);

        let Some(rebate) = rebate else {
            return Err(CalculationError::RebateNotFound(
                request.rebate_identifier.clone(),
            ));
        };

        let Some(product) = product else {
            return Err(CalculationError::ProductNotFound(
                request.product_identifier.clone(),
            ));
        };

        let Ok(strategy) = self.registry.resolve(rebate.incentive) else {
            return Err(CalculationError::NoStrategy(rebate.incentive));
        };

        if !strategy.is_compatible_with_product(&rebate, &product) {
            return Err(CalculationError::IncompatibleProduct {
                rebate: rebate.identifier,
                product: product.identifier,
                incentive: rebate.incentive,
            });
        }

        if !rebate_data_valid(&rebate) {
            let (field, value) = rebate.incentive_value();

            return Err(CalculationError::InvalidRebate {
                rebate: rebate.identifier,
                field,
                value,
            });
        }

        if !product_data_valid(&product) {
            return Err(CalculationError::InvalidProduct {
                product: product.identifier,
                price: product.price,
            });
        }

        if !request_data_valid(request) {
            return Err(CalculationError::InvalidRequest {
                volume: request.volume,
            });
        }

        let Some(amount) = strategy.compute_amount(&rebate, &product, request.volume) else {
            return Err(CalculationError::AmountOverflow {
                rebate: rebate.identifier,
                volume: request.volume,
            });
        };

        self.rebates.store_calculation_result(&rebate, amount);

        info!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            incentive = %rebate.incentive,
            volume = %request.volume,
            %amount,
            "rebate calculated"
        );

        Ok(amount)
    }

    /// The rebate store.
    pub fn rebate_store(&self) -> &R {
        &self.rebates
    }

    /// The product store.
    pub fn product_store(&self) -> &P {
        &self.products
    }

    /// The strategy registry.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Consume the service, returning its stores.
    pub fn into_stores(self) -> (R, P) {
        (self.rebates, self.products)
    }
}

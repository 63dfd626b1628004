//! Integration tests sweeping rebate calculation across incentive types,
//! supported-incentive sets and invalid values.

use rust_decimal::Decimal;
use testresult::TestResult;

use rebates::{
    calculation::{CalculateRebateRequest, CalculationError, FailureKind},
    data::{
        InMemoryProductDataStore, InMemoryRebateDataStore, MockProductDataStore,
        MockRebateDataStore, RebateDataStore,
    },
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    service::RebateService,
};

/// Every subset of the three incentive flags.
fn all_flag_sets() -> Vec<SupportedIncentives> {
    (0..8_u8)
        .map(|bits| {
            IncentiveType::ALL
                .into_iter()
                .enumerate()
                .filter(|(idx, _)| bits & (1 << idx) != 0)
                .map(|(_, incentive)| incentive)
                .collect()
        })
        .collect()
}

fn valid_rebate(incentive: IncentiveType) -> Rebate {
    match incentive {
        IncentiveType::FixedCashAmount => Rebate::fixed_cash_amount("R1", Decimal::TEN),
        IncentiveType::FixedRateRebate => Rebate::fixed_rate_rebate("R1", Decimal::new(25, 2)),
        IncentiveType::AmountPerUom => Rebate::amount_per_uom("R1", Decimal::new(3, 0)),
    }
}

fn never_storing(rebate: Option<Rebate>) -> MockRebateDataStore {
    let mut rebates = MockRebateDataStore::new();

    rebates
        .expect_get_rebate()
        .returning(move |_| rebate.clone());
    rebates.expect_store_calculation_result().never();

    rebates
}

fn products_returning(product: Option<Product>) -> MockProductDataStore {
    let mut products = MockProductDataStore::new();

    products
        .expect_get_product()
        .returning(move |_| product.clone());

    products
}

fn request(volume: Decimal) -> CalculateRebateRequest {
    CalculateRebateRequest::new("R1", "P1", volume)
}

#[test]
fn flag_sets_cover_every_combination() {
    let sets = all_flag_sets();

    assert_eq!(sets.len(), 8);
    assert!(sets.contains(&SupportedIncentives::empty()));
    assert!(sets.contains(&SupportedIncentives::all()));
}

#[test]
fn unsupported_incentive_always_fails() {
    for incentive in IncentiveType::ALL {
        for supported in all_flag_sets()
            .into_iter()
            .filter(|set| !set.supports(incentive))
        {
            let product = Product::new("P1", Decimal::TEN, supported);
            let mut service = RebateService::new(
                never_storing(Some(valid_rebate(incentive))),
                products_returning(Some(product)),
            );

            let result = service.calculate(&request(Decimal::ONE));

            assert!(!result.success, "{incentive} with {supported}");
            assert_eq!(result.failure, Some(FailureKind::UnsupportedIncentive));
        }
    }
}

#[test]
fn supported_incentive_succeeds_regardless_of_other_flags() {
    for incentive in IncentiveType::ALL {
        for supported in all_flag_sets()
            .into_iter()
            .filter(|set| set.supports(incentive))
        {
            let rebates: InMemoryRebateDataStore = [valid_rebate(incentive)].into_iter().collect();
            let products: InMemoryProductDataStore =
                [Product::new("P1", Decimal::TEN, supported)].into_iter().collect();

            let mut service = RebateService::new(rebates, products);

            let result = service.calculate(&request(Decimal::TWO));

            assert!(result.success, "{incentive} with {supported}");
        }
    }
}

#[test]
fn missing_rebate_or_product_never_stores() {
    let product = Product::new("P1", Decimal::TEN, SupportedIncentives::all());

    for incentive in IncentiveType::ALL {
        let mut missing_rebate =
            RebateService::new(never_storing(None), products_returning(Some(product.clone())));
        let mut missing_product = RebateService::new(
            never_storing(Some(valid_rebate(incentive))),
            products_returning(None),
        );
        let mut missing_both = RebateService::new(never_storing(None), products_returning(None));

        assert_eq!(
            missing_rebate.try_calculate(&request(Decimal::ONE)),
            Err(CalculationError::RebateNotFound("R1".to_string()))
        );
        assert_eq!(
            missing_product.try_calculate(&request(Decimal::ONE)),
            Err(CalculationError::ProductNotFound("P1".to_string()))
        );
        assert_eq!(
            missing_both.calculate(&request(Decimal::ONE)).failure,
            Some(FailureKind::NotFound)
        );
    }
}

#[test]
fn non_positive_rebate_values_fail() {
    let non_positive = [Decimal::ZERO, Decimal::NEGATIVE_ONE, Decimal::new(-1, 2)];

    for value in non_positive {
        let rebates = [
            Rebate::fixed_cash_amount("R1", value),
            Rebate::fixed_rate_rebate("R1", value),
            Rebate::amount_per_uom("R1", value),
        ];

        for rebate in rebates {
            let incentive = rebate.incentive;
            let product = Product::new("P1", Decimal::TEN, SupportedIncentives::all());
            let mut service =
                RebateService::new(never_storing(Some(rebate)), products_returning(Some(product)));

            let result = service.try_calculate(&request(Decimal::ONE));

            assert!(
                matches!(
                    result,
                    Err(CalculationError::InvalidRebate { ref rebate, value: invalid, .. })
                        if rebate == "R1" && invalid == value
                ),
                "{incentive} with {value}"
            );
        }
    }
}

#[test]
fn non_positive_price_fails() {
    for price in [Decimal::ZERO, Decimal::NEGATIVE_ONE] {
        for incentive in IncentiveType::ALL {
            let product = Product::new("P1", price, SupportedIncentives::all());
            let mut service = RebateService::new(
                never_storing(Some(valid_rebate(incentive))),
                products_returning(Some(product)),
            );

            assert_eq!(
                service.try_calculate(&request(Decimal::ONE)),
                Err(CalculationError::InvalidProduct {
                    product: "P1".to_string(),
                    price,
                }),
                "{incentive} with price {price}"
            );
        }
    }
}

#[test]
fn non_positive_volume_fails() {
    for volume in [Decimal::ZERO, Decimal::NEGATIVE_ONE, Decimal::new(-25, 1)] {
        for incentive in IncentiveType::ALL {
            let product = Product::new("P1", Decimal::TEN, SupportedIncentives::all());
            let mut service = RebateService::new(
                never_storing(Some(valid_rebate(incentive))),
                products_returning(Some(product)),
            );

            let result = service.calculate(&request(volume));

            assert!(!result.success, "{incentive} with volume {volume}");
            assert_eq!(result.failure, Some(FailureKind::InvalidData));
        }
    }
}

#[test]
fn overflowing_amount_fails_without_storing() {
    let rebates = [
        Rebate::fixed_rate_rebate("R1", Decimal::new(25, 2)),
        Rebate::amount_per_uom("R1", Decimal::new(3, 0)),
    ];

    for rebate in rebates {
        let incentive = rebate.incentive;
        let product = Product::new("P1", Decimal::new(1999, 2), SupportedIncentives::all());
        let mut service =
            RebateService::new(never_storing(Some(rebate)), products_returning(Some(product)));

        let result = service.calculate(&request(Decimal::MAX));

        assert!(!result.success, "{incentive}");
        assert_eq!(result.amount, None);
        assert_eq!(result.failure, Some(FailureKind::InvalidData));
    }
}

#[test]
fn fixed_cash_amount_is_unaffected_by_large_volume() -> TestResult {
    let rebates: InMemoryRebateDataStore =
        [Rebate::fixed_cash_amount("R1", Decimal::TEN)].into_iter().collect();
    let products: InMemoryProductDataStore =
        [Product::new("P1", Decimal::ONE, SupportedIncentives::all())]
            .into_iter()
            .collect();

    let mut service = RebateService::new(rebates, products);

    assert_eq!(service.try_calculate(&request(Decimal::MAX))?, Decimal::TEN);

    Ok(())
}

#[test]
fn stored_amount_matches_incentive_formula() -> TestResult {
    let price = Decimal::new(1999, 2);
    let volume = Decimal::new(7, 0);

    for incentive in IncentiveType::ALL {
        let rebate = valid_rebate(incentive);
        let expected = match incentive {
            IncentiveType::FixedCashAmount => rebate.amount,
            IncentiveType::FixedRateRebate => price * rebate.percentage * volume,
            IncentiveType::AmountPerUom => rebate.amount * volume,
        };

        let rebates: InMemoryRebateDataStore = [rebate].into_iter().collect();
        let products: InMemoryProductDataStore =
            [Product::new("P1", price, SupportedIncentives::all())]
                .into_iter()
                .collect();

        let mut service = RebateService::new(rebates, products);

        let amount = service.try_calculate(&request(volume))?;

        assert_eq!(amount, expected, "{incentive}");
        assert_eq!(
            service.rebate_store().get_stored_calculation_result("R1"),
            Some(expected)
        );
    }

    Ok(())
}

#[test]
fn seeded_data_matches_runner_examples() -> TestResult {
    let mut service = RebateService::new(
        InMemoryRebateDataStore::seeded(),
        InMemoryProductDataStore::seeded(),
    );

    // 10% of a 10.00 product, 3 units
    assert_eq!(
        service.try_calculate(&CalculateRebateRequest::new("R1", "P1", Decimal::new(3, 0)))?,
        Decimal::new(3, 0)
    );

    // 5 per unit, 4 units
    assert_eq!(
        service.try_calculate(&CalculateRebateRequest::new("R2", "P2", Decimal::new(4, 0)))?,
        Decimal::new(20, 0)
    );

    // P1 only accepts fixed rate rebates
    assert_eq!(
        service
            .calculate(&CalculateRebateRequest::new("R2", "P1", Decimal::ONE))
            .failure,
        Some(FailureKind::UnsupportedIncentive)
    );

    // The failed call leaves the earlier value in place
    assert_eq!(
        service.rebate_store().get_stored_calculation_result("R2"),
        Some(Decimal::new(20, 0))
    );

    Ok(())
}

//! Validation
//!
//! Pure predicates over rebate, product and request data.

use rust_decimal::Decimal;

use crate::{calculation::CalculateRebateRequest, products::Product, rebates::Rebate};

/// Returns whether the field used by the rebate's incentive type is positive.
pub fn rebate_data_valid(rebate: &Rebate) -> bool {
    let (_field, value) = rebate.incentive_value();

    value > Decimal::ZERO
}

/// Returns whether the product price is positive.
pub fn product_data_valid(product: &Product) -> bool {
    product.price > Decimal::ZERO
}

/// Returns whether the requested volume is positive.
pub fn request_data_valid(request: &CalculateRebateRequest) -> bool {
    request.volume > Decimal::ZERO
}

//! Calculation requests, results and errors

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::incentives::IncentiveType;

/// A request to calculate a rebate for a product and volume.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateRequest {
    /// Identifier of the rebate to apply
    pub rebate_identifier: String,

    /// Identifier of the product the rebate is claimed against
    pub product_identifier: String,

    /// Volume purchased, in the product's unit of measure
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Creates a new request.
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// Broad category of a failed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The rebate or the product does not exist.
    NotFound,

    /// No strategy handles the incentive, or the product does not accept it.
    UnsupportedIncentive,

    /// The rebate, product or request failed validation.
    InvalidData,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::NotFound => "not found",
            FailureKind::UnsupportedIncentive => "unsupported incentive",
            FailureKind::InvalidData => "invalid data",
        })
    }
}

/// Reasons a rebate calculation can fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalculationError {
    /// No rebate is stored under the requested identifier.
    #[error("rebate {0} not found")]
    RebateNotFound(String),

    /// No product is stored under the requested identifier.
    #[error("product {0} not found")]
    ProductNotFound(String),

    /// No strategy is registered for the rebate's incentive type.
    #[error("no strategy registered for {0}")]
    NoStrategy(IncentiveType),

    /// The product does not accept the rebate's incentive type.
    #[error("product {product} does not support {incentive} required by rebate {rebate}")]
    IncompatibleProduct {
        /// Rebate identifier
        rebate: String,

        /// Product identifier
        product: String,

        /// The rebate's incentive type
        incentive: IncentiveType,
    },

    /// The rebate amount or percentage is not positive.
    #[error("rebate {rebate} {field} {value} must be greater than zero")]
    InvalidRebate {
        /// Rebate identifier
        rebate: String,

        /// Field read by the rebate's incentive type
        field: &'static str,

        /// Offending value
        value: Decimal,
    },

    /// The product price is not positive.
    #[error("product {product} price {price} must be greater than zero")]
    InvalidProduct {
        /// Product identifier
        product: String,

        /// Offending price
        price: Decimal,
    },

    /// The requested volume is not positive.
    #[error("volume {volume} must be greater than zero")]
    InvalidRequest {
        /// Requested volume
        volume: Decimal,
    },

    /// The computed amount does not fit in a decimal.
    #[error("rebate {rebate} amount overflowed for volume {volume}")]
    AmountOverflow {
        /// Rebate identifier
        rebate: String,

        /// Requested volume
        volume: Decimal,
    },
}

impl CalculationError {
    /// The broad category of this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            CalculationError::RebateNotFound(_) | CalculationError::ProductNotFound(_) => {
                FailureKind::NotFound
            }
            CalculationError::NoStrategy(_) | CalculationError::IncompatibleProduct { .. } => {
                FailureKind::UnsupportedIncentive
            }
            CalculationError::InvalidRebate { .. }
            | CalculationError::InvalidProduct { .. }
            | CalculationError::InvalidRequest { .. }
            | CalculationError::AmountOverflow { .. } => FailureKind::InvalidData,
        }
    }
}

/// Outcome of a rebate calculation.
///
/// `success` is set if and only if the amount was persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateResult {
    /// Whether the calculation succeeded and was stored
    pub success: bool,

    /// Stored amount on success
    pub amount: Option<Decimal>,

    /// Failure category when unsuccessful
    pub failure: Option<FailureKind>,
}

impl CalculateRebateResult {
    /// A successful result carrying the stored amount.
    pub fn succeeded(amount: Decimal) -> Self {
        Self {
            success: true,
            amount: Some(amount),
            failure: None,
        }
    }

    /// A failed result.
    pub fn failed(kind: FailureKind) -> Self {
        Self {
            success: false,
            amount: None,
            failure: Some(kind),
        }
    }
}

impl From<Result<Decimal, CalculationError>> for CalculateRebateResult {
    fn from(result: Result<Decimal, CalculationError>) -> Self {
        match result {
            Ok(amount) => Self::succeeded(amount),
            Err(error) => Self::failed(error.kind()),
        }
    }
}

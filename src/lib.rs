//! Rebates
//!
//! Rebates calculates the rebate owed on a product purchase, checks that the
//! rebate applies to the product, and stores the calculated amount.

pub mod calculation;
pub mod cli;
pub mod config;
pub mod data;
pub mod fixtures;
pub mod incentives;
pub mod logging;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod registry;
pub mod service;
pub mod strategies;
pub mod validation;

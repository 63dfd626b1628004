//! Command line front-end

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    calculation::{CalculateRebateRequest, CalculationError},
    config::{CalculateArgs, Command, Config},
    data::{InMemoryProductDataStore, InMemoryRebateDataStore, ProductDataStore, RebateDataStore},
    fixtures::{Fixture, FixtureError},
    service::RebateService,
};

pub mod interactive;
pub mod tables;

/// Errors surfaced by the command line front-end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Fixture files could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The requested calculation failed.
    #[error("Rebate calculation failed: {0}")]
    Calculation(#[from] CalculationError),
}

/// Build the data stores selected by the configuration.
///
/// # Errors
///
/// Returns an error if a fixture directory is configured and cannot be loaded.
pub fn load_stores(
    config: &Config,
) -> Result<(InMemoryRebateDataStore, InMemoryProductDataStore), FixtureError> {
    match &config.fixtures {
        Some(base_path) => Ok(Fixture::from_set(base_path, &config.fixture_set)?.into_stores()),
        None => Ok((
            InMemoryRebateDataStore::seeded(),
            InMemoryProductDataStore::seeded(),
        )),
    }
}

/// Run the configured command.
///
/// # Errors
///
/// Returns an error if the stores cannot be loaded, I/O fails, or a one-shot
/// calculation fails.
pub fn run(config: &Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    let (rebates, products) = load_stores(config)?;
    let mut service = RebateService::new(rebates, products);

    match config.command() {
        Command::List => tables::write_listing(out, &service),
        Command::Calculate(args) => calculate(&mut service, &args, out),
        Command::Interactive => interactive::run(&mut service, input, out),
    }
}

/// Run a single calculation and print the stored amount.
///
/// # Errors
///
/// Returns [`CliError::Calculation`] if the calculation fails.
pub fn calculate<R, P>(
    service: &mut RebateService<R, P>,
    args: &CalculateArgs,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    R: RebateDataStore,
    P: ProductDataStore,
{
    let request = CalculateRebateRequest::new(&args.rebate, &args.product, args.volume);
    let amount = service.try_calculate(&request)?;

    writeln!(out, "Rebate amount: {amount}")?;

    Ok(())
}

//! Interactive prompt loop

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    calculation::CalculateRebateRequest,
    cli::{CliError, tables::write_listing},
    data::{ProductDataStore, RebateDataStore},
    service::RebateService,
};

const EXIT: &str = "exit";

/// Prompt for calculations until the user types `exit` or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R, P>(
    service: &mut RebateService<R, P>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    R: RebateDataStore,
    P: ProductDataStore,
{
    loop {
        write_listing(out, service)?;

        let Some(product_identifier) = prompt(input, out, "Enter the product identifier:")? else {
            break;
        };

        let Some(rebate_identifier) = prompt(input, out, "Enter the rebate identifier:")? else {
            break;
        };

        let Some(raw_volume) = prompt(input, out, "Enter the volume:")? else {
            break;
        };

        let Ok(volume) = Decimal::from_str(&raw_volume) else {
            warn!(volume = %raw_volume, "unparsable volume");
            writeln!(out, "Invalid volume: {raw_volume}")?;
            writeln!(out)?;
            continue;
        };

        let request = CalculateRebateRequest::new(&rebate_identifier, &product_identifier, volume);

        match service.try_calculate(&request) {
            Ok(amount) => {
                let stored = service
                    .rebate_store()
                    .get_stored_calculation_result(&rebate_identifier)
                    .unwrap_or(amount);

                writeln!(out, "Rebate amount: {stored}")?;
            }
            Err(error) => writeln!(out, "Rebate calculation failed: {error}")?,
        }

        let next = prompt(
            input,
            out,
            "Enter 'exit' to exit the program or any other key to continue.",
        )?;

        if next.is_none_or(|answer| answer == EXIT) {
            break;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> Result<Option<String>, CliError> {
    writeln!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

//! Table rendering for products and rebates

use std::io::{self, Write};

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::{
    data::{ProductDataStore, RebateDataStore},
    products::Product,
    rebates::Rebate,
    service::RebateService,
};

/// Write every product and rebate held by the service's stores.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_listing<R, P>(
    out: &mut impl Write,
    service: &RebateService<R, P>,
) -> Result<(), super::CliError>
where
    R: RebateDataStore,
    P: ProductDataStore,
{
    writeln!(out, "Products:")?;
    write_products(out, &service.product_store().all_products())?;

    writeln!(out, "Rebates:")?;
    write_rebates(out, &service.rebate_store().all_rebates())?;

    Ok(())
}

/// Write products as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_products(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Identifier", "Price", "UoM", "Supported Incentives"]);

    for product in products {
        builder.push_record([
            product.identifier.clone(),
            product.price.to_string(),
            product.uom.clone(),
            product.supported_incentives.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..2), Alignment::right());

    writeln!(out, "{table}")
}

/// Write rebates as a table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_rebates(out: &mut impl Write, rebates: &[Rebate]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Identifier", "Incentive", "Amount", "Percentage"]);

    for rebate in rebates {
        builder.push_record([
            rebate.identifier.clone(),
            rebate.incentive.to_string(),
            rebate.amount.to_string(),
            rebate.percentage.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")
}

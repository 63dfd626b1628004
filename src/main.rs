//! Rebate calculator CLI
//!
//! Runs `interactive` by default. Use `--fixtures <DIR>` to load products and
//! rebates from YAML instead of the built-in data.

use std::io;

use anyhow::Result;

use rebates::{cli, config::Config, logging::init_subscriber};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    init_subscriber(&config.logging)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    cli::run(&config, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

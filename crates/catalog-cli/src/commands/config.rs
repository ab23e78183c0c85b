//! `catalog config` command.

use clap::Args;

use catalog_config::CatalogConfig;

use crate::output;

/// Print the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Omit the seed item list.
    #[arg(long)]
    pub no_seed: bool,
}

/// Executes the config command.
pub fn execute(args: &ConfigArgs, config: &CatalogConfig) -> anyhow::Result<()> {
    let mut shown = config.clone();
    if args.no_seed {
        shown.seed.clear();
    }
    output::print_json(&shown)?;
    output::print_success(&format!(
        "{} seed item(s), listening on {}",
        config.seed.len(),
        config.server.socket_addr()
    ));
    Ok(())
}

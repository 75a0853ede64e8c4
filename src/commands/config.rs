//! Config subcommands handler.

use anyhow::Result;

use crate::cli::ConfigAction;
use crate::config::Config;

/// Show the effective configuration or the path it is loaded from.
pub fn run(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}

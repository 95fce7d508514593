//! `jobfest config` command
//!
//! Shows the configuration in effect and where it came from.
//!
//! # Usage
//! ```bash
//! jobfest config          # Show effective config as TOML
//! jobfest config --path   # Show config and data file paths
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show config and data file paths
    #[arg(long)]
    pub path: bool,
}

pub fn run(
    args: &ConfigArgs,
    config: &Config,
    config_path: Option<&Path>,
    data: Option<&Path>,
) -> Result<()> {
    if args.path {
        let config_file = config_path
            .map(Path::to_path_buf)
            .or_else(Config::default_config_path);
        match config_file {
            Some(path) if path.exists() => println!("Config: {}", path.display()),
            Some(path) => println!("Config: {} (not found, using defaults)", path.display()),
            None => println!("Config: (no config directory, using defaults)"),
        }
        println!("Data:   {}", config.data_file(data).display());
        return Ok(());
    }

    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

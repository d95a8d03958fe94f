//! Brandlink - a CMS-backed site generator for the Brand Link agency.

mod assemble;
mod build;
mod check;
mod cli;
mod config;
mod content;
mod generator;
mod leads;
mod logger;
mod render;
mod serve;
mod theme;
mod utils;

use anyhow::Result;
use build::build_site;
use check::check_content;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};
use serve::serve_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    init_config(load_config(cli)?);
    theme::subscribe(|theme| log!("theme"; "default theme set to {}", theme.as_attr()));
    theme::init(std::env::var("BRANDLINK_THEME").ok().as_deref());

    match &cli.command {
        Commands::Build { .. } => build_site(),
        Commands::Serve { .. } => {
            build_site()?;
            serve_site()
        }
        Commands::Check => check_content(),
    }
}

/// Load and validate configuration from CLI arguments and the
/// environment. A missing config file means defaults; a missing store
/// identity is a hard failure for every command.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", cli.config.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli)?;

    if !cli.is_check() {
        config.validate()?;
    }

    Ok(config)
}

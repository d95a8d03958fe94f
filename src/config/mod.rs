//! Site configuration management for `brandlink.toml` and the environment.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[base]`    | Site metadata (title, description, url)       |
//! | `[build]`   | Output path, minify, revalidation, sitemap    |
//! | `[serve]`   | Local server (port, interface)                |
//!
//! The content-store identity and email-provider credentials are sourced
//! from the environment, not the file: `SANITY_PROJECT_ID`,
//! `SANITY_DATASET`, `SANITY_API_VERSION`, `RESEND_API_KEY`, `RESEND_FROM`,
//! `RESEND_TO`, `INFLUENCER_EMAIL`. Project id and dataset are a hard
//! failure when unset.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Brand Link"
//! url = "https://brandlinkagency.com"
//!
//! [build]
//! output = "public"
//! revalidate = 30
//!
//! [serve]
//! port = 4173
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod mail;
mod serve;
mod store;

pub use handle::{cfg, init_config};
pub use mail::MailConfig;
pub use store::StoreConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use base::BaseConfig;
use build::BuildConfig;
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use serve::ServeConfig;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing brandlink.toml plus the
/// environment-sourced store and mail identities.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content-store identity (set after loading, from env)
    #[serde(skip)]
    pub store: Option<StoreConfig>,

    /// Email-provider settings (set after loading, from env)
    #[serde(skip)]
    pub mail: Option<MailConfig>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Local server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Content-store identity; hard failure when the environment was
    /// incomplete at load time.
    pub fn store(&self) -> Result<&StoreConfig> {
        self.store
            .as_ref()
            .context("content store identity is not configured")
    }

    /// Email-provider settings (always present after load).
    pub fn mail(&self) -> MailConfig {
        self.mail.clone().unwrap_or_else(MailConfig::from_env)
    }

    /// Update configuration with CLI arguments and the environment.
    ///
    /// The store identity is resolved here so that every command fails
    /// fast when `SANITY_PROJECT_ID` / `SANITY_DATASET` are unset.
    pub fn update_with_cli(&mut self, cli: &'static Cli) -> Result<()> {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Apply CLI overrides
        if let Some(output) = cli.output.as_ref() {
            self.build.output = output.clone();
        }
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.root = Some(root);

        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                if self.base.url.is_none() {
                    self.base.url = Some(format!(
                        "http://{}:{}",
                        self.serve.interface, self.serve.port
                    ));
                }
            }
            Commands::Check => {}
        }

        self.store = Some(StoreConfig::from_env()?);
        self.mail = Some(MailConfig::from_env());

        Ok(())
    }

    fn apply_build_args(&mut self, args: &crate::cli::BuildArgs) {
        if args.clean {
            self.build.clean = true;
        }
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap, args.sitemap.as_ref());
        if let Some(base_url) = args.base_url.as_ref() {
            self.base.url = Some(base_url.clone());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.revalidate > 86_400 {
            bail!(ConfigError::Validation(
                "[build.revalidate] must be at most 86400 seconds (one day)".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "Brand Link"
            description = "Talent agency"
        "#;
        let config = SiteConfig::from_str(config_str).unwrap();

        assert_eq!(config.base.title, "Brand Link");
        assert_eq!(config.base.description, "Talent agency");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "Broken"
        "#;
        assert!(SiteConfig::from_str(invalid_config).is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = SiteConfig::default();
        config.base.url = Some("brandlinkagency.com".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_revalidate() {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://brandlinkagency.com".into());
        config.build.revalidate = 1_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "Brand Link"
            description = "Influencer talent agency"
            url = "https://brandlinkagency.com"
            language = "en-US"

            [build]
            output = "dist"
            minify = true
            revalidate = 60

            [serve]
            interface = "127.0.0.1"
            port = 3000
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Brand Link");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.revalidate, 60);
        assert_eq!(config.serve.port, 3000);
    }
}

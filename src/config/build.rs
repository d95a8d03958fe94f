//! `[build]` section configuration.
//!
//! Output paths, minification, and the content revalidation window.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in brandlink.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// minify = true
/// revalidate = 30
/// sitemap = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root; resolved from the CLI when unset.
    #[serde(skip)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output directory for rendered pages.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify rendered HTML/XML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear the output directory completely before building.
    #[serde(default)]
    pub clean: bool,

    /// Per-query revalidation window in seconds. A cached query result
    /// older than this is refetched from the content store.
    #[serde(default = "defaults::build::revalidate")]
    #[educe(Default = defaults::build::revalidate())]
    pub revalidate: u64,

    /// Generate sitemap.xml for all rendered routes.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub sitemap: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.build.revalidate, 30);
        assert!(config.build.sitemap);
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [build]
            output = "dist"
            minify = false
            clean = true
            revalidate = 120
            sitemap = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert_eq!(config.build.revalidate, 120);
        assert!(!config.build.sitemap);
    }
}

//! `[build]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in lumi.toml - where content lives and output goes.
///
/// # Example
/// ```toml
/// [build]
/// storage = "~/.local/share/lumi"  # Content Store directory
/// output = "public"                # index.html, sitemap.xml, robots.txt
/// minify = true                    # Minify index.html
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Content Store directory, one JSON file per record. `~` is expanded.
    #[serde(default = "defaults::build::storage")]
    #[educe(Default = defaults::build::storage())]
    pub storage: PathBuf,

    /// Output directory for generated files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify the generated HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.storage, PathBuf::from(".lumi/storage"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            storage = "data"
            output = "dist"
            minify = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.storage, PathBuf::from("data"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            content = "content"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}

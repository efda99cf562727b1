//! Site configuration management for `lumi.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Public URL, site name, page language           |
//! | `[build]`   | Content Store directory, output, minification  |
//! | `[sitemap]` | Default changefreq/priority, alternates        |
//! | `[admin]`   | Admin password, section save policy            |
//! | `[ping]`    | Search engine ping timeout                     |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://lumixpert.de"
//!
//! [build]
//! storage = "~/.local/share/lumi"
//! output = "public"
//!
//! [sitemap]
//! changefreq = "weekly"
//! languages = ["de", "en"]
//! alternates = true
//! ```

mod admin;
mod build;
pub mod defaults;
mod error;
mod site;
mod sitemap;

pub use admin::{AdminConfig, PingConfig};
pub use build::BuildConfig;
pub use error::ConfigError;
pub use site::SiteInfo;
pub use sitemap::SitemapConfig;

use crate::cli::Cli;
use crate::generator;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, looked up in the root directory.
pub const CONFIG_FILE: &str = "lumi.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing lumi.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root every relative path is resolved against
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub ping: PingConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `config_file` under `root`, falling back to defaults when the
    /// file does not exist. Paths are resolved against `root` afterwards.
    pub fn load_or_default(root: &Path, config_file: &Path) -> Result<Self> {
        let path = root.join(config_file);
        let mut config = if path.exists() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };
        config.update_path_with_root(root, config_file);
        Ok(config)
    }

    /// Load configuration for a CLI invocation, applying its overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let path = root.join(&cli.config);
        let mut config = if path.exists() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli, &root);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.storage, cli.storage.as_ref());
        if let Some(minify) = cli.command.minify() {
            self.build.minify = minify;
        }
        self.update_path_with_root(root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    pub fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));

        // Storage may live outside the project (`~/.local/share/lumi`)
        let storage = shellexpand::tilde(&self.build.storage.to_string_lossy()).into_owned();
        self.build.storage = Self::normalize_path(&root.join(storage));

        self.root = root;
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

    /// Site URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    /// Absolute URL of the generated sitemap.
    pub fn sitemap_url(&self) -> String {
        generator::sitemap_url(self.base_url())
    }

    /// Configured admin password, `None` when empty or unset.
    pub fn admin_password(&self) -> Option<&str> {
        self.admin.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Validate values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        let url = &self.site.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if !(0.0..=1.0).contains(&self.sitemap.priority) {
            bail!(ConfigError::Validation(format!(
                "[sitemap.priority] must be within 0.0..=1.0, got {}",
                self.sitemap.priority
            )));
        }

        if self.sitemap.languages.is_empty() {
            bail!(ConfigError::Validation(
                "[sitemap.languages] must have at least one element".into()
            ));
        }

        if self.ping.timeout_secs == 0 {
            bail!(ConfigError::Validation(
                "[ping.timeout_secs] must be greater than 0".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

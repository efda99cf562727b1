//! `[admin]` and `[ping]` section configuration.

use super::defaults;
use crate::editor::SavePolicy;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[admin]` section in lumi.toml.
///
/// # Example
/// ```toml
/// [admin]
/// password = "lumixpert2025"
/// save = "immediate"   # commit every section edit right away
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConfig {
    /// Password for content-changing commands. Empty disables the check.
    #[serde(default = "defaults::admin::password")]
    #[educe(Default = defaults::admin::password())]
    pub password: Option<String>,

    /// When section edits are persisted.
    #[serde(default)]
    pub save: SavePolicy,
}

/// `[ping]` section in lumi.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PingConfig {
    /// Per-request timeout for search engine pings.
    #[serde(default = "defaults::ping::timeout_secs")]
    #[educe(Default = defaults::ping::timeout_secs())]
    pub timeout_secs: u64,
}

impl PingConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_admin_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.admin.password.as_deref(), Some("lumixpert2025"));
        assert_eq!(config.admin.save, SavePolicy::Manual);
        assert_eq!(config.ping.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_admin_custom() {
        let config = r#"
            [admin]
            password = ""
            save = "immediate"

            [ping]
            timeout_secs = 3
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.admin.password.as_deref(), Some(""));
        assert_eq!(config.admin.save, SavePolicy::Immediate);
        assert_eq!(config.ping.timeout_secs, 3);
    }
}

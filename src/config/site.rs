//! `[site]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in lumi.toml - public identity of the site.
///
/// # Example
/// ```toml
/// [site]
/// url = "https://lumixpert.de"
/// title = "LumiXpert"
/// language = "de"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Absolute base URL used in the sitemap and robots.txt.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Site name for `og:site_name`.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// `lang` attribute of the rendered page.
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_defaults() {
        let config: SiteConfig = toml::from_str("[site]").unwrap();
        assert_eq!(config.site.url, "https://lumixpert.de");
        assert_eq!(config.site.title, "LumiXpert");
        assert_eq!(config.site.language, "de");
    }

    #[test]
    fn test_site_custom() {
        let config = r#"
            [site]
            url = "https://staging.lumixpert.de"
            language = "en"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.site.url, "https://staging.lumixpert.de");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.title, "LumiXpert");
    }
}

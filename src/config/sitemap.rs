//! `[sitemap]` section configuration.

use super::defaults;
use crate::generator::ChangeFreq;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[sitemap]` section in lumi.toml.
///
/// # Example
/// ```toml
/// [sitemap]
/// changefreq = "weekly"      # default for URLs without their own
/// priority = 0.5             # default for URLs without their own
/// alternates = true          # xhtml:link alternates
/// languages = ["de", "en"]   # alternates need more than one
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::sitemap::changefreq")]
    #[educe(Default = defaults::sitemap::changefreq())]
    pub changefreq: ChangeFreq,

    /// Must be within `0.0..=1.0`.
    #[serde(default = "defaults::sitemap::priority")]
    #[educe(Default = defaults::sitemap::priority())]
    pub priority: f64,

    #[serde(default)]
    pub alternates: bool,

    #[serde(default = "defaults::sitemap::languages")]
    #[educe(Default = defaults::sitemap::languages())]
    pub languages: Vec<String>,
}

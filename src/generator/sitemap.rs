//! Sitemap generation.
//!
//! Lists the one-page site's sections, the service landing pages and one
//! entry per gallery material for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://lumixpert.de/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, content::GalleryMaterial};
use chrono::NaiveDate;
use quick_xml::{Reader, events::Event};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XML namespace for `xhtml:link` language alternates
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Sections of the one-page site: location, priority, change frequency.
const MAIN_PAGES: [(&str, f64, ChangeFreq); 4] = [
    ("/", 1.0, ChangeFreq::Weekly),
    ("/#about", 0.8, ChangeFreq::Monthly),
    ("/#gallery", 0.9, ChangeFreq::Weekly),
    ("/#contact", 0.7, ChangeFreq::Monthly),
];

/// Service landing pages under `/services/`.
const SERVICES: [&str; 5] = [
    "metallgravur",
    "holzgravur",
    "ledergravur",
    "acrylgravur",
    "glasgravur",
];

// ============================================================================
// Types
// ============================================================================

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapOptions {
    /// Absolute site URL without trailing slash
    pub base_url: String,
    pub default_changefreq: ChangeFreq,
    pub default_priority: f64,
    /// Emit `xhtml:link` alternates when more than one language is listed
    pub include_alternates: bool,
    pub languages: Vec<String>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            base_url: "https://lumixpert.de".to_owned(),
            default_changefreq: ChangeFreq::Weekly,
            default_priority: 0.5,
            include_alternates: false,
            languages: vec!["de".to_owned()],
        }
    }
}

impl From<&SiteConfig> for SitemapOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            base_url: config.base_url().to_owned(),
            default_changefreq: config.sitemap.changefreq,
            default_priority: config.sitemap.priority,
            include_alternates: config.sitemap.alternates,
            languages: config.sitemap.languages.clone(),
        }
    }
}

/// Language variant of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute location
    pub loc: String,
    /// Last modification date, `YYYY-MM-DD`
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f64>,
    pub alternates: Vec<Alternate>,
}

/// Counts over the collected entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapStats {
    pub total_urls: usize,
    /// Keyed by priority with one decimal, e.g. `"0.7"`
    pub priority_distribution: BTreeMap<String, usize>,
    pub changefreq_distribution: BTreeMap<String, usize>,
}

// ============================================================================
// Generator
// ============================================================================

/// Collects URL entries and renders them as a sitemap document.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    options: SitemapOptions,
    lastmod: String,
    urls: Vec<UrlEntry>,
}

impl SitemapGenerator {
    /// Every entry gets `today` as its last modification date.
    pub fn new(options: SitemapOptions, today: NaiveDate) -> Self {
        Self {
            options,
            lastmod: today.format("%Y-%m-%d").to_string(),
            urls: Vec::new(),
        }
    }

    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn clear(&mut self) {
        self.urls.clear();
    }

    /// Add one URL. Relative locations are prefixed with the base URL;
    /// missing frequency and priority fall back to the defaults.
    pub fn add_url(&mut self, loc: &str, changefreq: Option<ChangeFreq>, priority: Option<f64>) {
        let base = &self.options.base_url;
        let absolute = if loc.starts_with("http") {
            loc.to_owned()
        } else {
            format!("{base}{loc}")
        };

        let alternates = if self.options.include_alternates && self.options.languages.len() > 1 {
            let path = loc.strip_prefix(base.as_str()).unwrap_or(loc);
            self.options
                .languages
                .iter()
                .map(|lang| Alternate {
                    hreflang: lang.clone(),
                    href: format!("{base}/{lang}{path}"),
                })
                .collect()
        } else {
            Vec::new()
        };

        self.urls.push(UrlEntry {
            loc: absolute,
            lastmod: Some(self.lastmod.clone()),
            changefreq: Some(changefreq.unwrap_or(self.options.default_changefreq)),
            priority: Some(priority.unwrap_or(self.options.default_priority)),
            alternates,
        });
    }

    pub fn add_main_pages(&mut self) {
        for (loc, priority, changefreq) in MAIN_PAGES {
            self.add_url(loc, Some(changefreq), Some(priority));
        }
    }

    /// One entry per material, `/#gallery/<lowercased name>`.
    pub fn add_gallery_pages(&mut self, materials: &[GalleryMaterial]) {
        for material in materials {
            let loc = format!("/#gallery/{}", material.name.to_lowercase());
            self.add_url(&loc, Some(ChangeFreq::Weekly), Some(0.6));
        }
    }

    pub fn add_service_pages(&mut self) {
        for service in SERVICES {
            let loc = format!("/services/{service}");
            self.add_url(&loc, Some(ChangeFreq::Monthly), Some(0.7));
        }
    }

    /// Generate sitemap XML string.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}""#));
        if self.options.include_alternates {
            xml.push_str(&format!(r#" xmlns:xhtml="{XHTML_NS}""#));
        }
        xml.push_str(">\n");

        let entries: Vec<String> = self.urls.iter().map(render_entry).collect();
        xml.push_str(&entries.join("\n"));

        xml.push_str("\n</urlset>");
        xml
    }

    pub fn stats(&self) -> SitemapStats {
        let mut stats = SitemapStats {
            total_urls: self.urls.len(),
            ..SitemapStats::default()
        };
        for url in &self.urls {
            let priority = url
                .priority
                .map_or_else(|| "undefined".to_owned(), |p| format!("{p:.1}"));
            let changefreq = url.changefreq.map_or("undefined", ChangeFreq::as_str);
            *stats.priority_distribution.entry(priority).or_default() += 1;
            *stats
                .changefreq_distribution
                .entry(changefreq.to_owned())
                .or_default() += 1;
        }
        stats
    }
}

fn render_entry(url: &UrlEntry) -> String {
    let mut out = format!("  <url>\n    <loc>{}</loc>\n", escape_xml(&url.loc));
    if let Some(lastmod) = &url.lastmod {
        out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    }
    if let Some(changefreq) = url.changefreq {
        out.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
    }
    if let Some(priority) = url.priority {
        out.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
    }
    for alt in &url.alternates {
        out.push_str(&format!(
            "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
            escape_xml(&alt.hreflang),
            escape_xml(&alt.href)
        ));
    }
    out.push_str("  </url>");
    out
}

// ============================================================================
// Public API
// ============================================================================

/// Full site sitemap: main sections, then gallery materials, then services.
pub fn generate_sitemap(
    options: &SitemapOptions,
    materials: &[GalleryMaterial],
    today: NaiveDate,
) -> SitemapGenerator {
    let mut generator = SitemapGenerator::new(options.clone(), today);
    generator.add_main_pages();
    generator.add_gallery_pages(materials);
    generator.add_service_pages();
    generator
}

#[derive(Debug, Error)]
pub enum SitemapParseError {
    #[error("XML parse error at position {position}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("document ends with {0} unclosed element(s)")]
    Unclosed(usize),

    #[error("document has no <urlset> root")]
    MissingUrlset,
}

/// Parse a sitemap document and count its `<url>` elements.
///
/// Fails on mismatched or unclosed tags.
pub fn count_urls(xml: &str) -> Result<usize, SitemapParseError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut urls = 0;
    let mut saw_urlset = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) => {
                depth += 1;
                match elem.name().as_ref() {
                    b"urlset" if depth == 1 => saw_urlset = true,
                    b"url" if depth == 2 => urls += 1,
                    _ => {}
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(SitemapParseError::Xml {
                    position: reader.error_position() as u64,
                    source,
                });
            }
        }
    }

    if depth != 0 {
        return Err(SitemapParseError::Unclosed(depth));
    }
    if !saw_urlset {
        return Err(SitemapParseError::MissingUrlset);
    }
    Ok(urls)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn material(id: u32, name: &str) -> GalleryMaterial {
        GalleryMaterial {
            id,
            name: name.to_string(),
            image: "/x.webp".to_string(),
            description: "d".to_string(),
            products: vec![],
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_two_materials_yield_eleven_urls() {
        let materials = [material(1, "Metall"), material(2, "Holz")];
        let generator = generate_sitemap(&SitemapOptions::default(), &materials, today());
        let xml = generator.to_xml();

        assert_eq!(count_urls(&xml).unwrap(), 11);
        assert!(xml.contains("<loc>https://lumixpert.de/#gallery/metall</loc>"));
        assert!(xml.contains("<loc>https://lumixpert.de/#gallery/holz</loc>"));
        assert!(xml.contains("<loc>https://lumixpert.de/services/glasgravur</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-03-14</lastmod>").count(), 11);
    }

    #[test]
    fn test_entry_order_and_values() {
        let generator = generate_sitemap(&SitemapOptions::default(), &[material(1, "Leder")], today());
        let locs: Vec<&str> = generator.urls().iter().map(|u| u.loc.as_str()).collect();
        assert_eq!(
            locs[..6],
            [
                "https://lumixpert.de/",
                "https://lumixpert.de/#about",
                "https://lumixpert.de/#gallery",
                "https://lumixpert.de/#contact",
                "https://lumixpert.de/#gallery/leder",
                "https://lumixpert.de/services/metallgravur",
            ]
        );

        let xml = generator.to_xml();
        assert!(xml.contains(
            "  <url>\n    <loc>https://lumixpert.de/</loc>\n    <lastmod>2025-03-14</lastmod>\n    \
             <changefreq>weekly</changefreq>\n    <priority>1.0</priority>\n  </url>"
        ));
        assert!(xml.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  <url>"
        ));
        assert!(xml.ends_with("  </url>\n</urlset>"));
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let materials = [material(1, r#"Acryl & "Glas" <neu>"#), material(2, "Kork's")];
        let xml = generate_sitemap(&SitemapOptions::default(), &materials, today()).to_xml();

        assert!(xml.contains("#gallery/acryl &amp; &quot;glas&quot; &lt;neu&gt;</loc>"));
        assert!(xml.contains("#gallery/kork&apos;s</loc>"));
        assert_eq!(count_urls(&xml).unwrap(), 11);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let materials = crate::content::Gallery::default();
        let a = generate_sitemap(&SitemapOptions::default(), &materials, today()).to_xml();
        let b = generate_sitemap(&SitemapOptions::default(), &materials, today()).to_xml();
        assert_eq!(a, b);
        assert_eq!(count_urls(&a).unwrap(), 9);
    }

    #[test]
    fn test_defaults_and_absolute_locations() {
        let mut generator = SitemapGenerator::new(SitemapOptions::default(), today());
        generator.add_url("/impressum", None, None);
        generator.add_url("https://shop.lumixpert.de/", Some(ChangeFreq::Daily), Some(0.3));

        let urls = generator.urls();
        assert_eq!(urls[0].loc, "https://lumixpert.de/impressum");
        assert_eq!(urls[0].changefreq, Some(ChangeFreq::Weekly));
        assert_eq!(urls[0].priority, Some(0.5));
        assert_eq!(urls[1].loc, "https://shop.lumixpert.de/");
    }

    #[test]
    fn test_alternates_for_multiple_languages() {
        let options = SitemapOptions {
            include_alternates: true,
            languages: vec!["de".into(), "en".into()],
            ..SitemapOptions::default()
        };
        let mut generator = SitemapGenerator::new(options, today());
        generator.add_url("/#about", None, None);
        let xml = generator.to_xml();

        assert!(xml.contains(r#"xmlns:xhtml="http://www.w3.org/1999/xhtml""#));
        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="en" href="https://lumixpert.de/en/#about" />"#
        ));
        assert_eq!(count_urls(&xml).unwrap(), 1);
    }

    #[test]
    fn test_no_alternates_for_single_language() {
        let options = SitemapOptions {
            include_alternates: true,
            ..SitemapOptions::default()
        };
        let mut generator = SitemapGenerator::new(options, today());
        generator.add_main_pages();
        assert!(generator.urls().iter().all(|u| u.alternates.is_empty()));
        assert!(!generator.to_xml().contains("<xhtml:link"));
    }

    #[test]
    fn test_stats() {
        let generator = generate_sitemap(
            &SitemapOptions::default(),
            &[material(1, "Metall"), material(2, "Holz")],
            today(),
        );
        let stats = generator.stats();

        assert_eq!(stats.total_urls, 11);
        assert_eq!(stats.priority_distribution["0.7"], 6);
        assert_eq!(stats.priority_distribution["0.6"], 2);
        assert_eq!(stats.priority_distribution["1.0"], 1);
        assert_eq!(stats.changefreq_distribution["monthly"], 7);
        assert_eq!(stats.changefreq_distribution["weekly"], 4);
    }

    #[test]
    fn test_count_urls_rejects_malformed() {
        assert!(count_urls("<urlset><url></urlset>").is_err());
        assert!(count_urls("<urlset><url>").is_err());
        assert!(matches!(
            count_urls("<feed></feed>"),
            Err(SitemapParseError::MissingUrlset)
        ));
    }
}

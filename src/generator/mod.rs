//! Crawler-facing files: `sitemap.xml`, `robots.txt` and search engine pings.

mod ping;
mod robots;
mod sitemap;

pub use ping::{Endpoint, PingError, PingOutcome, PingReport, Pinger, SearchEngine, ping_search_engines};
pub use robots::generate_robots_txt;
pub use sitemap::{
    Alternate, ChangeFreq, SitemapGenerator, SitemapOptions, SitemapParseError, SitemapStats,
    UrlEntry, count_urls, escape_xml, generate_sitemap,
};

use crate::{content::GalleryMaterial, log};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

/// Public URL of the sitemap for a site rooted at `base_url`.
pub fn sitemap_url(base_url: &str) -> String {
    format!("{}/{SITEMAP_FILE}", base_url.trim_end_matches('/'))
}

/// Write `sitemap.xml` and `robots.txt` into `output_dir`, creating it if
/// needed. Returns the statistics of the written sitemap.
pub fn write_crawler_files(
    output_dir: &Path,
    options: &SitemapOptions,
    materials: &[GalleryMaterial],
    today: NaiveDate,
) -> Result<SitemapStats> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let generator = generate_sitemap(options, materials, today);
    let sitemap_path = output_dir.join(SITEMAP_FILE);
    fs::write(&sitemap_path, generator.to_xml())
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;
    log!("sitemap"; "{} ({} urls)", SITEMAP_FILE, generator.urls().len());

    let robots_path = output_dir.join(ROBOTS_FILE);
    fs::write(&robots_path, generate_robots_txt(&sitemap_url(&options.base_url)))
        .with_context(|| format!("Failed to write robots.txt to {}", robots_path.display()))?;
    log!("robots"; "{ROBOTS_FILE}");

    Ok(generator.stats())
}

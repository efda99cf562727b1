//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── render_index() ──► Page::mount → render → minify → index.html
//!     │
//!     └── write_crawler_files() ──► sitemap.xml + robots.txt
//! ```
//!
//! Both halves read the same store snapshot and run in parallel.

use crate::{
    bus::SyncBus,
    config::SiteConfig,
    content::Gallery,
    generator::{self, SitemapOptions, SitemapStats},
    log,
    store::ContentStore,
    utils::minify::minify_html,
    view::Page,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};

pub const INDEX_FILE: &str = "index.html";

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Size of the written index.html in bytes
    pub index_bytes: usize,
    pub sitemap: SitemapStats,
}

/// Render `index.html` and regenerate the crawler files into the output
/// directory.
pub fn build_site(config: &SiteConfig, store: &ContentStore, today: NaiveDate) -> Result<BuildReport> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let gallery = store.load_or_seed::<Gallery>();
    let options = SitemapOptions::from(config);

    let (index_result, sitemap_result) = rayon::join(
        || render_index(config, store, output),
        || generator::write_crawler_files(output, &options, &gallery, today),
    );

    let report = BuildReport {
        index_bytes: index_result?,
        sitemap: sitemap_result?,
    };
    log!("build"; "done ({} bytes html, {} urls)", report.index_bytes, report.sitemap.total_urls);
    Ok(report)
}

/// Write `index.html`, returning its size.
fn render_index(config: &SiteConfig, store: &ContentStore, output: &Path) -> Result<usize> {
    // A private bus: nothing publishes during a build.
    let page = Page::mount(store, &SyncBus::new());
    let html = page.render(&config.site.language, &config.site.title);
    let html = minify_html(html.as_bytes(), config.build.minify);

    let path = output.join(INDEX_FILE);
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("build"; "{INDEX_FILE}");
    Ok(html.len())
}

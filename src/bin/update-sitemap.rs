//! Regenerate `sitemap.xml` and `robots.txt` for the LumiXpert site.
//!
//! Takes no flags: reads `lumi.toml` from the current directory when present
//! and the gallery from the configured Content Store.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use lumi::{
    config::{CONFIG_FILE, SiteConfig},
    content::Gallery,
    generator::{self, ROBOTS_FILE, SITEMAP_FILE, SitemapOptions, SitemapStats},
    logger::{report_err, report_ok},
    store::ContentStore,
};
use std::{path::Path, process::ExitCode};

fn main() -> ExitCode {
    println!("{}\n", "Updating LumiXpert sitemap files...".bold());

    let today = Local::now().date_naive();
    match update(today) {
        Ok((config, stats)) => {
            let output = &config.build.output;
            report_ok(&format!("Sitemap updated: {}", output.join(SITEMAP_FILE).display()));
            report_ok(&format!("Robots.txt updated: {}", output.join(ROBOTS_FILE).display()));

            println!("\n{}", "Statistics:".bold());
            println!("   Total URLs: {}", stats.total_urls);
            println!("   Last updated: {}", today.format("%Y-%m-%d"));
            println!("   Base URL: {}", config.base_url());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_err("Error updating sitemap files", &format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn update(today: NaiveDate) -> Result<(SiteConfig, SitemapStats)> {
    let config = SiteConfig::load_or_default(Path::new("./"), Path::new(CONFIG_FILE))?;
    config.validate()?;

    let store = ContentStore::open(&config.build.storage);
    let gallery = store.load_or_seed::<Gallery>();
    let stats = generator::write_crawler_files(
        &config.build.output,
        &SitemapOptions::from(&config),
        &gallery,
        today,
    )?;
    Ok((config, stats))
}

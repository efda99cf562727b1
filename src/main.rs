//! lumi - content and sitemap CLI for the LumiXpert site.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use lumi::{
    admin::AdminSession,
    build::build_site,
    cli::{Cli, Commands},
    config::SiteConfig,
    content::Gallery,
    edit::{self, Workspace},
    generator::{self, SitemapOptions},
    logger::{report_err, report_ok},
    store::ContentStore,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    if cli.command.is_admin() {
        authorize(&cli, &config)?;
    }

    let ws = Workspace::open(&config);

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_site(&config, &ws.store, today())?;
            report_ok(&format!(
                "site built into {} ({} URLs in sitemap)",
                config.build.output.display(),
                report.sitemap.total_urls
            ));
            Ok(())
        }
        Commands::Sitemap => write_sitemap(&config, &ws.store),
        Commands::Ping { url } => ping(&config, url.as_deref()),
        Commands::Gallery { action } => runtime()?.block_on(edit::gallery(&ws, action)),
        Commands::Product { action } => runtime()?.block_on(edit::product(&ws, action)),
        Commands::About { action } => edit::about(&ws, action),
        Commands::Contact { action } => edit::contact(&ws, action),
        Commands::Seo { action } => edit::seo(&ws, action),
        Commands::Footer { action } => edit::footer(&ws, action),
        Commands::Consent { action } => edit::consent(&ws.store, action, Utc::now()),
        Commands::Tracking { action } => edit::tracking(&ws.store, action),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check `--password` against the configured admin password.
fn authorize(cli: &Cli, config: &SiteConfig) -> Result<()> {
    let session = AdminSession::new(config.admin_password().map(str::to_owned));
    session
        .authorize(cli.password.as_deref())
        .context("admin access denied, pass --password")
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

fn write_sitemap(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let gallery = store.load_or_seed::<Gallery>();
    let stats = generator::write_crawler_files(
        &config.build.output,
        &SitemapOptions::from(config),
        &gallery,
        today(),
    )?;
    report_ok(&format!("sitemap.xml written ({} URLs)", stats.total_urls));
    Ok(())
}

/// Ping every engine; failures are reported but do not fail the command.
fn ping(config: &SiteConfig, url: Option<&str>) -> Result<()> {
    let url = url.map_or_else(|| config.sitemap_url(), str::to_owned);
    let report = runtime()?.block_on(generator::ping_search_engines(&url, config.ping.timeout()))?;

    if report.all_ok() {
        report_ok(&format!("search engines notified about {url}"));
    } else {
        for outcome in report.failures() {
            if let Err(err) = &outcome.result {
                report_err(&format!("{} ping failed", outcome.engine), &err.to_string());
            }
        }
    }
    Ok(())
}

//! robots.txt generation.

/// Crawler rules with the sitemap location filled in.
///
/// The output depends on `sitemap_url` only.
pub fn generate_robots_txt(sitemap_url: &str) -> String {
    format!(
        "User-agent: *
Allow: /

# Sitemap
Sitemap: {sitemap_url}

# Crawl-delay for respectful crawling
Crawl-delay: 1

# Disallow admin and private areas
Disallow: /admin
Disallow: /api/
Disallow: /private/

# Allow important static resources
Allow: /public/
Allow: /assets/
Allow: /images/
Allow: /*.css$
Allow: /*.js$
Allow: /*.png$
Allow: /*.jpg$
Allow: /*.jpeg$
Allow: /*.webp$
Allow: /*.svg$
Allow: /*.ico$

# Block common spam/bot patterns
Disallow: /*?utm_*
Disallow: /*?fbclid=*
Disallow: /*?gclid=*

# Allow sitemap specifically
Allow: /sitemap.xml
Allow: /robots.txt"
    )
}

//! `<head>` tags derived from the SEO record.

use super::render::escape_html;
use crate::content::SeoContent;
use serde_json::{Value, json};

/// schema.org `LocalBusiness` (or configured subtype) for the JSON-LD block.
pub fn structured_data(seo: &SeoContent) -> Value {
    let data = &seo.structured_data;
    json!({
        "@context": "https://schema.org",
        "@type": data.business_type,
        "name": data.business_name,
        "description": seo.description,
        "url": seo.canonical_url,
        "logo": seo.og_image,
        "image": seo.og_image,
        "telephone": data.telephone,
        "email": data.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": data.address.street,
            "addressLocality": data.address.city,
            "postalCode": data.address.postal_code,
            "addressCountry": data.address.country,
        },
        "openingHours": data.opening_hours,
    })
}

/// Title, meta, Open Graph, Twitter and canonical tags plus JSON-LD.
pub fn render_head(seo: &SeoContent, site_name: &str) -> String {
    let title = escape_html(&seo.title);
    let description = escape_html(&seo.description);
    let image = escape_html(&seo.og_image);
    let url = escape_html(&seo.canonical_url);

    let mut head = String::with_capacity(2048);
    head.push_str(r#"<meta charset="utf-8">"#);
    head.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    head.push_str(&format!("<title>{title}</title>"));
    head.push_str(&format!(r#"<meta name="description" content="{description}">"#));
    head.push_str(&format!(r#"<meta name="keywords" content="{}">"#, escape_html(&seo.keywords)));
    head.push_str(&format!(r#"<link rel="canonical" href="{url}">"#));

    head.push_str(r#"<meta property="og:type" content="website">"#);
    head.push_str(&format!(r#"<meta property="og:title" content="{title}">"#));
    head.push_str(&format!(r#"<meta property="og:description" content="{description}">"#));
    head.push_str(&format!(r#"<meta property="og:image" content="{image}">"#));
    head.push_str(&format!(r#"<meta property="og:url" content="{url}">"#));
    head.push_str(&format!(r#"<meta property="og:site_name" content="{}">"#, escape_html(site_name)));

    head.push_str(r#"<meta name="twitter:card" content="summary_large_image">"#);
    head.push_str(&format!(r#"<meta name="twitter:title" content="{title}">"#));
    head.push_str(&format!(r#"<meta name="twitter:description" content="{description}">"#));
    head.push_str(&format!(r#"<meta name="twitter:image" content="{image}">"#));

    // `</` would end the script element early
    let json_ld = structured_data(seo).to_string().replace("</", "<\\/");
    head.push_str(&format!(r#"<script type="application/ld+json">{json_ld}</script>"#));
    head
}

//! HTML fragments for the sections of the one-page site.
//!
//! Every piece of record text goes through [`escape_html`]. Image sources
//! may be URLs or `data:` URIs and are escaped as attribute values.

use crate::content::{AboutContent, ContactContent, FooterContent, Gallery, GalleryMaterial};

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_hero() -> String {
    concat!(
        r#"<section id="hero" class="hero">"#,
        r#"<img class="hero-logo" src="/logo.png" alt="LumiXpert">"#,
        r#"<h1><span class="lumi">LUMI</span><span class="xpert">XPERT</span></h1>"#,
        r#"<h2>Wir <em>verewigen</em> die Energie Ihrer Marke.</h2>"#,
        "<p>Präzise Lasergravuren, die gewöhnliche Produkte in außergewöhnliche \
         Markenerlebnisse verwandeln.</p>",
        r##"<a class="cta" href="#contact">Jetzt anfragen</a>"##,
        "</section>",
    )
    .to_owned()
}

pub fn render_about(about: &AboutContent) -> String {
    let mut html = String::from(r#"<section id="about" class="about">"#);
    html.push_str(&format!(
        "<h2>{}</h2><p>{}</p><div class=\"features\">",
        escape_html(&about.title),
        escape_html(&about.description)
    ));
    for feature in &about.features {
        html.push_str(&format!(
            "<article class=\"feature\"><h3>{}</h3><p>{}</p></article>",
            escape_html(&feature.title),
            escape_html(&feature.description)
        ));
    }
    html.push_str("</div></section>");
    html
}

fn render_material(html: &mut String, material: &GalleryMaterial) {
    html.push_str(&format!(
        "<article class=\"material\" id=\"gallery-{id}\" data-material=\"{id}\">\
         <img src=\"{image}\" alt=\"{name}\" loading=\"lazy\">\
         <span class=\"count\">{count} Produkte</span>\
         <h3>{name}</h3><p>{description}</p>",
        id = material.id,
        image = escape_html(&material.image),
        name = escape_html(&material.name),
        count = material.products.len(),
        description = escape_html(&material.description)
    ));
    if !material.products.is_empty() {
        html.push_str("<ul class=\"products\">");
        for product in &material.products {
            html.push_str(&format!(
                "<li><img src=\"{}\" alt=\"{title}\" loading=\"lazy\"><h4>{title}</h4><p>{}</p></li>",
                escape_html(&product.image),
                escape_html(&product.description),
                title = escape_html(&product.title)
            ));
        }
        html.push_str("</ul>");
    }
    html.push_str("</article>");
}

pub fn render_gallery(gallery: &Gallery) -> String {
    let mut html = String::from(
        "<section id=\"gallery\" class=\"gallery\"><h2>Unsere Galerie</h2>\
         <p>Entdecken Sie unsere hochwertigen Gravurmaterialien für außergewöhnliche Ergebnisse.</p>\
         <div class=\"materials\">",
    );
    for material in gallery.iter() {
        render_material(&mut html, material);
    }
    html.push_str("</div></section>");
    html
}

pub fn render_contact(contact: &ContactContent) -> String {
    let mut html = String::from(r#"<section id="contact" class="contact">"#);
    html.push_str(&format!(
        "<h2>{}</h2><p>{}</p>\
         <p class=\"email\"><a href=\"mailto:{email}\">{email}</a></p>\
         <p class=\"phone\"><a href=\"tel:{tel}\">{phone}</a></p>",
        escape_html(&contact.title),
        escape_html(&contact.description),
        email = escape_html(&contact.email),
        tel = escape_html(&contact.phone.replace(' ', "")),
        phone = escape_html(&contact.phone)
    ));

    let lines: Vec<String> = contact.address.iter().map(|l| escape_html(l)).collect();
    html.push_str(&format!("<address>{}</address>", lines.join("<br>")));

    html.push_str("<table class=\"opening-hours\">");
    for row in &contact.opening_hours {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            escape_html(&row.day),
            escape_html(&row.hours)
        ));
    }
    html.push_str("</table></section>");
    html
}

pub fn render_footer(footer: &FooterContent) -> String {
    let mut html = String::from("<footer class=\"footer\">");
    html.push_str(&format!(
        "<h3>{}</h3><p>{}</p>",
        escape_html(&footer.company_name),
        escape_html(&footer.description)
    ));

    let links = &footer.social_links;
    let social: Vec<(&str, &String)> = [
        ("Facebook", &links.facebook),
        ("Instagram", &links.instagram),
        ("LinkedIn", &links.linkedin),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.as_ref().map(|url| (label, url)))
    .collect();

    if !social.is_empty() {
        html.push_str("<nav class=\"social\">");
        for (label, url) in social {
            html.push_str(&format!(
                "<a href=\"{}\" rel=\"noopener\">{label}</a>",
                escape_html(url)
            ));
        }
        html.push_str("</nav>");
    }

    html.push_str(&format!("<p class=\"copyright\">{}</p></footer>", escape_html(&footer.copyright)));
    html
}

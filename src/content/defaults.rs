//! Seed values written on first load.

use super::types::{
    AboutContent, BusinessAddress, ContactContent, Feature, FooterContent, Gallery,
    GalleryMaterial, OpeningHours, SeoContent, SocialLinks, StructuredData,
};

fn material(id: u32, name: &str, image: &str, description: &str) -> GalleryMaterial {
    GalleryMaterial {
        id,
        name: name.into(),
        image: image.into(),
        description: description.into(),
        products: Vec::new(),
    }
}

pub fn gallery() -> Gallery {
    Gallery::new(vec![
        material(
            1,
            "Metall",
            "/metall.webp",
            "Hochwertige Gravuren auf Edelstahl, Aluminium und weiteren Metallen.",
        ),
        material(
            2,
            "Holz",
            "/holz.jpg",
            "Präzise Gravuren auf nachhaltigem Holz für besondere Produkte.",
        ),
        material(
            3,
            "Leder",
            "/leder.webp",
            "Stilvolle Gravuren auf Leder für exklusive Accessoires.",
        ),
        material(
            4,
            "Acryl / Glas",
            "/glas.webp",
            "Klare Gravuren für moderne und elegante Designs.",
        ),
    ])
}

pub fn about() -> AboutContent {
    AboutContent {
        title: "Über Uns".into(),
        description: "Wir sind auf Premium-Lasergravuren spezialisiert und verwandeln \
                      gewöhnliche Produkte in außergewöhnliche Markenerlebnisse, die Ihr \
                      Publikum begeistern."
            .into(),
        features: vec![
            Feature {
                title: "Schnelle Skalierbarkeit".into(),
                description: "Von Prototypen bis zur Massenproduktion – wir skalieren nach \
                              Ihren Anforderungen ohne Qualitätsverlust."
                    .into(),
            },
            Feature {
                title: "Individuelle Lösungen".into(),
                description: "Maßgeschneiderte Gravurlösungen für Ihre spezifischen \
                              Markenanforderungen und Produktspezifikationen."
                    .into(),
            },
            Feature {
                title: "Emotionales Branding".into(),
                description: "Wir schaffen bleibende Eindrücke, indem wir Ihre Marke auf \
                              emotionaler Ebene mit Ihren Kunden verbinden."
                    .into(),
            },
        ],
    }
}

pub fn contact() -> ContactContent {
    ContactContent {
        title: "Kontakt Aufnehmen".into(),
        description: "Bereit, Ihre Marke mit Premium-Lasergravuren auf ein neues Level zu \
                      bringen? Kontaktieren Sie uns für eine Beratung!"
            .into(),
        email: "lumixpert.de@gmail.com".into(),
        phone: "+49 178 1638184".into(),
        address: vec!["Schwalbenweg 19".into(), "34212 Melsungen".into()],
        opening_hours: vec![
            OpeningHours::new("Montag – Freitag", "9:00 – 18:00"),
            OpeningHours::new("Samstag", "10:00 – 16:00"),
            OpeningHours::new("Sonntag", "geschlossen"),
        ],
    }
}

pub fn seo() -> SeoContent {
    SeoContent {
        title: "LumiXpert - Premium Lasergravur für außergewöhnliche Markenerlebnisse".into(),
        description: "Präzise Lasergravuren auf Metall, Holz, Leder und Acryl. Wir verewigen \
                      die Energie Ihrer Marke mit hochwertigen Gravurlösungen für Unternehmen \
                      und Privatkunden."
            .into(),
        keywords: "Lasergravur, Gravur, Metall, Holz, Leder, Acryl, Glas, Markierung, \
                   Personalisierung, Deutschland"
            .into(),
        og_image: "/logo.png".into(),
        canonical_url: "https://lumixpert.de".into(),
        structured_data: StructuredData {
            business_name: "LumiXpert".into(),
            business_type: "LocalBusiness".into(),
            telephone: "+49 178 1638184".into(),
            email: "lumixpert.de@gmail.com".into(),
            address: BusinessAddress {
                street: "Schwalbenweg 19".into(),
                city: "Melsungen".into(),
                postal_code: "34212".into(),
                country: "DE".into(),
            },
            opening_hours: vec!["Mo-Fr 09:00-18:00".into(), "Sa 10:00-16:00".into()],
        },
    }
}

pub fn footer() -> FooterContent {
    FooterContent {
        company_name: "LumiXpert".into(),
        description: "Ihr Partner für professionelle Lasergravuren mit modernster Technologie \
                      und höchsten Qualitätsstandards."
            .into(),
        copyright: "© 2024 LumiXpert. Alle Rechte vorbehalten.".into(),
        social_links: SocialLinks::default(),
    }
}

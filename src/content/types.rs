//! Content record types.
//!
//! Field names serialize in camelCase to match the blobs the browser build
//! of the site stores.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

// ============================================================================
// Gallery
// ============================================================================

/// One example product engraved on a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Unique within the parent material
    pub id: u32,
    pub title: String,
    /// URL or `data:` URI
    pub image: String,
    pub description: String,
}

/// A category of engravable substrate, e.g. "Metall".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryMaterial {
    /// Unique within the gallery
    pub id: u32,
    pub name: String,
    /// URL or `data:` URI
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub products: Vec<ProductImage>,
}

impl GalleryMaterial {
    pub fn product(&self, id: u32) -> Option<&ProductImage> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Next product id: highest current id plus one, starting at 1.
    /// `None` once `u32::MAX` is taken.
    pub fn next_product_id(&self) -> Option<u32> {
        self.products.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1)
    }
}

/// Ordered material collection. Insertion order is display order.
///
/// Serialized as a bare JSON array under `galleryItems`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    materials: Vec<GalleryMaterial>,
}

impl Gallery {
    pub const fn new(materials: Vec<GalleryMaterial>) -> Self {
        Self { materials }
    }

    pub fn get(&self, id: u32) -> Option<&GalleryMaterial> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut GalleryMaterial> {
        self.materials.iter_mut().find(|m| m.id == id)
    }

    /// Next material id: highest id currently present plus one.
    ///
    /// Recomputed from the live collection, so an emptied gallery starts
    /// over at 1. `None` once `u32::MAX` is taken.
    pub fn next_id(&self) -> Option<u32> {
        self.materials.iter().map(|m| m.id).max().unwrap_or(0).checked_add(1)
    }

    pub fn push(&mut self, material: GalleryMaterial) {
        self.materials.push(material);
    }

    /// Remove a material together with all of its products.
    pub fn remove(&mut self, id: u32) -> Option<GalleryMaterial> {
        let index = self.materials.iter().position(|m| m.id == id)?;
        Some(self.materials.remove(index))
    }

    pub fn into_inner(self) -> Vec<GalleryMaterial> {
        self.materials
    }
}

impl Deref for Gallery {
    type Target = [GalleryMaterial];

    fn deref(&self) -> &Self::Target {
        &self.materials
    }
}

impl From<Vec<GalleryMaterial>> for Gallery {
    fn from(materials: Vec<GalleryMaterial>) -> Self {
        Self::new(materials)
    }
}

// ============================================================================
// About
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    /// Fixed length; edited in place only
    pub features: Vec<Feature>,
}

// ============================================================================
// Contact
// ============================================================================

/// One row of the opening-hours table, e.g. `Samstag` / `10:00 – 16:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

impl OpeningHours {
    pub fn new(day: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            hours: hours.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: Vec<String>,
    /// Ordered rows. Also reads the older `{ "day": "hours" }` object form.
    #[serde(deserialize_with = "opening_hours_compat")]
    pub opening_hours: Vec<OpeningHours>,
}

/// Accept both the row list and the legacy day → hours object.
///
/// Object entries keep their document order.
fn opening_hours_compat<'de, D>(deserializer: D) -> Result<Vec<OpeningHours>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Rows(Vec<OpeningHours>),
        Legacy(IndexMap<String, String>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Rows(rows) => rows,
        Repr::Legacy(map) => map
            .into_iter()
            .map(|(day, hours)| OpeningHours { day, hours })
            .collect(),
    })
}

// ============================================================================
// SEO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Data for the JSON-LD `LocalBusiness` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    pub business_name: String,
    pub business_type: String,
    pub telephone: String,
    pub email: String,
    pub address: BusinessAddress,
    /// schema.org notation, e.g. `Mo-Fr 09:00-18:00`
    pub opening_hours: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    pub canonical_url: String,
    pub structured_data: StructuredData,
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub company_name: String,
    pub description: String,
    pub copyright: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: u32, name: &str) -> GalleryMaterial {
        GalleryMaterial {
            id,
            name: name.to_string(),
            image: format!("/{id}.webp"),
            description: "desc".to_string(),
            products: vec![],
        }
    }

    #[test]
    fn test_next_id_uses_current_max() {
        let mut gallery = Gallery::default();
        assert_eq!(gallery.next_id(), Some(1));

        gallery.push(material(1, "Metall"));
        gallery.push(material(7, "Holz"));
        assert_eq!(gallery.next_id(), Some(8));

        gallery.remove(7);
        assert_eq!(gallery.next_id(), Some(2));
    }

    #[test]
    fn test_next_id_at_u32_max() {
        let mut gallery = Gallery::default();
        let mut last = material(u32::MAX, "Metall");
        assert_eq!(last.next_product_id(), Some(1));

        last.products.push(ProductImage {
            id: u32::MAX,
            title: "Schild".into(),
            image: "/s.webp".into(),
            description: "desc".into(),
        });
        assert_eq!(last.next_product_id(), None);

        gallery.push(last);
        assert_eq!(gallery.next_id(), None);
    }

    #[test]
    fn test_remove_drops_products() {
        let mut gallery = Gallery::default();
        let mut metall = material(1, "Metall");
        metall.products.push(ProductImage {
            id: 1,
            title: "Flasche".to_string(),
            image: "/f.webp".to_string(),
            description: "graviert".to_string(),
        });
        gallery.push(metall);

        let removed = gallery.remove(1).unwrap();
        assert_eq!(removed.products.len(), 1);
        assert!(gallery.is_empty());
        assert!(gallery.remove(1).is_none());
    }

    #[test]
    fn test_gallery_serializes_as_array() {
        let gallery = Gallery::new(vec![material(1, "Metall")]);
        let json = serde_json::to_string(&gallery).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_material_products_default_to_empty() {
        let json = r#"[{"id":3,"name":"Leder","image":"/l.webp","description":"d"}]"#;
        let gallery: Gallery = serde_json::from_str(json).unwrap();
        assert_eq!(gallery[0].id, 3);
        assert!(gallery[0].products.is_empty());
    }

    #[test]
    fn test_contact_reads_legacy_opening_hours_in_order() {
        let json = r#"{
            "title": "Kontakt",
            "description": "d",
            "email": "a@b.de",
            "phone": "1",
            "address": ["Weg 1"],
            "openingHours": {
                "Montag – Freitag": "9:00 – 18:00",
                "Samstag": "10:00 – 16:00",
                "Sonntag": "geschlossen"
            }
        }"#;
        let contact: ContactContent = serde_json::from_str(json).unwrap();
        let days: Vec<_> = contact.opening_hours.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(days, ["Montag – Freitag", "Samstag", "Sonntag"]);
        assert_eq!(contact.opening_hours[2].hours, "geschlossen");
    }

    #[test]
    fn test_contact_writes_opening_hours_as_rows() {
        let contact = ContactContent {
            title: "t".to_string(),
            description: "d".to_string(),
            email: "e".to_string(),
            phone: "p".to_string(),
            address: vec![],
            opening_hours: vec![OpeningHours::new("Samstag", "10-16")],
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["openingHours"][0]["day"], "Samstag");

        let back: ContactContent = serde_json::from_value(value).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_seo_uses_camel_case() {
        let seo = crate::content::defaults::seo();
        let value = serde_json::to_value(&seo).unwrap();
        assert!(value.get("ogImage").is_some());
        assert!(value.get("canonicalUrl").is_some());
        assert_eq!(value["structuredData"]["address"]["postalCode"], "34212");
    }

    #[test]
    fn test_footer_social_links_optional() {
        let json = r#"{"companyName":"L","description":"d","copyright":"c"}"#;
        let footer: FooterContent = serde_json::from_str(json).unwrap();
        assert_eq!(footer.social_links, SocialLinks::default());

        let out = serde_json::to_string(&footer).unwrap();
        assert!(out.contains(r#""socialLinks":{}"#));
    }
}

//! Site content records and their storage identities.
//!
//! Every editable section of the marketing page is a [`Content`] record:
//! a plain serializable value stored under one [`StorageKey`] and announced
//! on one [`Topic`] whenever it changes.
//!
//! | Record            | Storage key      | Topic                   |
//! |-------------------|------------------|-------------------------|
//! | [`Gallery`]       | `galleryItems`   | `galleryItemsUpdated`   |
//! | [`AboutContent`]  | `aboutContent`   | `aboutContentUpdated`   |
//! | [`ContactContent`]| `contactContent` | `contactContentUpdated` |
//! | [`SeoContent`]    | `seoContent`     | `seoContentUpdated`     |
//! | [`FooterContent`] | `footerContent`  | `footerContentUpdated`  |
//!
//! Key and topic names are shared with the browser build of the site, so
//! stored blobs stay interchangeable.

mod defaults;
mod types;

pub use types::{
    AboutContent, BusinessAddress, ContactContent, Feature, FooterContent, Gallery,
    GalleryMaterial, OpeningHours, ProductImage, SeoContent, SocialLinks, StructuredData,
};

use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// Keys of the origin-scoped key/value storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    GalleryItems,
    AboutContent,
    ContactContent,
    SeoContent,
    FooterContent,
    GaConsent,
    MetaPixelConsent,
    GaMeasurementId,
    MetaPixelId,
    MetaTestEventCode,
    /// Session-scoped flag set after a successful admin login.
    AdminAuthenticated,
}

impl StorageKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GalleryItems => "galleryItems",
            Self::AboutContent => "aboutContent",
            Self::ContactContent => "contactContent",
            Self::SeoContent => "seoContent",
            Self::FooterContent => "footerContent",
            Self::GaConsent => "ga_consent",
            Self::MetaPixelConsent => "meta_pixel_consent",
            Self::GaMeasurementId => "ga_measurement_id",
            Self::MetaPixelId => "meta_pixel_id",
            Self::MetaTestEventCode => "meta_test_event_code",
            Self::AdminAuthenticated => "adminAuthenticated",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channels of the synchronization bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    GalleryItemsUpdated,
    AboutContentUpdated,
    ContactContentUpdated,
    SeoContentUpdated,
    FooterContentUpdated,
}

impl Topic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GalleryItemsUpdated => "galleryItemsUpdated",
            Self::AboutContentUpdated => "aboutContentUpdated",
            Self::ContactContentUpdated => "contactContentUpdated",
            Self::SeoContentUpdated => "seoContentUpdated",
            Self::FooterContentUpdated => "footerContentUpdated",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content record with a fixed storage key, bus topic and seed value.
///
/// Tying key, topic and payload type together makes a publish on the wrong
/// topic, or with the wrong payload, a compile error.
pub trait Content: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KEY: StorageKey;
    const TOPIC: Topic;

    /// Value written on first load when nothing usable is stored.
    fn seed() -> Self;

    /// Whether a stored value should be treated as absent and reseeded.
    fn is_vacant(&self) -> bool {
        false
    }
}

impl Content for Gallery {
    const KEY: StorageKey = StorageKey::GalleryItems;
    const TOPIC: Topic = Topic::GalleryItemsUpdated;

    fn seed() -> Self {
        defaults::gallery()
    }

    /// A stored `[]` reseeds the default materials.
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Content for AboutContent {
    const KEY: StorageKey = StorageKey::AboutContent;
    const TOPIC: Topic = Topic::AboutContentUpdated;

    fn seed() -> Self {
        defaults::about()
    }
}

impl Content for ContactContent {
    const KEY: StorageKey = StorageKey::ContactContent;
    const TOPIC: Topic = Topic::ContactContentUpdated;

    fn seed() -> Self {
        defaults::contact()
    }
}

impl Content for SeoContent {
    const KEY: StorageKey = StorageKey::SeoContent;
    const TOPIC: Topic = Topic::SeoContentUpdated;

    fn seed() -> Self {
        defaults::seo()
    }
}

impl Content for FooterContent {
    const KEY: StorageKey = StorageKey::FooterContent;
    const TOPIC: Topic = Topic::FooterContentUpdated;

    fn seed() -> Self {
        defaults::footer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(StorageKey::GalleryItems.as_str(), "galleryItems");
        assert_eq!(StorageKey::SeoContent.as_str(), "seoContent");
        assert_eq!(StorageKey::GaConsent.as_str(), "ga_consent");
        assert_eq!(StorageKey::MetaTestEventCode.as_str(), "meta_test_event_code");
        assert_eq!(StorageKey::AdminAuthenticated.to_string(), "adminAuthenticated");
    }

    #[test]
    fn test_topic_names() {
        assert_eq!(Gallery::TOPIC.as_str(), "galleryItemsUpdated");
        assert_eq!(AboutContent::TOPIC.as_str(), "aboutContentUpdated");
        assert_eq!(ContactContent::TOPIC.as_str(), "contactContentUpdated");
        assert_eq!(SeoContent::TOPIC.as_str(), "seoContentUpdated");
        assert_eq!(FooterContent::TOPIC.to_string(), "footerContentUpdated");
    }

    #[test]
    fn test_gallery_seed_has_four_materials() {
        let gallery = Gallery::seed();
        let names: Vec<_> = gallery.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Metall", "Holz", "Leder", "Acryl / Glas"]);
        assert!(gallery.iter().all(|m| m.products.is_empty()));
    }

    #[test]
    fn test_vacant_only_for_empty_gallery() {
        assert!(Gallery::default().is_vacant());
        assert!(!Gallery::seed().is_vacant());
        assert!(!AboutContent::seed().is_vacant());
    }
}

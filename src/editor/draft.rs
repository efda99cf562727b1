//! Typed form buffers for gallery entries.
//!
//! A draft holds what the operator typed before it is committed. Validation
//! is a pure function over the draft, independent of any UI.

use crate::content::{GalleryMaterial, ProductImage};
use std::fmt;

/// A required field that was left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "must not be empty",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Collect an error for every blank (empty or whitespace-only) field.
fn require(fields: &[(&'static str, &str)]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| FieldError::required(name))
        .collect()
}

/// Form buffer for a gallery material.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialDraft {
    pub name: String,
    pub image: String,
    pub description: String,
}

impl MaterialDraft {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    /// Field-level errors; empty when the draft can be saved.
    pub fn validate(&self) -> Vec<FieldError> {
        require(&[
            ("name", &self.name),
            ("image", &self.image),
            ("description", &self.description),
        ])
    }
}

/// Prefill the form from an existing material.
impl From<&GalleryMaterial> for MaterialDraft {
    fn from(material: &GalleryMaterial) -> Self {
        Self::new(&material.name, &material.image, &material.description)
    }
}

/// Form buffer for a product image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub image: String,
    pub description: String,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        require(&[
            ("title", &self.title),
            ("image", &self.image),
            ("description", &self.description),
        ])
    }
}

impl From<&ProductImage> for ProductDraft {
    fn from(product: &ProductImage) -> Self {
        Self::new(&product.title, &product.image, &product.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_draft_is_valid() {
        let draft = MaterialDraft::new("Metall", "/m.webp", "desc");
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let draft = MaterialDraft::new("  ", "/m.webp", "\t\n");
        let errors = draft.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "description"]);
        assert_eq!(errors[0].to_string(), "name must not be empty");
    }

    #[test]
    fn test_product_draft_validation() {
        assert_eq!(ProductDraft::default().validate().len(), 3);
        assert!(ProductDraft::new("Becher", "/b.webp", "graviert").validate().is_empty());
    }

    #[test]
    fn test_prefill_from_material() {
        let material = GalleryMaterial {
            id: 2,
            name: "Holz".into(),
            image: "/holz.jpg".into(),
            description: "Eiche".into(),
            products: vec![],
        };
        assert_eq!(MaterialDraft::from(&material), MaterialDraft::new("Holz", "/holz.jpg", "Eiche"));
    }
}

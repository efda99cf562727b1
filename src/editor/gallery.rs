//! Gallery editor: materials and their product images.
//!
//! Every successful mutation is committed at once: the full collection is
//! written under `galleryItems` and published on `galleryItemsUpdated`.
//! Validation runs before anything changes, so a rejected draft leaves the
//! store and the bus untouched.

use super::{EditorError, MaterialDraft, Missing, ProductDraft};
use crate::{
    bus::SyncBus,
    content::{Gallery, GalleryMaterial, ProductImage},
    log,
    store::ContentStore,
};
use std::sync::Arc;

pub struct GalleryEditor {
    store: Arc<ContentStore>,
    bus: SyncBus,
    gallery: Gallery,
}

impl GalleryEditor {
    /// Load the gallery, seeding the default materials on first use.
    pub fn open(store: Arc<ContentStore>, bus: SyncBus) -> Self {
        let gallery = store.load_or_seed::<Gallery>();
        Self { store, bus, gallery }
    }

    /// Materials in display order.
    pub const fn items(&self) -> &Gallery {
        &self.gallery
    }

    fn commit(&self) {
        self.store.put(&self.gallery);
        let views = self.bus.publish(&self.gallery);
        log!("store"; "gallery saved ({} materials, {views} views notified)", self.gallery.len());
    }

    fn material_mut(&mut self, id: u32) -> Result<&mut GalleryMaterial, EditorError> {
        self.gallery
            .get_mut(id)
            .ok_or(EditorError::NotFound(Missing::Material(id)))
    }

    // ========================================================================
    // Materials
    // ========================================================================

    /// Append a new material and return its id, one above the highest id
    /// present.
    pub fn add_material(&mut self, draft: MaterialDraft) -> Result<u32, EditorError> {
        let draft = validated_material(draft)?;
        let id = self
            .gallery
            .next_id()
            .ok_or(EditorError::IdsExhausted("materials"))?;
        self.gallery.push(GalleryMaterial {
            id,
            name: draft.name,
            image: draft.image,
            description: draft.description,
            products: Vec::new(),
        });
        self.commit();
        Ok(id)
    }

    /// Replace name, image and description. Products are kept.
    pub fn update_material(&mut self, id: u32, draft: MaterialDraft) -> Result<(), EditorError> {
        let draft = validated_material(draft)?;
        let material = self.material_mut(id)?;
        material.name = draft.name;
        material.image = draft.image;
        material.description = draft.description;
        self.commit();
        Ok(())
    }

    /// Remove a material together with its products.
    pub fn delete_material(&mut self, id: u32) -> Result<GalleryMaterial, EditorError> {
        let removed = self
            .gallery
            .remove(id)
            .ok_or(EditorError::NotFound(Missing::Material(id)))?;
        self.commit();
        Ok(removed)
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Append a product to a material and return the product id.
    pub fn add_product(&mut self, material_id: u32, draft: ProductDraft) -> Result<u32, EditorError> {
        let draft = validated_product(draft)?;
        let material = self.material_mut(material_id)?;
        let id = material
            .next_product_id()
            .ok_or(EditorError::IdsExhausted("products"))?;
        material.products.push(ProductImage {
            id,
            title: draft.title,
            image: draft.image,
            description: draft.description,
        });
        self.commit();
        Ok(id)
    }

    pub fn update_product(
        &mut self,
        material_id: u32,
        product_id: u32,
        draft: ProductDraft,
    ) -> Result<(), EditorError> {
        let draft = validated_product(draft)?;
        let product = self
            .material_mut(material_id)?
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(EditorError::NotFound(Missing::Product {
                material: material_id,
                product: product_id,
            }))?;
        product.title = draft.title;
        product.image = draft.image;
        product.description = draft.description;
        self.commit();
        Ok(())
    }

    pub fn delete_product(&mut self, material_id: u32, product_id: u32) -> Result<ProductImage, EditorError> {
        let products = &mut self.material_mut(material_id)?.products;
        let index = products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(EditorError::NotFound(Missing::Product {
                material: material_id,
                product: product_id,
            }))?;
        let removed = products.remove(index);
        self.commit();
        Ok(removed)
    }
}

/// Reject blank fields, otherwise return the draft with trimmed fields.
fn validated_material(draft: MaterialDraft) -> Result<MaterialDraft, EditorError> {
    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(EditorError::Invalid(errors));
    }
    Ok(MaterialDraft::new(
        draft.name.trim(),
        draft.image.trim(),
        draft.description.trim(),
    ))
}

fn validated_product(draft: ProductDraft) -> Result<ProductDraft, EditorError> {
    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(EditorError::Invalid(errors));
    }
    Ok(ProductDraft::new(
        draft.title.trim(),
        draft.image.trim(),
        draft.description.trim(),
    ))
}

//! SEO settings: meta tags and the `LocalBusiness` structured data.

use super::{EditorError, SectionEditor, slot, take};
use crate::content::SeoContent;

pub type SeoEditor = SectionEditor<SeoContent>;

field_enum! {
    SeoField {
        Title => "title",
        Description => "description",
        Keywords => "keywords",
        OgImage => "og-image",
        CanonicalUrl => "canonical-url",
    }
}

field_enum! {
    StructuredField {
        BusinessName => "business-name",
        BusinessType => "business-type",
        Telephone => "telephone",
        Email => "email",
    }
}

field_enum! {
    AddressField {
        Street => "street",
        City => "city",
        PostalCode => "postal-code",
        Country => "country",
    }
}

impl SeoEditor {
    pub fn update_field(&mut self, field: SeoField, value: impl Into<String>) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|seo| {
            let target = match field {
                SeoField::Title => &mut seo.title,
                SeoField::Description => &mut seo.description,
                SeoField::Keywords => &mut seo.keywords,
                SeoField::OgImage => &mut seo.og_image,
                SeoField::CanonicalUrl => &mut seo.canonical_url,
            };
            *target = value;
            Ok(())
        })
    }

    pub fn update_structured_data(
        &mut self,
        field: StructuredField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|seo| {
            let data = &mut seo.structured_data;
            let target = match field {
                StructuredField::BusinessName => &mut data.business_name,
                StructuredField::BusinessType => &mut data.business_type,
                StructuredField::Telephone => &mut data.telephone,
                StructuredField::Email => &mut data.email,
            };
            *target = value;
            Ok(())
        })
    }

    pub fn update_address(&mut self, field: AddressField, value: impl Into<String>) -> Result<(), EditorError> {
        let value = value.into();
        self.edit(|seo| {
            let address = &mut seo.structured_data.address;
            let target = match field {
                AddressField::Street => &mut address.street,
                AddressField::City => &mut address.city,
                AddressField::PostalCode => &mut address.postal_code,
                AddressField::Country => &mut address.country,
            };
            *target = value;
            Ok(())
        })
    }

    // ------------------------------------------------------------------------
    // Opening hours (schema.org notation)
    // ------------------------------------------------------------------------

    pub fn set_opening_hours(&mut self, index: usize, spec: impl Into<String>) -> Result<(), EditorError> {
        let spec = spec.into();
        self.edit(|seo| {
            *slot(&mut seo.structured_data.opening_hours, "openingHours", index)? = spec;
            Ok(())
        })
    }

    pub fn add_opening_hours(&mut self, spec: impl Into<String>) -> Result<usize, EditorError> {
        let spec = spec.into();
        self.edit(|seo| {
            let hours = &mut seo.structured_data.opening_hours;
            hours.push(spec);
            Ok(hours.len() - 1)
        })
    }

    pub fn remove_opening_hours(&mut self, index: usize) -> Result<String, EditorError> {
        self.edit(|seo| take(&mut seo.structured_data.opening_hours, "openingHours", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bus::SyncBus, content::Content, editor::SavePolicy, store::ContentStore};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_nested_updates_publish_full_record() {
        let store = Arc::new(ContentStore::in_memory());
        let bus = SyncBus::new();
        let last: Arc<Mutex<Option<SeoContent>>> = Arc::default();
        let l = Arc::clone(&last);
        let _sub = bus.subscribe(move |seo: &SeoContent| {
            *l.lock().unwrap() = Some(seo.clone());
        });

        let mut editor = SeoEditor::open(Arc::clone(&store), bus, SavePolicy::Immediate);
        editor.update_address(AddressField::City, "Kassel").unwrap();
        editor.update_structured_data(StructuredField::Telephone, "+49 561 0").unwrap();

        let seen = last.lock().unwrap().clone().unwrap();
        assert_eq!(seen.structured_data.address.city, "Kassel");
        assert_eq!(seen.structured_data.telephone, "+49 561 0");
        assert_eq!(seen.title, SeoContent::seed().title);
        assert_eq!(store.load::<SeoContent>(), Some(seen));
    }

    #[test]
    fn test_opening_hours_list() {
        let store = Arc::new(ContentStore::in_memory());
        let mut editor = SeoEditor::open(store, SyncBus::new(), SavePolicy::Manual);

        assert_eq!(editor.add_opening_hours("Su closed").unwrap(), 2);
        editor.set_opening_hours(0, "Mo-Fr 08:00-17:00").unwrap();
        assert_eq!(editor.remove_opening_hours(1).unwrap(), "Sa 10:00-16:00");

        assert_eq!(
            editor.current().structured_data.opening_hours,
            ["Mo-Fr 08:00-17:00", "Su closed"]
        );
        assert!(editor.remove_opening_hours(7).is_err());
    }

    #[test]
    fn test_update_canonical_url() {
        let store = Arc::new(ContentStore::in_memory());
        let mut editor = SeoEditor::open(store, SyncBus::new(), SavePolicy::Manual);
        editor.update_field(SeoField::CanonicalUrl, "https://www.lumixpert.de").unwrap();
        assert_eq!(editor.current().canonical_url, "https://www.lumixpert.de");
    }
}
